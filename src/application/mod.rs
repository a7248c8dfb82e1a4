//! The window, the renderer, the test beds and the overlay, wired into one main loop.
//!
//! # Engine
//!
//! `Engine` is where we actually run the main loop. Each iteration polls the window
//! events, updates the overlay and the active test bed, and renders the test bed
//! followed by the overlay before presenting the frame.
//!
//! The keyboard drives the harness:
//!
//! * `Escape` closes the window.
//! * `F1` toggles wireframe rendering.
//! * `Tab` switches to the next test bed.
//! * `1` to `9` switch to the test bed registered at that position.

pub mod settings;
pub mod time;

mod engine;

pub use self::engine::Engine;
pub use self::settings::{EngineParams, Settings};
pub use self::time::TimeSystem;
