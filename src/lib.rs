//! # Easel
//!
//! A minimal real-time rendering harness built on OpenGL. It opens a window, creates a GL
//! context and keeps a registry of small self-contained scenes (test beds) that upload their
//! geometry, shaders and textures to the GPU and draw themselves every frame, optionally with
//! an overlay on top.
//!
//! The interesting part lives in `video`: thin move-only wrappers around GL objects (buffers,
//! vertex arrays, shader programs and textures) that take the graphics context explicitly, so
//! the implicit bind state of OpenGL shows up in the function signatures instead of hiding in
//! globals.
//!
//! ```rust,ignore
//! use easel::prelude::*;
//!
//! let mut engine = Engine::new(Settings::default())?;
//! engine.registry_mut().add(ColoredQuad::new());
//! engine.attach_overlay(|renderer| Ok(Box::new(MenuBar::new(renderer)?)))?;
//! engine.run()?;
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub extern crate cgmath;

#[macro_use]
pub mod errors;

pub mod application;
pub mod assets;
pub mod math;
pub mod overlay;
pub mod scene;
pub mod video;
pub mod window;

pub mod prelude {
    pub use crate::application::{Engine, EngineParams, Settings};
    pub use crate::assets::{AssetLoader, Image};
    pub use crate::errors::{Error, Result};
    pub use crate::math::prelude::*;
    pub use crate::overlay::{MenuBar, Overlay};
    pub use crate::scene::prelude::*;
    pub use crate::scene::transform::Transform;
    pub use crate::video::prelude::*;
    pub use crate::window::prelude::*;
}
