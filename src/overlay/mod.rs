//! Immediate-mode layers drawn on top of the active test bed.
//!
//! An overlay is constructed once the graphics context exists, updated before the
//! scene and rendered after it every frame, and disposed before the context goes away.

pub mod menu_bar;

pub use self::menu_bar::MenuBar;

use std::time::Duration;

use crate::errors::*;
use crate::video::Renderer;

pub trait Overlay {
    /// Advances the overlay by `dt`. Called before the scene is updated.
    fn update(&mut self, dt: Duration) -> Result<()>;

    /// Draws the overlay. Called after the scene has been drawn.
    fn render(&mut self, renderer: &mut Renderer) -> Result<()>;

    /// Releases every object the overlay has created.
    fn dispose(self: Box<Self>, renderer: &mut Renderer) -> Result<()>;
}
