//! Small self-contained scenes, and the registry that switches between them.
//!
//! A `TestBed` owns every object it creates on load and releases all of them on unload.
//! `update` and `render` are only ever called on a loaded test bed.

pub mod registry;
pub mod testbeds;
pub mod transform;

pub mod prelude {
    pub use super::registry::TestBedRegistry;
    pub use super::testbeds::{ColoredQuad, TexturedCube, TexturedQuad};
    pub use super::transform::Transform;
    pub use super::TestBed;
}

use std::time::Duration;

use crate::assets::AssetLoader;
use crate::errors::*;
use crate::video::Renderer;

pub trait TestBed {
    /// The unique name of this test bed.
    fn name(&self) -> &str;

    /// Creates the objects and the transform of this scene.
    fn load(&mut self, renderer: &mut Renderer, assets: &AssetLoader) -> Result<()>;

    /// Releases everything `load` has created.
    fn unload(&mut self, renderer: &mut Renderer) -> Result<()>;

    /// Advances the scene by `dt`.
    fn update(&mut self, _dt: Duration) -> Result<()> {
        Ok(())
    }

    /// Binds the objects of this scene and draws it.
    fn render(&mut self, renderer: &mut Renderer, dt: Duration) -> Result<()>;

    fn is_loaded(&self) -> bool;
}
