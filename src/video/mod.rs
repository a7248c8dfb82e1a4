//! Thin wrappers around the objects of an OpenGL context.
//!
//! Every wrapper owns exactly one object name issued by the driver, and takes the
//! `GraphicsContext` explicitly on each call. Wrappers are move-only and consumed by
//! `destroy`, so an object can never be released twice or used after it has been
//! released.
//!
//! The bind state of OpenGL is still global, and the order of calls matters:
//!
//! ```rust,ignore
//! let mut vao = VertexArray::create(ctx)?;
//! vao.bind(ctx)?;
//!
//! let mut vbo = VertexBuffer::create(ctx, BufferUsage::StaticDraw)?;
//! vbo.data(ctx, &vertices)?;
//!
//! // Attributes read from the vertex buffer bound at this point.
//! vao.enable_attributes(ctx, &[VertexAttribute::float(0, 3, 12, 0)])?;
//!
//! // Always reset the vertex array first, otherwise it captures the unbinds.
//! renderer.reset_objects(&[&vao, &vbo])?;
//! ```

pub mod backends;
pub mod types;

pub mod buffer;
pub mod context;
pub mod renderer;
pub mod shader;
pub mod texture;
pub mod vertex_array;

pub use self::buffer::{BufferElement, BufferObject, IndexBuffer, VertexBuffer};
pub use self::context::GraphicsContext;
pub use self::renderer::{FrameInfo, Renderer};
pub use self::shader::{ShaderProgram, ShaderUnit};
pub use self::texture::Texture;
pub use self::types::*;
pub use self::vertex_array::VertexArray;

use crate::errors::*;

/// Objects that could be attached to, and detached from, a bind point of the context.
pub trait Bindable {
    /// Makes this object the active one of its bind point.
    fn bind(&self, ctx: &mut GraphicsContext) -> Result<()>;

    /// Breaks the binding of the bind point this object attaches to.
    fn reset(&self, ctx: &mut GraphicsContext) -> Result<()>;
}

pub mod prelude {
    pub use super::{
        Bindable, BufferUsage, GraphicsContext, IndexBuffer, Renderer, ShaderProgram,
        ShaderStage, ShaderUnit, Texture, VertexArray, VertexAttribute, VertexBuffer,
    };
}
