//! The backend of renderer, which should be responsible for only one thing:
//! forwarding object management, state changes and draw-calls to the low-level
//! OpenGL video APIs.
//!
//! The methods mirror the GL calls they stand for one to one, bind points included,
//! so the ordering rules of GL (e.g. vertex attributes latching the buffer bound at
//! the moment they are enabled) hold for every backend.

pub mod headless;

use crate::errors::*;
use crate::math::Color;

use super::types::*;

pub trait Visitor {
    /// Describes the implementation behind this backend.
    fn info(&self) -> ContextInfo;

    unsafe fn create_buffer(&mut self) -> Result<BufferId>;

    unsafe fn delete_buffer(&mut self, id: BufferId) -> Result<()>;

    /// Binds `id` to `target`, or breaks the existing binding with `None`.
    unsafe fn bind_buffer(&mut self, target: BufferTarget, id: Option<BufferId>) -> Result<()>;

    /// Re-specifies the whole data store of the buffer bound to `target`.
    unsafe fn buffer_data(
        &mut self,
        target: BufferTarget,
        bytes: &[u8],
        usage: BufferUsage,
    ) -> Result<()>;

    /// Reads back the first `len` bytes of the buffer bound to `target`.
    unsafe fn read_buffer(&mut self, target: BufferTarget, len: usize) -> Result<Vec<u8>>;

    unsafe fn create_vertex_array(&mut self) -> Result<VertexArrayId>;

    unsafe fn delete_vertex_array(&mut self, id: VertexArrayId) -> Result<()>;

    unsafe fn bind_vertex_array(&mut self, id: Option<VertexArrayId>) -> Result<()>;

    /// Enables the attribute slot on the bound vertex array and sources it from the
    /// buffer currently bound to `BufferTarget::Array`.
    unsafe fn enable_vertex_attribute(&mut self, attribute: &VertexAttribute) -> Result<()>;

    unsafe fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderId>;

    /// Submits the source and compiles it, returns the compile status.
    unsafe fn compile_shader(&mut self, id: ShaderId, source: &str) -> Result<bool>;

    unsafe fn shader_info_log(&mut self, id: ShaderId) -> Result<String>;

    unsafe fn delete_shader(&mut self, id: ShaderId) -> Result<()>;

    unsafe fn create_program(&mut self) -> Result<ProgramId>;

    unsafe fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) -> Result<()>;

    unsafe fn detach_shader(&mut self, program: ProgramId, shader: ShaderId) -> Result<()>;

    /// Links the attached shaders, returns the link status.
    unsafe fn link_program(&mut self, program: ProgramId) -> Result<bool>;

    unsafe fn program_info_log(&mut self, program: ProgramId) -> Result<String>;

    unsafe fn delete_program(&mut self, program: ProgramId) -> Result<()>;

    unsafe fn use_program(&mut self, program: Option<ProgramId>) -> Result<()>;

    /// Returns the location of a active uniform variable, `None` if there is no such one.
    unsafe fn uniform_location(&mut self, program: ProgramId, name: &str) -> Result<Option<i32>>;

    /// Uploads a value into the uniform at `location` of the program in use.
    unsafe fn uniform(&mut self, location: i32, value: &UniformValue) -> Result<()>;

    unsafe fn create_texture(&mut self) -> Result<TextureId>;

    unsafe fn delete_texture(&mut self, id: TextureId) -> Result<()>;

    unsafe fn active_texture(&mut self, unit: u32) -> Result<()>;

    /// Binds `id` to the 2D target of the active texture unit.
    unsafe fn bind_texture(&mut self, id: Option<TextureId>) -> Result<()>;

    /// Specifies a RGBA8 image for the texture bound to the active unit.
    unsafe fn tex_image_2d(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<()>;

    unsafe fn tex_parameters(&mut self, wrap: TextureWrap, min_filter: TextureFilter)
        -> Result<()>;

    unsafe fn clear_color(&mut self, color: Color) -> Result<()>;

    unsafe fn clear(&mut self, color: bool, depth: bool) -> Result<()>;

    unsafe fn viewport(&mut self, vp: Viewport) -> Result<()>;

    unsafe fn enable(&mut self, capability: Capability) -> Result<()>;

    unsafe fn disable(&mut self, capability: Capability) -> Result<()>;

    unsafe fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) -> Result<()>;

    unsafe fn polygon_mode(&mut self, mode: PolygonMode) -> Result<()>;

    /// Submits a triangle list with whatever is currently bound.
    unsafe fn draw(&mut self, mode: DrawMode, count: u32) -> Result<()>;

    /// Blocks until all execution is complete.
    unsafe fn flush(&mut self) -> Result<()>;
}

pub mod gl;

/// Creates the OpenGL backend. The GL symbols must have been loaded from a current context.
pub fn new() -> Result<Box<dyn Visitor>> {
    let visitor = unsafe { self::gl::visitor::GLVisitor::new()? };
    Ok(Box::new(visitor))
}
