//! Sequences the per-frame work on a graphics context.

use crate::errors::*;
use crate::math::{Color, Matrix4, Orthographic};

use super::context::GraphicsContext;
use super::types::*;
use super::Bindable;

/// The information of the renderer during the last frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameInfo {
    pub drawcalls: u32,
    pub triangles: u32,
}

/// Owns the graphics context, and the viewport and projection that follow the size of
/// the framebuffer.
///
/// The renderer does not keep track of what is bound. Draws are issued against
/// whatever the caller has bound before.
pub struct Renderer {
    ctx: GraphicsContext,
    ortho: Orthographic,
    viewport: Viewport,
    depth_test: bool,
    depth_cleared: bool,
    debug_draw: bool,
    frame: FrameInfo,
    last_frame: FrameInfo,
}

impl Renderer {
    /// Takes over `ctx` and sets it up for a framebuffer of `dimensions` pixels.
    pub fn new(mut ctx: GraphicsContext, dimensions: (u32, u32)) -> Result<Self> {
        let info = ctx.info();
        info!("OpenGL version: {}", info.version);
        info!("Vendor: {}", info.vendor);
        info!("Renderer: {}", info.renderer);
        info!("GLSL version: {}", info.shading_language);

        unsafe {
            ctx.visitor().clear_color(Color::cornflower_blue())?;
        }

        let mut renderer = Renderer {
            ctx,
            ortho: Orthographic::new(1.0, 1.0),
            viewport: Viewport::default(),
            depth_test: false,
            depth_cleared: false,
            debug_draw: false,
            frame: FrameInfo::default(),
            last_frame: FrameInfo::default(),
        };

        renderer.resize(dimensions)?;
        Ok(renderer)
    }

    #[inline]
    pub fn ctx(&self) -> &GraphicsContext {
        &self.ctx
    }

    #[inline]
    pub fn ctx_mut(&mut self) -> &mut GraphicsContext {
        &mut self.ctx
    }

    /// Clears the color buffer, and the depth buffer while depth testing is enabled.
    pub fn begin_frame(&mut self) -> Result<()> {
        self.frame = FrameInfo::default();

        let depth = self.depth_test;
        self.depth_cleared = depth;

        let mode = if self.debug_draw {
            PolygonMode::Line
        } else {
            PolygonMode::Fill
        };

        unsafe {
            let visitor = self.ctx.visitor();
            visitor.polygon_mode(mode)?;
            visitor.clear(true, depth)
        }
    }

    /// Finishes the frame. Everything drawn after this belongs to the next frame.
    pub fn end_frame(&mut self) -> Result<FrameInfo> {
        self.last_frame = self.frame;
        self.frame = FrameInfo::default();
        Ok(self.last_frame)
    }

    /// The statistics of the last finished frame.
    #[inline]
    pub fn last_frame(&self) -> FrameInfo {
        self.last_frame
    }

    /// Sets the viewport to cover the whole framebuffer, and recomputes the orthographic
    /// projection for it.
    pub fn resize(&mut self, dimensions: (u32, u32)) -> Result<()> {
        let (width, height) = dimensions;
        if width == 0 || height == 0 {
            debug!("Ignores resizing to empty framebuffer {}x{}.", width, height);
            return Ok(());
        }

        self.viewport = Viewport {
            x: 0,
            y: 0,
            width,
            height,
        };

        self.ortho = Orthographic::new(width as f32, height as f32);

        unsafe { self.ctx.visitor().viewport(self.viewport) }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn framebuffer_size(&self) -> (u32, u32) {
        (self.viewport.width, self.viewport.height)
    }

    /// Width over height of the framebuffer.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.viewport.width as f32 / self.viewport.height.max(1) as f32
    }

    #[inline]
    pub fn projection(&self) -> Orthographic {
        self.ortho
    }

    /// The orthographic projection matrix of the current framebuffer.
    #[inline]
    pub fn ortho(&self) -> Matrix4<f32> {
        self.ortho.matrix()
    }

    pub fn enable_blend(&mut self) -> Result<()> {
        unsafe {
            let visitor = self.ctx.visitor();
            visitor.enable(Capability::Blend)?;
            visitor.blend_func(BlendFactor::SourceAlpha, BlendFactor::OneMinusSourceAlpha)
        }
    }

    pub fn disable_blend(&mut self) -> Result<()> {
        unsafe { self.ctx.visitor().disable(Capability::Blend) }
    }

    /// Enables depth testing. The depth buffer is cleared first if it has not been
    /// cleared since the frame began.
    pub fn enable_depth(&mut self) -> Result<()> {
        self.depth_test = true;

        unsafe {
            let visitor = self.ctx.visitor();
            if !self.depth_cleared {
                self.depth_cleared = true;
                visitor.clear(false, true)?;
            }

            visitor.enable(Capability::DepthTest)
        }
    }

    pub fn disable_depth(&mut self) -> Result<()> {
        self.depth_test = false;
        unsafe { self.ctx.visitor().disable(Capability::DepthTest) }
    }

    #[inline]
    pub fn is_depth_enabled(&self) -> bool {
        self.depth_test
    }

    /// Rasterizes polygons as lines from the next frame on.
    #[inline]
    pub fn set_debug_draw(&mut self, enable: bool) {
        self.debug_draw = enable;
    }

    #[inline]
    pub fn debug_draw(&self) -> bool {
        self.debug_draw
    }

    pub fn toggle_debug_draw(&mut self) {
        self.debug_draw = !self.debug_draw;
        info!("Debug draw {}.", if self.debug_draw { "on" } else { "off" });
    }

    #[inline]
    pub fn bind_object(&mut self, object: &dyn Bindable) -> Result<()> {
        object.bind(&mut self.ctx)
    }

    /// Resets `objects` in order. A vertex array must come first, otherwise it records
    /// the reset of its element buffer.
    pub fn reset_objects(&mut self, objects: &[&dyn Bindable]) -> Result<()> {
        for v in objects {
            v.reset(&mut self.ctx)?;
        }

        Ok(())
    }

    /// Draws `count` indices of the bound element buffer as a triangle list.
    pub fn draw_indexed_triangles(&mut self, count: u32) -> Result<()> {
        unsafe {
            self.ctx.visitor().draw(DrawMode::IndexedTriangles, count)?;
        }

        self.frame.drawcalls += 1;
        self.frame.triangles += count / 3;
        Ok(())
    }

    /// Draws `count` vertices of the bound vertex array as a triangle list.
    pub fn draw_triangles(&mut self, count: u32) -> Result<()> {
        unsafe {
            self.ctx.visitor().draw(DrawMode::Triangles, count)?;
        }

        self.frame.drawcalls += 1;
        self.frame.triangles += count / 3;
        Ok(())
    }

    /// Breaks every binding, and waits for the submitted work to complete. Called before
    /// the context goes away.
    pub fn dispose(&mut self) -> Result<()> {
        unsafe {
            let visitor = self.ctx.visitor();
            visitor.bind_vertex_array(None)?;
            visitor.bind_buffer(BufferTarget::Array, None)?;
            visitor.bind_buffer(BufferTarget::ElementArray, None)?;
            visitor.use_program(None)?;
            visitor.active_texture(0)?;
            visitor.bind_texture(None)?;
            visitor.polygon_mode(PolygonMode::Fill)?;
            visitor.flush()
        }
    }
}
