use std::time::Duration;

use crate::errors::*;
use crate::math::prelude::*;
use crate::video::prelude::*;

use super::Overlay;

const VS: &str = r#"
#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 view;

void main()
{
    gl_Position = view * vec4(aPos, 0.0, 1.0);
}
"#;

const FS: &str = r#"
#version 330 core
out vec4 FragColor;

uniform vec4 uColor;

void main()
{
    FragColor = uColor;
}
"#;

const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// A translucent strip across the top of the window, and the frame statistics that
/// go along with it.
pub struct MenuBar {
    vao: VertexArray,
    vbo: VertexBuffer,
    ebo: IndexBuffer,
    program: ShaderProgram,

    color: Color,
    dimensions: (u32, u32),

    frames: u32,
    elapsed: Duration,
    fps: u32,
    drawcalls: u32,
}

impl MenuBar {
    /// Height of the strip in pixels.
    pub const HEIGHT: f32 = 40.0;

    pub fn new(renderer: &mut Renderer) -> Result<Self> {
        let ctx = renderer.ctx_mut();

        let vs = ShaderUnit::compile(ctx, ShaderStage::Vertex, VS)?;
        let fs = try_or_destroy!(ctx, ShaderUnit::compile(ctx, ShaderStage::Fragment, FS), vs);
        let program = ShaderProgram::link(ctx, vs, fs)?;

        let vao = try_or_destroy!(ctx, VertexArray::create(ctx), program);
        let vbo = try_or_destroy!(
            ctx,
            VertexBuffer::create(ctx, BufferUsage::DynamicDraw),
            program,
            vao
        );
        let ebo = try_or_destroy!(
            ctx,
            IndexBuffer::create(ctx, BufferUsage::StaticDraw),
            program,
            vao,
            vbo
        );

        let mut bar = MenuBar {
            vao,
            vbo,
            ebo,
            program,
            color: Color::new(0.1, 0.1, 0.1, 0.8),
            dimensions: (0, 0),
            frames: 0,
            elapsed: Duration::new(0, 0),
            fps: 0,
            drawcalls: 0,
        };

        if let Err(err) = bar.upload(renderer) {
            bar.destroy(renderer.ctx_mut())?;
            return Err(err);
        }

        Ok(bar)
    }

    /// Frames per second, measured over the last second.
    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn upload(&mut self, renderer: &mut Renderer) -> Result<()> {
        renderer.bind_object(&self.vao)?;
        self.ebo.data(renderer.ctx_mut(), &INDICES)?;
        self.layout(renderer)?;

        self.vao.enable_attributes(
            renderer.ctx_mut(),
            &[VertexAttribute::float(0, 2, 8, 0)],
        )?;

        renderer.reset_objects(&[&self.vao, &self.vbo, &self.ebo])
    }

    fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        self.program.destroy(ctx)?;
        self.ebo.destroy(ctx)?;
        self.vbo.destroy(ctx)?;
        self.vao.destroy(ctx)
    }

    /// Re-specifies the strip to span the top of the current framebuffer. Leaves the
    /// vertex buffer bound.
    fn layout(&mut self, renderer: &mut Renderer) -> Result<()> {
        let (left, right, _, top) = renderer.projection().bounds();
        let bottom = top - Self::HEIGHT;

        #[rustfmt::skip]
        let vertices = [
            right, top,
            right, bottom,
            left, bottom,
            left, top,
        ];

        self.vbo.data(renderer.ctx_mut(), &vertices)?;
        self.dimensions = renderer.framebuffer_size();
        Ok(())
    }
}

impl Overlay for MenuBar {
    fn update(&mut self, dt: Duration) -> Result<()> {
        self.frames += 1;
        self.elapsed += dt;

        if self.elapsed >= Duration::from_secs(1) {
            self.fps = self.frames;
            debug!("{} fps, {} drawcalls.", self.fps, self.drawcalls);

            self.frames = 0;
            self.elapsed = Duration::new(0, 0);
        }

        Ok(())
    }

    fn render(&mut self, renderer: &mut Renderer) -> Result<()> {
        self.drawcalls = renderer.last_frame().drawcalls;

        if self.dimensions != renderer.framebuffer_size() {
            self.layout(renderer)?;
        }

        renderer.bind_object(&self.vao)?;
        renderer.bind_object(&self.program)?;

        let view = renderer.ortho();
        let color: [f32; 4] = self.color.into();

        let ctx = renderer.ctx_mut();
        self.program.set_uniform(ctx, "view", view)?;
        self.program.set_uniform(ctx, "uColor", Vector4::from(color))?;

        renderer.draw_indexed_triangles(INDICES.len() as u32)?;
        renderer.reset_objects(&[&self.vao])
    }

    fn dispose(self: Box<Self>, renderer: &mut Renderer) -> Result<()> {
        (*self).destroy(renderer.ctx_mut())
    }
}
