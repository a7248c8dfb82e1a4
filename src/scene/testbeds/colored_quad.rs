use std::mem;
use std::time::Duration;

use crate::assets::{AssetLoader, ShaderInfo};
use crate::errors::*;
use crate::scene::transform::Transform;
use crate::scene::TestBed;
use crate::video::prelude::*;

/// Position and RGBA color of each corner.
#[rustfmt::skip]
const VERTICES: [f32; 28] = [
     100.0,  100.0, 0.0, 1.0, 0.0, 0.0, 1.0,
     100.0, -100.0, 0.0, 0.0, 1.0, 0.0, 1.0,
    -100.0, -100.0, 0.0, 0.0, 0.0, 1.0, 1.0,
    -100.0,  100.0, 0.0, 0.0, 1.0, 1.0, 1.0,
];

const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

const COMPONENTS: u32 = 7;

const STRIDE: u32 = COMPONENTS * mem::size_of::<f32>() as u32;

struct Objects {
    vao: VertexArray,
    vbo: VertexBuffer,
    ebo: IndexBuffer,
    program: ShaderProgram,
}

impl Objects {
    fn upload(&mut self, renderer: &mut Renderer) -> Result<()> {
        renderer.bind_object(&self.vao)?;

        renderer.bind_object(&self.vbo)?;
        self.vbo.data(renderer.ctx_mut(), &VERTICES)?;

        renderer.bind_object(&self.ebo)?;
        self.ebo.data(renderer.ctx_mut(), &INDICES)?;

        self.vao.enable_attributes(
            renderer.ctx_mut(),
            &[
                VertexAttribute::float(0, 3, STRIDE, 0),
                VertexAttribute::float(1, 4, STRIDE, 3 * mem::size_of::<f32>() as u32),
            ],
        )?;

        renderer.reset_objects(&[&self.vao, &self.vbo, &self.ebo])
    }

    fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        self.program.destroy(ctx)?;
        self.ebo.destroy(ctx)?;
        self.vbo.destroy(ctx)?;
        self.vao.destroy(ctx)
    }
}

/// A quad with one color per corner, blended across its surface.
pub struct ColoredQuad {
    objects: Option<Objects>,
    transform: Transform,
}

impl Default for ColoredQuad {
    fn default() -> Self {
        ColoredQuad::new()
    }
}

impl ColoredQuad {
    pub const NAME: &'static str = "Colored Quad";

    pub fn new() -> Self {
        ColoredQuad {
            objects: None,
            transform: Transform::default(),
        }
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

impl TestBed for ColoredQuad {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn load(&mut self, renderer: &mut Renderer, assets: &AssetLoader) -> Result<()> {
        if self.objects.is_some() {
            return Ok(());
        }

        let ctx = renderer.ctx_mut();
        let info = ShaderInfo::new("colorvertex", "colorfragment");
        let program = ShaderProgram::load(ctx, assets, &info)?;

        let vao = try_or_destroy!(ctx, VertexArray::create(ctx), program);
        let vbo = try_or_destroy!(
            ctx,
            VertexBuffer::create(ctx, BufferUsage::StaticDraw),
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

        let mut objects = Objects {
            vao,
            vbo,
            ebo,
            program,
        };

        if let Err(err) = objects.upload(renderer) {
            objects.destroy(renderer.ctx_mut())?;
            return Err(err);
        }

        debug!(
            "{}: {} vertices, {} indices, stride {} bytes, buffer {} bytes.",
            Self::NAME,
            VERTICES.len() as u32 / COMPONENTS,
            INDICES.len(),
            STRIDE,
            objects.vbo.byte_size()
        );

        self.transform = Transform::from_position([100.0, 0.0, 0.0]);
        self.objects = Some(objects);
        Ok(())
    }

    fn unload(&mut self, renderer: &mut Renderer) -> Result<()> {
        match self.objects.take() {
            Some(objects) => objects.destroy(renderer.ctx_mut()),
            None => Ok(()),
        }
    }

    fn render(&mut self, renderer: &mut Renderer, _: Duration) -> Result<()> {
        let objects = match self.objects {
            Some(ref objects) => objects,
            None => return Ok(()),
        };

        renderer.bind_object(&objects.vao)?;
        renderer.bind_object(&objects.program)?;

        let view = renderer.ortho() * self.transform.model_matrix();
        objects.program.set_uniform(renderer.ctx_mut(), "view", view)?;

        renderer.draw_indexed_triangles(INDICES.len() as u32)
    }

    #[inline]
    fn is_loaded(&self) -> bool {
        self.objects.is_some()
    }
}
