use std::mem;
use std::time::Duration;

use crate::assets::{AssetLoader, ShaderInfo};
use crate::errors::*;
use crate::scene::transform::Transform;
use crate::scene::TestBed;
use crate::video::prelude::*;

/// Position and texture coordinates of each corner.
#[rustfmt::skip]
const VERTICES: [f32; 20] = [
     100.0,  100.0, 0.0, 1.0, 1.0,
     100.0, -100.0, 0.0, 1.0, 0.0,
    -100.0, -100.0, 0.0, 0.0, 0.0,
    -100.0,  100.0, 0.0, 0.0, 1.0,
];

const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

const COMPONENTS: u32 = 5;

const STRIDE: u32 = COMPONENTS * mem::size_of::<f32>() as u32;

struct Objects {
    vao: VertexArray,
    vbo: VertexBuffer,
    ebo: IndexBuffer,
    program: ShaderProgram,
    texture: Texture,
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
                VertexAttribute::float(1, 2, STRIDE, 3 * mem::size_of::<f32>() as u32),
            ],
        )?;

        renderer.reset_objects(&[&self.vao, &self.vbo, &self.ebo, &self.texture])
    }

    fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        self.texture.destroy(ctx)?;
        self.program.destroy(ctx)?;
        self.ebo.destroy(ctx)?;
        self.vbo.destroy(ctx)?;
        self.vao.destroy(ctx)
    }
}

/// A quad with an image stretched over it.
pub struct TexturedQuad {
    objects: Option<Objects>,
    transform: Transform,
    image: String,
}

impl Default for TexturedQuad {
    fn default() -> Self {
        TexturedQuad::new()
    }
}

impl TexturedQuad {
    pub const NAME: &'static str = "Textured Quad";

    pub fn new() -> Self {
        TexturedQuad::with_image("silk.png")
    }

    /// Creates the quad with another image from the textures directory.
    pub fn with_image<T: Into<String>>(image: T) -> Self {
        TexturedQuad {
            objects: None,
            transform: Transform::default(),
            image: image.into(),
        }
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

impl TestBed for TexturedQuad {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn load(&mut self, renderer: &mut Renderer, assets: &AssetLoader) -> Result<()> {
        if self.objects.is_some() {
            return Ok(());
        }

        let ctx = renderer.ctx_mut();
        let info = ShaderInfo::new("simplevertex", "simplefragment");
        let program = ShaderProgram::load(ctx, assets, &info)?;
        let texture = try_or_destroy!(ctx, Texture::load(ctx, assets, &self.image), program);

        let vao = try_or_destroy!(ctx, VertexArray::create(ctx), texture, program);
        let vbo = try_or_destroy!(
            ctx,
            VertexBuffer::create(ctx, BufferUsage::StaticDraw),
            texture,
            program,
            vao
        );
        let ebo = try_or_destroy!(
            ctx,
            IndexBuffer::create(ctx, BufferUsage::StaticDraw),
            texture,
            program,
            vao,
            vbo
        );

        let mut objects = Objects {
            vao,
            vbo,
            ebo,
            program,
            texture,
        };

        if let Err(err) = objects.upload(renderer) {
            objects.destroy(renderer.ctx_mut())?;
            return Err(err);
        }

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
        renderer.bind_object(&objects.texture)?;

        let view = renderer.ortho() * self.transform.model_matrix();
        let ctx = renderer.ctx_mut();
        objects.program.set_uniform(ctx, "uTexture", 0)?;
        objects.program.set_uniform(ctx, "view", view)?;

        renderer.draw_indexed_triangles(INDICES.len() as u32)
    }

    #[inline]
    fn is_loaded(&self) -> bool {
        self.objects.is_some()
    }
}
