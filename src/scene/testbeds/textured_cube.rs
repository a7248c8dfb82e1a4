use std::mem;
use std::time::Duration;

use crate::assets::{AssetLoader, ShaderInfo};
use crate::errors::*;
use crate::math::prelude::*;
use crate::math::projection;
use crate::scene::transform::Transform;
use crate::scene::TestBed;
use crate::video::prelude::*;

/// Two triangles per face, position and texture coordinates per vertex.
#[rustfmt::skip]
const VERTICES: [f32; 180] = [
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,

    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

const COMPONENTS: u32 = 5;

const STRIDE: u32 = COMPONENTS * mem::size_of::<f32>() as u32;

/// Degrees per second around the Y axis.
const ROTATION_SPEED: f32 = 5.0;

struct Objects {
    vao: VertexArray,
    vbo: VertexBuffer,
    program: ShaderProgram,
    texture: Texture,
}

impl Objects {
    fn upload(&mut self, renderer: &mut Renderer) -> Result<()> {
        renderer.bind_object(&self.vao)?;

        renderer.bind_object(&self.vbo)?;
        self.vbo.data(renderer.ctx_mut(), &VERTICES)?;

        self.vao.enable_attributes(
            renderer.ctx_mut(),
            &[
                VertexAttribute::float(0, 3, STRIDE, 0),
                VertexAttribute::float(1, 2, STRIDE, 3 * mem::size_of::<f32>() as u32),
            ],
        )?;

        renderer.reset_objects(&[&self.vao, &self.vbo, &self.texture])
    }

    fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        self.texture.destroy(ctx)?;
        self.program.destroy(ctx)?;
        self.vbo.destroy(ctx)?;
        self.vao.destroy(ctx)
    }
}

/// A textured unit cube spinning slowly in front of a perspective camera.
pub struct TexturedCube {
    objects: Option<Objects>,
    transform: Transform,
    angle: f32,
    image: String,
}

impl Default for TexturedCube {
    fn default() -> Self {
        TexturedCube::new()
    }
}

impl TexturedCube {
    pub const NAME: &'static str = "Textured Cube";

    pub fn new() -> Self {
        TexturedCube::with_image("wall.png")
    }

    /// Creates the cube with another image from the textures directory.
    pub fn with_image<T: Into<String>>(image: T) -> Self {
        TexturedCube {
            objects: None,
            transform: Transform::default(),
            angle: 0.0,
            image: image.into(),
        }
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The camera at `(0, 2, 3)`, looking at the origin.
    pub fn view() -> Matrix4<f32> {
        let eye = Point3::new(0.0, 2.0, 3.0);
        let target = Point3::new(0.0, 0.0, 0.0);
        Matrix4::look_at(eye, target, Vector3::unit_y())
    }
}

impl TestBed for TexturedCube {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn load(&mut self, renderer: &mut Renderer, assets: &AssetLoader) -> Result<()> {
        if self.objects.is_some() {
            return Ok(());
        }

        let ctx = renderer.ctx_mut();
        let info = ShaderInfo::new("cubevertex", "cubefragment");
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

        let mut objects = Objects {
            vao,
            vbo,
            program,
            texture,
        };

        if let Err(err) = objects.upload(renderer) {
            objects.destroy(renderer.ctx_mut())?;
            return Err(err);
        }

        self.angle = 0.0;
        self.transform = Transform::default();
        self.objects = Some(objects);
        Ok(())
    }

    fn unload(&mut self, renderer: &mut Renderer) -> Result<()> {
        match self.objects.take() {
            Some(objects) => objects.destroy(renderer.ctx_mut()),
            None => Ok(()),
        }
    }

    fn update(&mut self, dt: Duration) -> Result<()> {
        let secs = dt.as_secs() as f32 + dt.subsec_nanos() as f32 * 1e-9;
        self.angle = (self.angle + ROTATION_SPEED * secs) % 360.0;
        self.transform.rotation = Quaternion::from_axis_angle(Vector3::unit_y(), Deg(self.angle));
        Ok(())
    }

    fn render(&mut self, renderer: &mut Renderer, _: Duration) -> Result<()> {
        let objects = match self.objects {
            Some(ref objects) => objects,
            None => return Ok(()),
        };

        let projection = projection::perspective(45.0, renderer.aspect(), 0.1, 100.0);

        renderer.enable_depth()?;

        renderer.bind_object(&objects.vao)?;
        renderer.bind_object(&objects.program)?;
        renderer.bind_object(&objects.texture)?;

        let ctx = renderer.ctx_mut();
        objects.program.set_uniform(ctx, "uTexture0", 0)?;
        objects.program.set_uniform(ctx, "uModel", self.transform.model_matrix())?;
        objects.program.set_uniform(ctx, "uView", Self::view())?;
        objects.program.set_uniform(ctx, "uProjection", projection)?;

        renderer.draw_triangles(VERTICES.len() as u32 / COMPONENTS)?;
        renderer.disable_depth()
    }

    #[inline]
    fn is_loaded(&self) -> bool {
        self.objects.is_some()
    }
}
