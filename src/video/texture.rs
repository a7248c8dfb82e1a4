use std::path::Path;

use crate::assets::{AssetLoader, Image};
use crate::errors::*;

use super::context::GraphicsContext;
use super::types::{TextureFilter, TextureId, TextureWrap};
use super::Bindable;

/// Owns one 2D texture object with RGBA8 storage.
///
/// Sampling is fixed at upload: coordinates repeat on both axes and minification
/// picks the nearest texel.
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture {
    pub fn create(ctx: &mut GraphicsContext) -> Result<Self> {
        let id = unsafe { ctx.visitor().create_texture()? };
        trace!("{} created.", id);

        Ok(Texture {
            id,
            width: 0,
            height: 0,
        })
    }

    /// Creates a texture and uploads the image asset at `path`, relative to the textures
    /// directory of `loader`.
    pub fn load<P: AsRef<Path>>(
        ctx: &mut GraphicsContext,
        loader: &AssetLoader,
        path: P,
    ) -> Result<Self> {
        let image = loader.read_image(loader.texture_path(path))?;

        let mut texture = Texture::create(ctx)?;
        if let Err(err) = texture.upload_image(ctx, &image) {
            texture.destroy(ctx)?;
            return Err(err);
        }

        Ok(texture)
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Binds this texture to unit 0 and re-specifies its storage with RGBA8 `pixels`.
    pub fn upload(
        &mut self,
        ctx: &mut GraphicsContext,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.bind(ctx)?;

        unsafe {
            let visitor = ctx.visitor();
            visitor.tex_image_2d(width, height, pixels)?;
            visitor.tex_parameters(TextureWrap::Repeat, TextureFilter::Nearest)?;
        }

        self.width = width;
        self.height = height;
        Ok(())
    }

    #[inline]
    pub fn upload_image(&mut self, ctx: &mut GraphicsContext, image: &Image) -> Result<()> {
        self.upload(ctx, &image.pixels, image.width, image.height)
    }

    pub fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        trace!("{} destroyed.", self.id);
        unsafe { ctx.visitor().delete_texture(self.id) }
    }
}

impl Bindable for Texture {
    /// Activates unit 0 and binds this texture to its 2D target.
    fn bind(&self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe {
            let visitor = ctx.visitor();
            visitor.active_texture(0)?;
            visitor.bind_texture(Some(self.id))
        }
    }

    fn reset(&self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe { ctx.visitor().bind_texture(None) }
    }
}
