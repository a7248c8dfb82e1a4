//! Shader units and the programs they are linked into.
//!
//! A `ShaderUnit` only exists once its source has been compiled successfully, and a
//! `ShaderProgram` only exists once its units have been linked successfully. Failures
//! release the objects that were allocated for them and surface the driver's log.

use crate::assets::{AssetLoader, ShaderInfo};
use crate::errors::*;

use super::context::GraphicsContext;
use super::types::{ProgramId, ShaderId, ShaderStage, UniformValue};
use super::Bindable;

/// Owns one compiled shader object.
pub struct ShaderUnit {
    id: ShaderId,
    stage: ShaderStage,
}

impl ShaderUnit {
    /// Compiles `source` as a shader of `stage`.
    pub fn compile(ctx: &mut GraphicsContext, stage: ShaderStage, source: &str) -> Result<Self> {
        unsafe {
            let visitor = ctx.visitor();
            let id = visitor.create_shader(stage)?;

            if !visitor.compile_shader(id, source)? {
                let log = visitor.shader_info_log(id)?;
                visitor.delete_shader(id)?;
                return Err(Error::ShaderCompile { stage, log });
            }

            trace!("{} compiled as {} shader.", id, stage);
            Ok(ShaderUnit { id, stage })
        }
    }

    /// Reads the shader asset `name` and compiles it.
    pub fn load(
        ctx: &mut GraphicsContext,
        loader: &AssetLoader,
        stage: ShaderStage,
        name: &str,
    ) -> Result<Self> {
        let source = loader.read_text(loader.shader_path(name))?;
        ShaderUnit::compile(ctx, stage, &source)
    }

    #[inline]
    pub fn id(&self) -> ShaderId {
        self.id
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe { ctx.visitor().delete_shader(self.id) }
    }
}

/// Owns one linked program object.
pub struct ShaderProgram {
    id: ProgramId,
}

impl ShaderProgram {
    /// Links a vertex unit and a fragment unit into a program.
    ///
    /// Both units are detached and released afterwards, whether the link succeeded
    /// or not.
    pub fn link(ctx: &mut GraphicsContext, vs: ShaderUnit, fs: ShaderUnit) -> Result<Self> {
        let (id, linked) = unsafe {
            let visitor = ctx.visitor();
            let id = visitor.create_program()?;
            visitor.attach_shader(id, vs.id)?;
            visitor.attach_shader(id, fs.id)?;
            let linked = visitor.link_program(id)?;
            visitor.detach_shader(id, vs.id)?;
            visitor.detach_shader(id, fs.id)?;
            (id, linked)
        };

        vs.destroy(ctx)?;
        fs.destroy(ctx)?;

        if !linked {
            let log = unsafe {
                let visitor = ctx.visitor();
                let log = visitor.program_info_log(id)?;
                visitor.delete_program(id)?;
                log
            };

            return Err(Error::ProgramLink { log });
        }

        trace!("{} linked.", id);
        Ok(ShaderProgram { id })
    }

    /// Compiles the shader assets named by `info` and links them.
    pub fn load(ctx: &mut GraphicsContext, loader: &AssetLoader, info: &ShaderInfo) -> Result<Self> {
        let vs = ShaderUnit::load(ctx, loader, ShaderStage::Vertex, &info.vertex_name)?;
        let fs = match ShaderUnit::load(ctx, loader, ShaderStage::Fragment, &info.fragment_name) {
            Ok(fs) => fs,
            Err(err) => {
                vs.destroy(ctx)?;
                return Err(err);
            }
        };

        ShaderProgram::link(ctx, vs, fs)
    }

    #[inline]
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Uploads `value` into the uniform variable `name`. This program must be bound.
    ///
    /// The location is looked up on every call. Names that are not an active uniform
    /// of this program are ignored.
    pub fn set_uniform<T>(&self, ctx: &mut GraphicsContext, name: &str, value: T) -> Result<()>
    where
        T: Into<UniformValue>,
    {
        unsafe {
            let visitor = ctx.visitor();
            match visitor.uniform_location(self.id, name)? {
                Some(location) => visitor.uniform(location, &value.into()),
                None => {
                    trace!("{} has no active uniform '{}'.", self.id, name);
                    Ok(())
                }
            }
        }
    }

    /// Stops using this program and releases it.
    pub fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        trace!("{} destroyed.", self.id);

        unsafe {
            let visitor = ctx.visitor();
            visitor.use_program(None)?;
            visitor.delete_program(self.id)
        }
    }
}

impl Bindable for ShaderProgram {
    fn bind(&self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe { ctx.visitor().use_program(Some(self.id)) }
    }

    fn reset(&self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe { ctx.visitor().use_program(None) }
    }
}
