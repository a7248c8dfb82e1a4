use std::ffi::CString;
use std::ptr;

use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::Color;
use crate::video::types::*;

use super::super::Visitor;
use super::capabilities::Capabilities;

pub struct GLVisitor {
    capabilities: Capabilities,
}

impl GLVisitor {
    pub unsafe fn new() -> Result<Self> {
        let capabilities = Capabilities::parse()?;
        info!("GLVisitor {:#?}", capabilities);
        capabilities.check()?;

        let visitor = GLVisitor { capabilities };
        Self::reset_render_state()?;
        Ok(visitor)
    }

    unsafe fn reset_render_state() -> Result<()> {
        gl::Disable(gl::CULL_FACE);
        gl::Disable(gl::DEPTH_TEST);
        gl::DepthFunc(gl::LESS);
        gl::Disable(gl::BLEND);
        gl::Disable(gl::SCISSOR_TEST);
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
        gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        check()
    }

    unsafe fn info_log<F1, F2>(id: GLuint, query: F1, read: F2) -> String
    where
        F1: Fn(GLuint, GLenum, *mut GLint),
        F2: Fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
    {
        let mut len = 0;
        query(id, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 1 {
            return String::new();
        }

        let mut buf: Vec<u8> = vec![0; len as usize];
        let mut written = 0;
        read(id, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Visitor for GLVisitor {
    fn info(&self) -> ContextInfo {
        self.capabilities.info.clone()
    }

    unsafe fn create_buffer(&mut self) -> Result<BufferId> {
        let mut id = 0;
        gl::GenBuffers(1, &mut id);
        assert!(id != 0, "failed to allocate buffer object.");
        Ok(BufferId::new(id))
    }

    unsafe fn delete_buffer(&mut self, id: BufferId) -> Result<()> {
        gl::DeleteBuffers(1, &id.raw());
        check()
    }

    unsafe fn bind_buffer(&mut self, target: BufferTarget, id: Option<BufferId>) -> Result<()> {
        gl::BindBuffer(target.into(), id.map(BufferId::raw).unwrap_or(0));
        check()
    }

    unsafe fn buffer_data(
        &mut self,
        target: BufferTarget,
        bytes: &[u8],
        usage: BufferUsage,
    ) -> Result<()> {
        gl::BufferData(
            target.into(),
            bytes.len() as GLsizeiptr,
            bytes.as_ptr() as *const _,
            usage.into(),
        );
        check()
    }

    unsafe fn read_buffer(&mut self, target: BufferTarget, len: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        gl::GetBufferSubData(
            target.into(),
            0,
            len as GLsizeiptr,
            bytes.as_mut_ptr() as *mut _,
        );
        check()?;
        Ok(bytes)
    }

    unsafe fn create_vertex_array(&mut self) -> Result<VertexArrayId> {
        let mut id = 0;
        gl::GenVertexArrays(1, &mut id);
        assert!(id != 0, "failed to allocate vertex array object.");
        Ok(VertexArrayId::new(id))
    }

    unsafe fn delete_vertex_array(&mut self, id: VertexArrayId) -> Result<()> {
        gl::DeleteVertexArrays(1, &id.raw());
        check()
    }

    unsafe fn bind_vertex_array(&mut self, id: Option<VertexArrayId>) -> Result<()> {
        gl::BindVertexArray(id.map(VertexArrayId::raw).unwrap_or(0));
        check()
    }

    unsafe fn enable_vertex_attribute(&mut self, attribute: &VertexAttribute) -> Result<()> {
        gl::EnableVertexAttribArray(attribute.slot);
        gl::VertexAttribPointer(
            attribute.slot,
            GLint::from(attribute.size),
            attribute.kind.into(),
            if attribute.normalized {
                gl::TRUE
            } else {
                gl::FALSE
            },
            attribute.stride as GLsizei,
            attribute.offset as usize as *const _,
        );
        check()
    }

    unsafe fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderId> {
        let id = gl::CreateShader(stage.into());
        assert!(id != 0, "failed to allocate {} shader object.", stage);
        Ok(ShaderId::new(id))
    }

    unsafe fn compile_shader(&mut self, id: ShaderId, source: &str) -> Result<bool> {
        let c_str = CString::new(source.as_bytes())
            .map_err(|_| Error::Backend("[GL] Shader source contains a nul byte.".to_owned()))?;

        gl::ShaderSource(id.raw(), 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(id.raw());

        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(id.raw(), gl::COMPILE_STATUS, &mut status);
        check()?;

        Ok(status == GLint::from(gl::TRUE))
    }

    unsafe fn shader_info_log(&mut self, id: ShaderId) -> Result<String> {
        let log = Self::info_log(
            id.raw(),
            |id, name, v| gl::GetShaderiv(id, name, v),
            |id, len, written, buf| gl::GetShaderInfoLog(id, len, written, buf),
        );

        check()?;
        Ok(log)
    }

    unsafe fn delete_shader(&mut self, id: ShaderId) -> Result<()> {
        gl::DeleteShader(id.raw());
        check()
    }

    unsafe fn create_program(&mut self) -> Result<ProgramId> {
        let id = gl::CreateProgram();
        assert!(id != 0, "failed to allocate program object.");
        Ok(ProgramId::new(id))
    }

    unsafe fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) -> Result<()> {
        gl::AttachShader(program.raw(), shader.raw());
        check()
    }

    unsafe fn detach_shader(&mut self, program: ProgramId, shader: ShaderId) -> Result<()> {
        gl::DetachShader(program.raw(), shader.raw());
        check()
    }

    unsafe fn link_program(&mut self, program: ProgramId) -> Result<bool> {
        gl::LinkProgram(program.raw());

        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program.raw(), gl::LINK_STATUS, &mut status);
        check()?;

        Ok(status == GLint::from(gl::TRUE))
    }

    unsafe fn program_info_log(&mut self, program: ProgramId) -> Result<String> {
        let log = Self::info_log(
            program.raw(),
            |id, name, v| gl::GetProgramiv(id, name, v),
            |id, len, written, buf| gl::GetProgramInfoLog(id, len, written, buf),
        );

        check()?;
        Ok(log)
    }

    unsafe fn delete_program(&mut self, program: ProgramId) -> Result<()> {
        gl::DeleteProgram(program.raw());
        check()
    }

    unsafe fn use_program(&mut self, program: Option<ProgramId>) -> Result<()> {
        gl::UseProgram(program.map(ProgramId::raw).unwrap_or(0));
        check()
    }

    unsafe fn uniform_location(&mut self, program: ProgramId, name: &str) -> Result<Option<i32>> {
        let c_name = CString::new(name.as_bytes())
            .map_err(|_| Error::Backend("[GL] Uniform name contains a nul byte.".to_owned()))?;

        let location = gl::GetUniformLocation(program.raw(), c_name.as_ptr());
        check()?;

        if location == -1 {
            Ok(None)
        } else {
            Ok(Some(location))
        }
    }

    unsafe fn uniform(&mut self, location: i32, value: &UniformValue) -> Result<()> {
        match *value {
            UniformValue::I32(v) => gl::Uniform1i(location, v),
            UniformValue::F32(v) => gl::Uniform1f(location, v),
            UniformValue::Vector4f(v) => gl::Uniform4f(location, v[0], v[1], v[2], v[3]),
            UniformValue::Matrix4f(v) => gl::UniformMatrix4fv(location, 1, gl::FALSE, v[0].as_ptr()),
        }

        check()
    }

    unsafe fn create_texture(&mut self) -> Result<TextureId> {
        let mut id = 0;
        gl::GenTextures(1, &mut id);
        assert!(id != 0, "failed to allocate texture object.");
        Ok(TextureId::new(id))
    }

    unsafe fn delete_texture(&mut self, id: TextureId) -> Result<()> {
        gl::DeleteTextures(1, &id.raw());
        check()
    }

    unsafe fn active_texture(&mut self, unit: u32) -> Result<()> {
        gl::ActiveTexture(gl::TEXTURE0 + unit);
        check()
    }

    unsafe fn bind_texture(&mut self, id: Option<TextureId>) -> Result<()> {
        gl::BindTexture(gl::TEXTURE_2D, id.map(TextureId::raw).unwrap_or(0));
        check()
    }

    unsafe fn tex_image_2d(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4));
        if len != Some(pixels.len()) {
            backend_bail!("[GL] Pixels do not match {}x{} RGBA8.", width, height);
        }

        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGBA as GLint,
            width as GLsizei,
            height as GLsizei,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixels.as_ptr() as *const _,
        );

        check()
    }

    unsafe fn tex_parameters(
        &mut self,
        wrap: TextureWrap,
        min_filter: TextureFilter,
    ) -> Result<()> {
        let wrap = GLenum::from(wrap) as GLint;
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap);
        gl::TexParameteri(
            gl::TEXTURE_2D,
            gl::TEXTURE_MIN_FILTER,
            GLenum::from(min_filter) as GLint,
        );
        check()
    }

    unsafe fn clear_color(&mut self, color: Color) -> Result<()> {
        gl::ClearColor(color.r, color.g, color.b, color.a);
        check()
    }

    unsafe fn clear(&mut self, color: bool, depth: bool) -> Result<()> {
        let mut bits = 0;
        if color {
            bits |= gl::COLOR_BUFFER_BIT;
        }

        if depth {
            bits |= gl::DEPTH_BUFFER_BIT;
        }

        if bits != 0 {
            gl::Clear(bits);
        }

        check()
    }

    unsafe fn viewport(&mut self, vp: Viewport) -> Result<()> {
        gl::Viewport(vp.x, vp.y, vp.width as GLsizei, vp.height as GLsizei);
        check()
    }

    unsafe fn enable(&mut self, capability: Capability) -> Result<()> {
        gl::Enable(capability.into());
        check()
    }

    unsafe fn disable(&mut self, capability: Capability) -> Result<()> {
        gl::Disable(capability.into());
        check()
    }

    unsafe fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) -> Result<()> {
        gl::BlendFunc(src.into(), dst.into());
        check()
    }

    unsafe fn polygon_mode(&mut self, mode: PolygonMode) -> Result<()> {
        gl::PolygonMode(gl::FRONT_AND_BACK, mode.into());
        check()
    }

    unsafe fn draw(&mut self, mode: DrawMode, count: u32) -> Result<()> {
        match mode {
            DrawMode::IndexedTriangles => gl::DrawElements(
                gl::TRIANGLES,
                count as GLsizei,
                gl::UNSIGNED_INT,
                ptr::null(),
            ),
            DrawMode::Triangles => gl::DrawArrays(gl::TRIANGLES, 0, count as GLsizei),
        }

        check()
    }

    unsafe fn flush(&mut self) -> Result<()> {
        gl::Finish();
        check()
    }
}

pub unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),
        gl::INVALID_ENUM => backend_bail!(
            "[GL] An unacceptable value is specified for an enumerated argument."
        ),
        gl::INVALID_VALUE => backend_bail!("[GL] A numeric argument is out of range."),
        gl::INVALID_OPERATION => {
            backend_bail!("[GL] The specified operation is not allowed in the current state.")
        }
        gl::INVALID_FRAMEBUFFER_OPERATION => backend_bail!(
            "[GL] The framebuffer object is not complete."
        ),
        gl::OUT_OF_MEMORY => backend_bail!(
            "[GL] There is not enough memory left to execute the command."
        ),
        _ => backend_bail!("[GL] Oops, Unknown OpenGL error."),
    }
}
