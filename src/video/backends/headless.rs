//! A software emulation of the GL object model.
//!
//! Nothing is rasterized, but objects, bind points and per-vertex-array attribute
//! state behave like they do on a real driver, and every draw is recorded together
//! with the buffers it would actually sample. A `HeadlessProbe` shares the state so
//! it could be inspected after the visitor has been moved into a context.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use crate::errors::*;
use crate::math::Color;

use super::super::types::*;
use super::Visitor;

/// Every object creation and deletion, clear and draw, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    CreateBuffer(BufferId),
    DeleteBuffer(BufferId),
    CreateVertexArray(VertexArrayId),
    DeleteVertexArray(VertexArrayId),
    CreateShader(ShaderId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    DeleteProgram(ProgramId),
    CreateTexture(TextureId),
    DeleteTexture(TextureId),
    Clear { color: bool, depth: bool },
    Draw(ProgramId),
}

/// A draw call and the state it was submitted with.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub mode: DrawMode,
    pub count: u32,
    pub program: ProgramId,
    pub vertex_array: VertexArrayId,
    /// The enabled attribute slots and the buffers they read from.
    pub attributes: Vec<(u32, BufferId)>,
    pub element_buffer: Option<BufferId>,
    pub texture: Option<TextureId>,
    pub uniforms: HashMap<String, UniformValue>,
    pub blend: bool,
    pub depth_test: bool,
    pub polygon_mode: PolygonMode,
}

/// Storage and sampling state of a texture.
#[derive(Debug, Clone, Default)]
pub struct TextureState {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub wrap: Option<TextureWrap>,
    pub min_filter: Option<TextureFilter>,
}

#[derive(Debug, Default)]
struct BufferState {
    data: Vec<u8>,
    usage: Option<BufferUsage>,
}

#[derive(Debug, Default)]
struct VertexArrayState {
    attributes: BTreeMap<u32, (VertexAttribute, BufferId)>,
    element_buffer: Option<BufferId>,
}

#[derive(Debug)]
struct ShaderState {
    stage: ShaderStage,
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Debug, Default)]
struct ProgramState {
    attached: Vec<ShaderId>,
    linked: bool,
    log: String,
    uniforms: Vec<String>,
    values: HashMap<String, UniformValue>,
}

struct HeadlessState {
    next_id: u32,

    buffers: HashMap<BufferId, BufferState>,
    vertex_arrays: HashMap<VertexArrayId, VertexArrayState>,
    shaders: HashMap<ShaderId, ShaderState>,
    programs: HashMap<ProgramId, ProgramState>,
    textures: HashMap<TextureId, TextureState>,

    array_buffer: Option<BufferId>,
    // Element array binding while no vertex array object is bound.
    element_buffer: Option<BufferId>,
    vertex_array: Option<VertexArrayId>,
    program: Option<ProgramId>,
    active_texture: u32,
    texture_units: HashMap<u32, TextureId>,

    capabilities: HashSet<Capability>,
    blend_func: (BlendFactor, BlendFactor),
    polygon_mode: PolygonMode,
    viewport: Viewport,
    clear_color: Color,

    draws: Vec<DrawCall>,
    trace: Vec<Trace>,
}

impl HeadlessState {
    fn new() -> Self {
        HeadlessState {
            next_id: 1,
            buffers: HashMap::new(),
            vertex_arrays: HashMap::new(),
            shaders: HashMap::new(),
            programs: HashMap::new(),
            textures: HashMap::new(),
            array_buffer: None,
            element_buffer: None,
            vertex_array: None,
            program: None,
            active_texture: 0,
            texture_units: HashMap::new(),
            capabilities: HashSet::new(),
            blend_func: (BlendFactor::One, BlendFactor::Zero),
            polygon_mode: PolygonMode::Fill,
            viewport: Viewport::default(),
            clear_color: Color::black(),
            draws: Vec::new(),
            trace: Vec::new(),
        }
    }

    fn next(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn bound_vertex_array(&mut self) -> Result<&mut VertexArrayState> {
        let id = match self.vertex_array {
            Some(id) => id,
            None => backend_bail!("[Headless] No vertex array object is bound."),
        };

        self.vertex_arrays
            .get_mut(&id)
            .ok_or_else(|| Error::Backend(format!("{} is invalid.", id)))
    }

    fn bound_buffer(&self, target: BufferTarget) -> Option<BufferId> {
        match target {
            BufferTarget::Array => self.array_buffer,
            BufferTarget::ElementArray => match self.vertex_array {
                Some(id) => self.vertex_arrays.get(&id).and_then(|vao| vao.element_buffer),
                None => self.element_buffer,
            },
        }
    }

    fn bound_buffer_mut(&mut self, target: BufferTarget) -> Result<&mut BufferState> {
        let id = match self.bound_buffer(target) {
            Some(id) => id,
            None => backend_bail!("[Headless] No buffer is bound to {:?}.", target),
        };

        self.buffers
            .get_mut(&id)
            .ok_or_else(|| Error::Backend(format!("{} is invalid.", id)))
    }

    fn bound_texture(&self) -> Option<TextureId> {
        self.texture_units.get(&self.active_texture).cloned()
    }

    fn program_mut(&mut self, id: ProgramId) -> Result<&mut ProgramState> {
        self.programs
            .get_mut(&id)
            .ok_or_else(|| Error::Backend(format!("{} is invalid.", id)))
    }

    fn shader_mut(&mut self, id: ShaderId) -> Result<&mut ShaderState> {
        self.shaders
            .get_mut(&id)
            .ok_or_else(|| Error::Backend(format!("{} is invalid.", id)))
    }

    fn link(&self, program: &ProgramState) -> ::std::result::Result<Vec<String>, String> {
        let mut vs = None;
        let mut fs = None;

        for id in &program.attached {
            let shader = &self.shaders[id];
            if !shader.compiled {
                return Err(format!(
                    "error: linking with uncompiled {} shader",
                    shader.stage
                ));
            }

            let slot = match shader.stage {
                ShaderStage::Vertex => &mut vs,
                ShaderStage::Fragment => &mut fs,
            };

            if slot.is_some() {
                return Err(format!("error: multiple {} shaders attached", shader.stage));
            }

            *slot = Some(shader);
        }

        match (vs, fs) {
            (Some(vs), Some(fs)) => {
                let mut uniforms = uniform_declarations(&vs.source);
                for name in uniform_declarations(&fs.source) {
                    if !uniforms.contains(&name) {
                        uniforms.push(name);
                    }
                }

                Ok(uniforms)
            }
            (None, _) => Err("error: program lacks a vertex shader".to_owned()),
            (_, None) => Err("error: program lacks a fragment shader".to_owned()),
        }
    }

    fn validate_draw(&self, mode: DrawMode, count: u32) -> Result<DrawCall> {
        let program = match self.program {
            Some(id) => id,
            None => backend_bail!("[Headless] Draw call without program in use."),
        };

        let vertex_array = match self.vertex_array {
            Some(id) => id,
            None => backend_bail!("[Headless] Draw call without vertex array object bound."),
        };

        let vao = &self.vertex_arrays[&vertex_array];

        let mut attributes = Vec::new();
        for (slot, &(ref attribute, buffer)) in &vao.attributes {
            let len = match self.buffers.get(&buffer) {
                Some(v) => v.data.len(),
                None => backend_bail!("[Headless] Attribute {} reads from deleted {}.", slot, buffer),
            };

            if mode == DrawMode::Triangles && count > 0 {
                let size = u32::from(attribute.size) * attribute.kind.size();
                let end = attribute.offset + (count - 1) * attribute.stride + size;
                if end as usize > len {
                    backend_bail!(
                        "[Headless] Attribute {} reads out of bounds of {}.",
                        slot,
                        buffer
                    );
                }
            }

            attributes.push((*slot, buffer));
        }

        if mode == DrawMode::IndexedTriangles {
            let len = match vao.element_buffer.and_then(|id| self.buffers.get(&id)) {
                Some(v) => v.data.len(),
                None => backend_bail!("[Headless] Indexed draw call without element buffer."),
            };

            if count as usize * 4 > len {
                backend_bail!("[Headless] Index count {} is out of bounds.", count);
            }
        }

        let program_state = &self.programs[&program];
        if !program_state.linked {
            backend_bail!("[Headless] Draw call with unlinked {}.", program);
        }

        Ok(DrawCall {
            mode,
            count,
            program,
            vertex_array,
            attributes,
            element_buffer: vao.element_buffer,
            texture: self.bound_texture(),
            uniforms: program_state.values.clone(),
            blend: self.capabilities.contains(&Capability::Blend),
            depth_test: self.capabilities.contains(&Capability::DepthTest),
            polygon_mode: self.polygon_mode,
        })
    }
}

/// Checks what a GLSL front-end would reject before anything else: a missing entry point
/// and unbalanced brackets.
fn compile(source: &str) -> ::std::result::Result<(), String> {
    if source.trim().is_empty() {
        return Err("0:1(1): error: shader source is empty".to_owned());
    }

    let mut braces = 0i32;
    let mut parens = 0i32;
    for (index, line) in source.lines().enumerate() {
        for c in line.chars() {
            match c {
                '{' => braces += 1,
                '}' => braces -= 1,
                '(' => parens += 1,
                ')' => parens -= 1,
                _ => {}
            }

            if braces < 0 || parens < 0 {
                return Err(format!(
                    "0:{}(1): error: syntax error, unexpected '{}'",
                    index + 1,
                    c
                ));
            }
        }
    }

    if braces != 0 || parens != 0 {
        let lines = source.lines().count();
        return Err(format!(
            "0:{}(1): error: syntax error, unexpected end of file",
            lines
        ));
    }

    if !source.contains("main") {
        return Err("0:1(1): error: function `main' is undefined".to_owned());
    }

    Ok(())
}

fn uniform_declarations(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in source.lines() {
        let line = line.split("//").next().unwrap_or("");
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if let Some(pos) = tokens.iter().position(|v| *v == "uniform") {
            if let Some(name) = tokens.get(pos + 2) {
                let name = name.trim_end_matches(';');
                let name = name.split('[').next().unwrap_or(name);
                if !name.is_empty() {
                    names.push(name.to_owned());
                }
            }
        }
    }

    names
}

pub struct HeadlessVisitor {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            state: Rc::new(RefCell::new(HeadlessState::new())),
        }
    }

    /// Returns a handle that observes the state of this visitor.
    pub fn probe(&self) -> HeadlessProbe {
        HeadlessProbe {
            state: self.state.clone(),
        }
    }
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        HeadlessVisitor::new()
    }
}

impl Visitor for HeadlessVisitor {
    fn info(&self) -> ContextInfo {
        ContextInfo {
            version: "3.3 (Headless)".to_owned(),
            vendor: "easel".to_owned(),
            renderer: "headless".to_owned(),
            shading_language: "3.30".to_owned(),
        }
    }

    unsafe fn create_buffer(&mut self) -> Result<BufferId> {
        let mut state = self.state.borrow_mut();
        let id = BufferId::new(state.next());
        state.buffers.insert(id, BufferState::default());
        state.trace.push(Trace::CreateBuffer(id));
        Ok(id)
    }

    unsafe fn delete_buffer(&mut self, id: BufferId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.buffers.remove(&id).is_none() {
            backend_bail!("{} is invalid.", id);
        }

        if state.array_buffer == Some(id) {
            state.array_buffer = None;
        }

        if state.element_buffer == Some(id) {
            state.element_buffer = None;
        }

        if state.vertex_array.is_some() {
            let vao = state.bound_vertex_array()?;
            if vao.element_buffer == Some(id) {
                vao.element_buffer = None;
            }
        }

        state.trace.push(Trace::DeleteBuffer(id));
        Ok(())
    }

    unsafe fn bind_buffer(&mut self, target: BufferTarget, id: Option<BufferId>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(id) = id {
            if !state.buffers.contains_key(&id) {
                backend_bail!("{} is invalid.", id);
            }
        }

        match target {
            BufferTarget::Array => state.array_buffer = id,
            // The element array binding is a part of the vertex array object.
            BufferTarget::ElementArray => {
                if state.vertex_array.is_some() {
                    state.bound_vertex_array()?.element_buffer = id;
                } else {
                    state.element_buffer = id;
                }
            }
        }

        Ok(())
    }

    unsafe fn buffer_data(
        &mut self,
        target: BufferTarget,
        bytes: &[u8],
        usage: BufferUsage,
    ) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let buffer = state.bound_buffer_mut(target)?;
        buffer.data = bytes.to_vec();
        buffer.usage = Some(usage);
        Ok(())
    }

    unsafe fn read_buffer(&mut self, target: BufferTarget, len: usize) -> Result<Vec<u8>> {
        let mut state = self.state.borrow_mut();
        let buffer = state.bound_buffer_mut(target)?;
        if len > buffer.data.len() {
            backend_bail!("[Headless] Trying to read buffer data out of bounds.");
        }

        Ok(buffer.data[..len].to_vec())
    }

    unsafe fn create_vertex_array(&mut self) -> Result<VertexArrayId> {
        let mut state = self.state.borrow_mut();
        let id = VertexArrayId::new(state.next());
        state.vertex_arrays.insert(id, VertexArrayState::default());
        state.trace.push(Trace::CreateVertexArray(id));
        Ok(id)
    }

    unsafe fn delete_vertex_array(&mut self, id: VertexArrayId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.vertex_arrays.remove(&id).is_none() {
            backend_bail!("{} is invalid.", id);
        }

        if state.vertex_array == Some(id) {
            state.vertex_array = None;
        }

        state.trace.push(Trace::DeleteVertexArray(id));
        Ok(())
    }

    unsafe fn bind_vertex_array(&mut self, id: Option<VertexArrayId>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(id) = id {
            if !state.vertex_arrays.contains_key(&id) {
                backend_bail!("{} is invalid.", id);
            }
        }

        state.vertex_array = id;
        Ok(())
    }

    unsafe fn enable_vertex_attribute(&mut self, attribute: &VertexAttribute) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let buffer = match state.array_buffer {
            Some(id) => id,
            None => backend_bail!(
                "[Headless] Attribute {} enabled without array buffer bound.",
                attribute.slot
            ),
        };

        if attribute.size == 0 || attribute.size > 4 {
            backend_bail!("[Headless] Attribute {} has invalid size.", attribute.slot);
        }

        let vao = state.bound_vertex_array()?;
        vao.attributes.insert(attribute.slot, (*attribute, buffer));
        Ok(())
    }

    unsafe fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderId> {
        let mut state = self.state.borrow_mut();
        let id = ShaderId::new(state.next());
        state.shaders.insert(
            id,
            ShaderState {
                stage,
                source: String::new(),
                compiled: false,
                log: String::new(),
            },
        );

        state.trace.push(Trace::CreateShader(id));
        Ok(id)
    }

    unsafe fn compile_shader(&mut self, id: ShaderId, source: &str) -> Result<bool> {
        let mut state = self.state.borrow_mut();
        let shader = state.shader_mut(id)?;
        shader.source = source.to_owned();

        match compile(source) {
            Ok(_) => {
                shader.compiled = true;
                shader.log.clear();
            }
            Err(log) => {
                shader.compiled = false;
                shader.log = log;
            }
        }

        Ok(shader.compiled)
    }

    unsafe fn shader_info_log(&mut self, id: ShaderId) -> Result<String> {
        let mut state = self.state.borrow_mut();
        Ok(state.shader_mut(id)?.log.clone())
    }

    unsafe fn delete_shader(&mut self, id: ShaderId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.shaders.remove(&id).is_none() {
            backend_bail!("{} is invalid.", id);
        }

        for program in state.programs.values_mut() {
            program.attached.retain(|v| *v != id);
        }

        state.trace.push(Trace::DeleteShader(id));
        Ok(())
    }

    unsafe fn create_program(&mut self) -> Result<ProgramId> {
        let mut state = self.state.borrow_mut();
        let id = ProgramId::new(state.next());
        state.programs.insert(id, ProgramState::default());
        state.trace.push(Trace::CreateProgram(id));
        Ok(id)
    }

    unsafe fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.shaders.contains_key(&shader) {
            backend_bail!("{} is invalid.", shader);
        }

        let program = state.program_mut(program)?;
        if program.attached.contains(&shader) {
            backend_bail!("[Headless] {} is already attached.", shader);
        }

        program.attached.push(shader);
        Ok(())
    }

    unsafe fn detach_shader(&mut self, program: ProgramId, shader: ShaderId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let program = state.program_mut(program)?;
        let len = program.attached.len();
        program.attached.retain(|v| *v != shader);
        if program.attached.len() == len {
            backend_bail!("[Headless] {} is not attached.", shader);
        }

        Ok(())
    }

    unsafe fn link_program(&mut self, program: ProgramId) -> Result<bool> {
        let mut state = self.state.borrow_mut();
        let result = {
            let p = state
                .programs
                .get(&program)
                .ok_or_else(|| Error::Backend(format!("{} is invalid.", program)))?;
            state.link(p)
        };

        let p = state.program_mut(program)?;
        match result {
            Ok(uniforms) => {
                p.linked = true;
                p.log.clear();
                p.uniforms = uniforms;
            }
            Err(log) => {
                p.linked = false;
                p.log = log;
                p.uniforms.clear();
            }
        }

        p.values.clear();
        Ok(p.linked)
    }

    unsafe fn program_info_log(&mut self, program: ProgramId) -> Result<String> {
        let mut state = self.state.borrow_mut();
        Ok(state.program_mut(program)?.log.clone())
    }

    unsafe fn delete_program(&mut self, program: ProgramId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.programs.remove(&program).is_none() {
            backend_bail!("{} is invalid.", program);
        }

        if state.program == Some(program) {
            state.program = None;
        }

        state.trace.push(Trace::DeleteProgram(program));
        Ok(())
    }

    unsafe fn use_program(&mut self, program: Option<ProgramId>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(id) = program {
            if !state.program_mut(id)?.linked {
                backend_bail!("[Headless] {} is not linked.", id);
            }
        }

        state.program = program;
        Ok(())
    }

    unsafe fn uniform_location(&mut self, program: ProgramId, name: &str) -> Result<Option<i32>> {
        let mut state = self.state.borrow_mut();
        let program = state.program_mut(program)?;
        Ok(program
            .uniforms
            .iter()
            .position(|v| v == name)
            .map(|v| v as i32))
    }

    unsafe fn uniform(&mut self, location: i32, value: &UniformValue) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let id = match state.program {
            Some(id) => id,
            None => backend_bail!("[Headless] Uniform upload without program in use."),
        };

        let program = state.program_mut(id)?;
        let name = match program.uniforms.get(location as usize) {
            Some(name) if location >= 0 => name.clone(),
            _ => backend_bail!("[Headless] Uniform location {} is invalid.", location),
        };

        program.values.insert(name, *value);
        Ok(())
    }

    unsafe fn create_texture(&mut self) -> Result<TextureId> {
        let mut state = self.state.borrow_mut();
        let id = TextureId::new(state.next());
        state.textures.insert(id, TextureState::default());
        state.trace.push(Trace::CreateTexture(id));
        Ok(id)
    }

    unsafe fn delete_texture(&mut self, id: TextureId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.textures.remove(&id).is_none() {
            backend_bail!("{} is invalid.", id);
        }

        state.texture_units.retain(|_, v| *v != id);
        state.trace.push(Trace::DeleteTexture(id));
        Ok(())
    }

    unsafe fn active_texture(&mut self, unit: u32) -> Result<()> {
        self.state.borrow_mut().active_texture = unit;
        Ok(())
    }

    unsafe fn bind_texture(&mut self, id: Option<TextureId>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let unit = state.active_texture;
        match id {
            Some(id) => {
                if !state.textures.contains_key(&id) {
                    backend_bail!("{} is invalid.", id);
                }

                state.texture_units.insert(unit, id);
            }
            None => {
                state.texture_units.remove(&unit);
            }
        }

        Ok(())
    }

    unsafe fn tex_image_2d(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4));
        if len != Some(pixels.len()) {
            backend_bail!("[Headless] Pixels do not match {}x{} RGBA8.", width, height);
        }

        let id = match state.bound_texture() {
            Some(id) => id,
            None => backend_bail!("[Headless] No texture is bound."),
        };

        let texture = state
            .textures
            .get_mut(&id)
            .ok_or_else(|| Error::Backend(format!("{} is invalid.", id)))?;
        texture.width = width;
        texture.height = height;
        texture.pixels = pixels.to_vec();
        Ok(())
    }

    unsafe fn tex_parameters(
        &mut self,
        wrap: TextureWrap,
        min_filter: TextureFilter,
    ) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let id = match state.bound_texture() {
            Some(id) => id,
            None => backend_bail!("[Headless] No texture is bound."),
        };

        let texture = state
            .textures
            .get_mut(&id)
            .ok_or_else(|| Error::Backend(format!("{} is invalid.", id)))?;
        texture.wrap = Some(wrap);
        texture.min_filter = Some(min_filter);
        Ok(())
    }

    unsafe fn clear_color(&mut self, color: Color) -> Result<()> {
        self.state.borrow_mut().clear_color = color;
        Ok(())
    }

    unsafe fn clear(&mut self, color: bool, depth: bool) -> Result<()> {
        self.state.borrow_mut().trace.push(Trace::Clear { color, depth });
        Ok(())
    }

    unsafe fn viewport(&mut self, vp: Viewport) -> Result<()> {
        self.state.borrow_mut().viewport = vp;
        Ok(())
    }

    unsafe fn enable(&mut self, capability: Capability) -> Result<()> {
        self.state.borrow_mut().capabilities.insert(capability);
        Ok(())
    }

    unsafe fn disable(&mut self, capability: Capability) -> Result<()> {
        self.state.borrow_mut().capabilities.remove(&capability);
        Ok(())
    }

    unsafe fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) -> Result<()> {
        self.state.borrow_mut().blend_func = (src, dst);
        Ok(())
    }

    unsafe fn polygon_mode(&mut self, mode: PolygonMode) -> Result<()> {
        self.state.borrow_mut().polygon_mode = mode;
        Ok(())
    }

    unsafe fn draw(&mut self, mode: DrawMode, count: u32) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let call = state.validate_draw(mode, count)?;
        state.trace.push(Trace::Draw(call.program));
        state.draws.push(call);
        Ok(())
    }

    unsafe fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Read-only access to the state of a `HeadlessVisitor`.
#[derive(Clone)]
pub struct HeadlessProbe {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessProbe {
    /// Every draw call submitted so far.
    pub fn draws(&self) -> Vec<DrawCall> {
        self.state.borrow().draws.clone()
    }

    pub fn trace(&self) -> Vec<Trace> {
        self.state.borrow().trace.clone()
    }

    /// Number of objects that have been created but not deleted yet.
    pub fn live_objects(&self) -> usize {
        let state = self.state.borrow();
        state.buffers.len()
            + state.vertex_arrays.len()
            + state.shaders.len()
            + state.programs.len()
            + state.textures.len()
    }

    pub fn buffer_data(&self, id: BufferId) -> Option<Vec<u8>> {
        self.state.borrow().buffers.get(&id).map(|v| v.data.clone())
    }

    pub fn buffer_usage(&self, id: BufferId) -> Option<BufferUsage> {
        self.state.borrow().buffers.get(&id).and_then(|v| v.usage)
    }

    pub fn array_buffer(&self) -> Option<BufferId> {
        self.state.borrow().array_buffer
    }

    pub fn vertex_array(&self) -> Option<VertexArrayId> {
        self.state.borrow().vertex_array
    }

    /// The element buffer captured by a vertex array object.
    pub fn element_buffer(&self, id: VertexArrayId) -> Option<BufferId> {
        self.state
            .borrow()
            .vertex_arrays
            .get(&id)
            .and_then(|v| v.element_buffer)
    }

    /// The enabled attributes of a vertex array object and the buffers they are latched to.
    pub fn attributes(&self, id: VertexArrayId) -> Vec<(VertexAttribute, BufferId)> {
        self.state
            .borrow()
            .vertex_arrays
            .get(&id)
            .map(|v| v.attributes.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn program(&self) -> Option<ProgramId> {
        self.state.borrow().program
    }

    pub fn is_program_alive(&self, id: ProgramId) -> bool {
        self.state.borrow().programs.contains_key(&id)
    }

    pub fn is_linked(&self, id: ProgramId) -> bool {
        self.state
            .borrow()
            .programs
            .get(&id)
            .map(|v| v.linked)
            .unwrap_or(false)
    }

    /// Shaders still attached to a program.
    pub fn attached_shaders(&self, id: ProgramId) -> Vec<ShaderId> {
        self.state
            .borrow()
            .programs
            .get(&id)
            .map(|v| v.attached.clone())
            .unwrap_or_default()
    }

    pub fn uniform(&self, id: ProgramId, name: &str) -> Option<UniformValue> {
        self.state
            .borrow()
            .programs
            .get(&id)
            .and_then(|v| v.values.get(name).cloned())
    }

    pub fn texture(&self, id: TextureId) -> Option<TextureState> {
        self.state.borrow().textures.get(&id).cloned()
    }

    /// The texture bound to the 2D target of `unit`.
    pub fn texture_unit(&self, unit: u32) -> Option<TextureId> {
        self.state.borrow().texture_units.get(&unit).cloned()
    }

    pub fn active_texture(&self) -> u32 {
        self.state.borrow().active_texture
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.state.borrow().capabilities.contains(&capability)
    }

    pub fn blend_func(&self) -> (BlendFactor, BlendFactor) {
        self.state.borrow().blend_func
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.state.borrow().polygon_mode
    }

    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    pub fn clear_color(&self) -> Color {
        self.state.borrow().clear_color
    }
}
