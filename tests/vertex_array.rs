extern crate easel;

use easel::prelude::*;
use easel::video::DrawMode;

const VS: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
uniform mat4 view;
void main() { gl_Position = view * vec4(aPos, 1.0); }";

const FS: &str = "#version 330 core
out vec4 FragColor;
void main() { FragColor = vec4(1.0); }";

fn renderer() -> (Renderer, easel::video::backends::headless::HeadlessProbe) {
    let (ctx, probe) = GraphicsContext::headless();
    (Renderer::new(ctx, (800, 600)).unwrap(), probe)
}

fn program(ctx: &mut GraphicsContext) -> ShaderProgram {
    let vs = ShaderUnit::compile(ctx, ShaderStage::Vertex, VS).unwrap();
    let fs = ShaderUnit::compile(ctx, ShaderStage::Fragment, FS).unwrap();
    ShaderProgram::link(ctx, vs, fs).unwrap()
}

#[test]
fn attributes_latch_the_buffer_bound_when_enabled() {
    let (mut renderer, probe) = renderer();
    let program = program(renderer.ctx_mut());

    let mut vao = VertexArray::create(renderer.ctx_mut()).unwrap();
    renderer.bind_object(&vao).unwrap();

    let mut a = VertexBuffer::create(renderer.ctx_mut(), BufferUsage::StaticDraw).unwrap();
    a.data(renderer.ctx_mut(), &[0.0; 9]).unwrap();

    let attributes = [VertexAttribute::float(0, 3, 12, 0)];
    vao.enable_attributes(renderer.ctx_mut(), &attributes).unwrap();
    assert_eq!(vao.attributes(), &attributes[..]);

    let mut b = VertexBuffer::create(renderer.ctx_mut(), BufferUsage::StaticDraw).unwrap();
    b.data(renderer.ctx_mut(), &[1.0; 9]).unwrap();
    assert_eq!(probe.array_buffer(), Some(b.id()));

    renderer.bind_object(&program).unwrap();
    renderer.draw_triangles(3).unwrap();

    let draws = probe.draws();
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].mode, DrawMode::Triangles);
    assert_eq!(draws[0].vertex_array, vao.id());
    assert_eq!(draws[0].attributes, vec![(0, a.id())]);

    let ctx = renderer.ctx_mut();
    program.destroy(ctx).unwrap();
    a.destroy(ctx).unwrap();
    b.destroy(ctx).unwrap();
    vao.destroy(ctx).unwrap();
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn reset_vertex_array_first() {
    let (mut renderer, probe) = renderer();

    let build = |renderer: &mut Renderer| {
        let vao = VertexArray::create(renderer.ctx_mut()).unwrap();
        renderer.bind_object(&vao).unwrap();

        let mut ebo = IndexBuffer::create(renderer.ctx_mut(), BufferUsage::StaticDraw).unwrap();
        ebo.data(renderer.ctx_mut(), &[0, 1, 2]).unwrap();
        (vao, ebo)
    };

    // The vertex array records the element buffer binding.
    let (vao, ebo) = build(&mut renderer);
    assert_eq!(probe.element_buffer(vao.id()), Some(ebo.id()));

    renderer.reset_objects(&[&vao, &ebo]).unwrap();
    assert_eq!(probe.vertex_array(), None);
    assert_eq!(probe.element_buffer(vao.id()), Some(ebo.id()));

    // Otherwise it captures the unbind of its own element buffer.
    let (other_vao, other_ebo) = build(&mut renderer);
    renderer.reset_objects(&[&other_ebo, &other_vao]).unwrap();
    assert_eq!(probe.element_buffer(other_vao.id()), None);

    let ctx = renderer.ctx_mut();
    vao.destroy(ctx).unwrap();
    ebo.destroy(ctx).unwrap();
    other_vao.destroy(ctx).unwrap();
    other_ebo.destroy(ctx).unwrap();
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn indexed_draw_reads_the_recorded_element_buffer() {
    let (mut renderer, probe) = renderer();
    let program = program(renderer.ctx_mut());

    let mut vao = VertexArray::create(renderer.ctx_mut()).unwrap();
    renderer.bind_object(&vao).unwrap();

    let mut vbo = VertexBuffer::create(renderer.ctx_mut(), BufferUsage::StaticDraw).unwrap();
    vbo.data(renderer.ctx_mut(), &[0.0; 12]).unwrap();

    let mut ebo = IndexBuffer::create(renderer.ctx_mut(), BufferUsage::StaticDraw).unwrap();
    ebo.data(renderer.ctx_mut(), &[0, 1, 3, 1, 2, 3]).unwrap();

    vao.enable_attributes(renderer.ctx_mut(), &[VertexAttribute::float(0, 3, 12, 0)])
        .unwrap();
    renderer.reset_objects(&[&vao, &vbo, &ebo]).unwrap();

    renderer.bind_object(&vao).unwrap();
    renderer.bind_object(&program).unwrap();
    renderer.draw_indexed_triangles(6).unwrap();

    let draws = probe.draws();
    assert_eq!(draws[0].mode, DrawMode::IndexedTriangles);
    assert_eq!(draws[0].element_buffer, Some(ebo.id()));
    assert_eq!(draws[0].attributes, vec![(0, vbo.id())]);

    // More indices than the element buffer holds.
    assert!(renderer.draw_indexed_triangles(7).is_err());

    let ctx = renderer.ctx_mut();
    program.destroy(ctx).unwrap();
    ebo.destroy(ctx).unwrap();
    vbo.destroy(ctx).unwrap();
    vao.destroy(ctx).unwrap();
}

#[test]
fn enable_requires_bound_objects() {
    let (mut ctx, _) = GraphicsContext::headless();
    let mut vao = VertexArray::create(&mut ctx).unwrap();
    let attributes = [VertexAttribute::float(0, 3, 12, 0)];

    // No array buffer is bound.
    vao.bind(&mut ctx).unwrap();
    assert!(vao.enable_attributes(&mut ctx, &attributes).is_err());

    // No vertex array is bound.
    let mut vbo = VertexBuffer::create(&mut ctx, BufferUsage::StaticDraw).unwrap();
    vbo.data(&mut ctx, &[0.0; 3]).unwrap();
    vao.reset(&mut ctx).unwrap();
    assert!(vao.enable_attributes(&mut ctx, &attributes).is_err());

    vbo.destroy(&mut ctx).unwrap();
    vao.destroy(&mut ctx).unwrap();
}
