extern crate easel;

use easel::prelude::*;
use easel::video::backends::headless::Trace;
use easel::video::BufferTarget;

#[test]
fn roundtrip() {
    let (mut ctx, probe) = GraphicsContext::headless();

    let vertices = [100.0, 100.0, 0.0, -100.0, -100.0, 0.5, 0.25, -0.125];
    let mut vbo = VertexBuffer::create(&mut ctx, BufferUsage::StaticDraw).unwrap();
    assert_eq!(vbo.byte_size(), 0);
    assert!(vbo.is_empty());

    vbo.data(&mut ctx, &vertices).unwrap();
    assert_eq!(vbo.len(), vertices.len());
    assert_eq!(vbo.byte_size(), vertices.len() * 4);
    assert_eq!(vbo.read(&mut ctx).unwrap(), vertices.to_vec());
    assert_eq!(probe.buffer_usage(vbo.id()), Some(BufferUsage::StaticDraw));
    assert_eq!(probe.array_buffer(), Some(vbo.id()));

    let indices = [0, 1, 3, 1, 2, 3];
    let mut ebo = IndexBuffer::create(&mut ctx, BufferUsage::DynamicDraw).unwrap();
    ebo.data(&mut ctx, &indices).unwrap();
    assert_eq!(ebo.byte_size(), 24);
    assert_eq!(ebo.read(&mut ctx).unwrap(), indices.to_vec());
    assert_eq!(probe.buffer_usage(ebo.id()), Some(BufferUsage::DynamicDraw));

    vbo.destroy(&mut ctx).unwrap();
    ebo.destroy(&mut ctx).unwrap();
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn respecify() {
    let (mut ctx, probe) = GraphicsContext::headless();

    let mut vbo = VertexBuffer::create(&mut ctx, BufferUsage::DynamicDraw).unwrap();
    vbo.data(&mut ctx, &[1.0; 12]).unwrap();
    assert_eq!(probe.buffer_data(vbo.id()).unwrap().len(), 48);

    // The whole storage is replaced, not only the leading part.
    vbo.data(&mut ctx, &[2.0, 3.0]).unwrap();
    assert_eq!(vbo.byte_size(), 8);
    assert_eq!(probe.buffer_data(vbo.id()).unwrap().len(), 8);
    assert_eq!(vbo.read(&mut ctx).unwrap(), vec![2.0, 3.0]);

    vbo.destroy(&mut ctx).unwrap();
}

#[test]
fn bind_and_reset() {
    let (mut ctx, probe) = GraphicsContext::headless();

    let a = VertexBuffer::create(&mut ctx, BufferUsage::StaticDraw).unwrap();
    let b = VertexBuffer::create(&mut ctx, BufferUsage::StaticDraw).unwrap();
    assert_ne!(a.id(), b.id());

    a.bind(&mut ctx).unwrap();
    assert_eq!(probe.array_buffer(), Some(a.id()));
    b.bind(&mut ctx).unwrap();
    assert_eq!(probe.array_buffer(), Some(b.id()));
    b.reset(&mut ctx).unwrap();
    assert_eq!(probe.array_buffer(), None);

    let ids = (a.id(), b.id());
    a.destroy(&mut ctx).unwrap();
    b.destroy(&mut ctx).unwrap();

    let trace = probe.trace();
    assert_eq!(
        trace,
        vec![
            Trace::CreateBuffer(ids.0),
            Trace::CreateBuffer(ids.1),
            Trace::DeleteBuffer(ids.0),
            Trace::DeleteBuffer(ids.1),
        ]
    );
}

#[test]
fn element_target() {
    assert_eq!(
        <u32 as easel::video::BufferElement>::TARGET,
        BufferTarget::ElementArray
    );
    assert_eq!(
        <f32 as easel::video::BufferElement>::TARGET,
        BufferTarget::Array
    );
}
