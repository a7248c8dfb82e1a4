#[macro_use]
extern crate approx;
extern crate easel;
extern crate tempfile;

use std::fs;
use std::path::Path;
use std::time::Duration;

use easel::prelude::*;
use easel::video::backends::headless::{DrawCall, HeadlessProbe};
use easel::video::{DrawMode, UniformValue};

fn setup() -> (Renderer, HeadlessProbe, AssetLoader) {
    let (ctx, probe) = GraphicsContext::headless();
    let renderer = Renderer::new(ctx, (800, 600)).unwrap();
    let assets = AssetLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    (renderer, probe, assets)
}

/// An asset tree with only the named shaders of the bundled ones.
fn partial_assets(dir: &Path, shaders: &[&str]) -> AssetLoader {
    let bundled = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/shaders"));
    fs::create_dir_all(dir.join("shaders")).unwrap();
    for name in shaders {
        let file = format!("{}.glsl", name);
        fs::copy(bundled.join(&file), dir.join("shaders").join(&file)).unwrap();
    }

    AssetLoader::new(dir)
}

fn frame<T: TestBed>(testbed: &mut T, renderer: &mut Renderer, probe: &HeadlessProbe) -> DrawCall {
    let dt = Duration::from_millis(100);
    testbed.update(dt).unwrap();
    renderer.begin_frame().unwrap();
    testbed.render(renderer, dt).unwrap();
    let info = renderer.end_frame().unwrap();
    assert_eq!(info.drawcalls, 1);

    probe.draws().pop().unwrap()
}

fn matrix(v: Matrix4<f32>) -> UniformValue {
    UniformValue::Matrix4f(v.into())
}

#[test]
fn colored_quad() {
    let (mut renderer, probe, assets) = setup();

    let mut quad = ColoredQuad::new();
    assert_eq!(quad.name(), "Colored Quad");
    assert!(!quad.is_loaded());

    quad.load(&mut renderer, &assets).unwrap();
    assert!(quad.is_loaded());
    assert_eq!(probe.vertex_array(), None);
    assert_eq!(probe.array_buffer(), None);

    let call = frame(&mut quad, &mut renderer, &probe);
    assert_eq!(call.mode, DrawMode::IndexedTriangles);
    assert_eq!(call.count, 6);
    assert_eq!(call.attributes.len(), 2);
    assert!(call.element_buffer.is_some());
    assert!(!call.depth_test);

    let view = renderer.ortho() * quad.transform().model_matrix();
    assert_eq!(call.uniforms.get("view"), Some(&matrix(view)));

    // The quad is drawn 100 pixels right of the center.
    let center = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert_relative_eq!(center.x, 100.0 / 400.0, epsilon = 1e-6);

    quad.unload(&mut renderer).unwrap();
    assert!(!quad.is_loaded());
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn textured_quad() {
    let (mut renderer, probe, assets) = setup();

    let mut quad = TexturedQuad::new();
    quad.load(&mut renderer, &assets).unwrap();
    assert_eq!(probe.texture_unit(0), None);

    let call = frame(&mut quad, &mut renderer, &probe);
    assert_eq!(call.mode, DrawMode::IndexedTriangles);
    assert_eq!(call.count, 6);
    assert!(call.texture.is_some());
    assert_eq!(call.uniforms.get("uTexture"), Some(&UniformValue::I32(0)));

    let view = renderer.ortho() * quad.transform().model_matrix();
    assert_eq!(call.uniforms.get("view"), Some(&matrix(view)));

    let texture = probe.texture(call.texture.unwrap()).unwrap();
    assert_eq!((texture.width, texture.height), (64, 64));

    quad.unload(&mut renderer).unwrap();
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn textured_cube() {
    let (mut renderer, probe, assets) = setup();

    let mut cube = TexturedCube::new();
    cube.load(&mut renderer, &assets).unwrap();

    let call = frame(&mut cube, &mut renderer, &probe);
    assert_eq!(call.mode, DrawMode::Triangles);
    assert_eq!(call.count, 36);
    assert!(call.depth_test);
    assert!(call.texture.is_some());
    assert!(!renderer.is_depth_enabled());

    assert_eq!(call.uniforms.get("uTexture0"), Some(&UniformValue::I32(0)));
    assert_eq!(
        call.uniforms.get("uView"),
        Some(&matrix(TexturedCube::view()))
    );
    assert_eq!(
        call.uniforms.get("uModel"),
        Some(&matrix(cube.transform().model_matrix()))
    );

    let projection = easel::math::projection::perspective(45.0, 800.0 / 600.0, 0.1, 100.0);
    assert_eq!(call.uniforms.get("uProjection"), Some(&matrix(projection)));

    // Half a degree after 100 milliseconds.
    let rotation = Quaternion::from_axis_angle(Vector3::unit_y(), Deg(0.5));
    assert_relative_eq!(cube.transform().rotation, rotation, epsilon = 1e-5);

    cube.unload(&mut renderer).unwrap();
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn missing_texture() {
    let (mut renderer, probe, assets) = setup();

    let mut quad = TexturedQuad::with_image("missing.png");
    match quad.load(&mut renderer, &assets) {
        Err(Error::AssetNotFound(_)) => {}
        _ => panic!("loaded a missing texture"),
    }

    assert!(!quad.is_loaded());
    assert_eq!(probe.live_objects(), 0);

    let mut cube = TexturedCube::with_image("missing.png");
    match cube.load(&mut renderer, &assets) {
        Err(Error::AssetNotFound(_)) => {}
        _ => panic!("loaded a missing texture"),
    }

    assert!(!cube.is_loaded());
    assert_eq!(probe.live_objects(), 0);

    // Nothing is left bound to the released objects either.
    assert_eq!(probe.vertex_array(), None);
    assert_eq!(probe.array_buffer(), None);
}

#[test]
fn missing_shader() {
    let (mut renderer, probe, _) = setup();
    let dir = tempfile::tempdir().unwrap();
    let assets = partial_assets(dir.path(), &["colorvertex"]);

    // The vertex unit compiles before the fragment source turns out to be missing.
    let mut quad = ColoredQuad::new();
    match quad.load(&mut renderer, &assets) {
        Err(Error::AssetNotFound(path)) => assert!(path.ends_with("shaders/colorfragment.glsl")),
        Err(err) => panic!("unexpected error {}", err),
        Ok(_) => panic!("loaded a missing shader"),
    }

    assert!(!quad.is_loaded());
    assert_eq!(probe.live_objects(), 0);

    // The program links before the texture turns out to be missing.
    let assets = partial_assets(dir.path(), &["simplevertex", "simplefragment"]);
    let mut quad = TexturedQuad::new();
    match quad.load(&mut renderer, &assets) {
        Err(Error::AssetNotFound(path)) => assert!(path.ends_with("textures/silk.png")),
        Err(err) => panic!("unexpected error {}", err),
        Ok(_) => panic!("loaded a missing texture"),
    }

    assert!(!quad.is_loaded());
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn reload() {
    let (mut renderer, probe, assets) = setup();

    let mut quad = ColoredQuad::new();
    quad.load(&mut renderer, &assets).unwrap();
    let live = probe.live_objects();

    // Loading twice keeps the objects of the first load.
    quad.load(&mut renderer, &assets).unwrap();
    assert_eq!(probe.live_objects(), live);

    quad.unload(&mut renderer).unwrap();
    quad.load(&mut renderer, &assets).unwrap();
    assert_eq!(probe.live_objects(), live);

    quad.unload(&mut renderer).unwrap();
    quad.unload(&mut renderer).unwrap();
    assert_eq!(probe.live_objects(), 0);
}
