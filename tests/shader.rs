extern crate easel;
extern crate tempfile;

use std::fs;

use easel::prelude::*;
use easel::video::backends::headless::Trace;
use easel::video::UniformValue;

const VS: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
uniform mat4 view;
void main() { gl_Position = view * vec4(aPos, 1.0); }";

const FS: &str = "#version 330 core
out vec4 FragColor;
uniform vec4 uColor;
void main() { FragColor = uColor; }";

#[test]
fn compile_failure() {
    let (mut ctx, probe) = GraphicsContext::headless();

    let broken = "#version 330 core\nvoid main() {\n    gl_FragColor = vec4(1.0);\n";
    match ShaderUnit::compile(&mut ctx, ShaderStage::Fragment, broken) {
        Err(Error::ShaderCompile { stage, log }) => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert!(log.contains("error"));
        }
        Err(err) => panic!("unexpected error {}", err),
        Ok(_) => panic!("broken shader compiled"),
    }

    // The unit is released and nothing else has been created.
    assert_eq!(probe.live_objects(), 0);
    let trace = probe.trace();
    assert_eq!(trace.len(), 2);
    assert!(trace.iter().all(|v| match *v {
        Trace::CreateShader(_) | Trace::DeleteShader(_) => true,
        _ => false,
    }));
}

#[test]
fn link() {
    let (mut ctx, probe) = GraphicsContext::headless();

    let vs = ShaderUnit::compile(&mut ctx, ShaderStage::Vertex, VS).unwrap();
    let fs = ShaderUnit::compile(&mut ctx, ShaderStage::Fragment, FS).unwrap();
    assert_eq!(vs.stage(), ShaderStage::Vertex);
    let units = (vs.id(), fs.id());

    let program = ShaderProgram::link(&mut ctx, vs, fs).unwrap();
    assert!(probe.is_linked(program.id()));
    assert!(probe.attached_shaders(program.id()).is_empty());

    let trace = probe.trace();
    assert!(trace.contains(&Trace::DeleteShader(units.0)));
    assert!(trace.contains(&Trace::DeleteShader(units.1)));
    assert_eq!(probe.live_objects(), 1);

    program.destroy(&mut ctx).unwrap();
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn link_failure() {
    let (mut ctx, probe) = GraphicsContext::headless();

    let a = ShaderUnit::compile(&mut ctx, ShaderStage::Vertex, VS).unwrap();
    let b = ShaderUnit::compile(&mut ctx, ShaderStage::Vertex, VS).unwrap();

    match ShaderProgram::link(&mut ctx, a, b) {
        Err(Error::ProgramLink { log }) => assert!(log.contains("vertex")),
        Err(err) => panic!("unexpected error {}", err),
        Ok(_) => panic!("two vertex shaders linked"),
    }

    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn uniforms() {
    let (mut ctx, probe) = GraphicsContext::headless();

    let vs = ShaderUnit::compile(&mut ctx, ShaderStage::Vertex, VS).unwrap();
    let fs = ShaderUnit::compile(&mut ctx, ShaderStage::Fragment, FS).unwrap();
    let program = ShaderProgram::link(&mut ctx, vs, fs).unwrap();

    program.bind(&mut ctx).unwrap();
    assert_eq!(probe.program(), Some(program.id()));

    let view = Matrix4::from_scale(2.0f32);
    program.set_uniform(&mut ctx, "view", view).unwrap();
    program
        .set_uniform(&mut ctx, "uColor", Vector4::new(1.0f32, 0.5, 0.25, 1.0))
        .unwrap();

    assert_eq!(
        probe.uniform(program.id(), "view"),
        Some(UniformValue::Matrix4f(view.into()))
    );
    assert_eq!(
        probe.uniform(program.id(), "uColor"),
        Some(UniformValue::Vector4f([1.0, 0.5, 0.25, 1.0]))
    );

    // Unknown names are ignored.
    program.set_uniform(&mut ctx, "uMissing", 1).unwrap();
    assert_eq!(probe.uniform(program.id(), "uMissing"), None);

    program.destroy(&mut ctx).unwrap();
    assert_eq!(probe.program(), None);
}

#[test]
fn load() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("shaders")).unwrap();
    fs::write(dir.path().join("shaders/vs.glsl"), VS).unwrap();
    fs::write(dir.path().join("shaders/fs.glsl"), FS).unwrap();

    let loader = AssetLoader::new(dir.path());
    let (mut ctx, probe) = GraphicsContext::headless();

    let info = easel::assets::ShaderInfo::new("vs", "fs");
    let program = ShaderProgram::load(&mut ctx, &loader, &info).unwrap();
    assert!(probe.is_linked(program.id()));
    program.destroy(&mut ctx).unwrap();

    // The vertex unit is released when the fragment source is missing.
    let info = easel::assets::ShaderInfo::new("vs", "missing");
    match ShaderProgram::load(&mut ctx, &loader, &info) {
        Err(Error::AssetNotFound(path)) => assert!(path.ends_with("shaders/missing.glsl")),
        Err(err) => panic!("unexpected error {}", err),
        Ok(_) => panic!("missing shader loaded"),
    }

    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn bundled() {
    let loader = AssetLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let (mut ctx, probe) = GraphicsContext::headless();

    let pairs = [
        ("colorvertex", "colorfragment"),
        ("simplevertex", "simplefragment"),
        ("cubevertex", "cubefragment"),
    ];

    for &(vs, fs) in &pairs {
        let info = easel::assets::ShaderInfo::new(vs, fs);
        let program = ShaderProgram::load(&mut ctx, &loader, &info).unwrap();
        assert!(probe.is_linked(program.id()));
        program.destroy(&mut ctx).unwrap();
    }

    assert_eq!(probe.live_objects(), 0);
}
