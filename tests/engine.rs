extern crate easel;

use easel::prelude::*;
use easel::video::backends::headless::{HeadlessProbe, Trace};
use easel::video::{DrawMode, PolygonMode, ProgramId};

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.assets = concat!(env!("CARGO_MANIFEST_DIR"), "/assets").into();
    settings.engine.max_fps = 0;
    settings.headless = true;
    settings
}

fn engine(settings: Settings, frames: Vec<Vec<Event>>) -> (Engine, HeadlessProbe) {
    let (mut engine, probe) = Engine::headless(settings, frames).unwrap();

    let registry = engine.registry_mut();
    registry.add(ColoredQuad::new());
    registry.add(TexturedQuad::new());
    registry.add(TexturedCube::new());

    engine
        .attach_overlay(|renderer| Ok(Box::new(MenuBar::new(renderer)?)))
        .unwrap();

    (engine, probe)
}

/// The programs drawn in each frame, in order.
fn frames(probe: &HeadlessProbe) -> Vec<Vec<ProgramId>> {
    let mut frames = Vec::new();
    for v in probe.trace() {
        match v {
            Trace::Clear { color: true, .. } => frames.push(Vec::new()),
            Trace::Draw(program) => frames.last_mut().unwrap().push(program),
            _ => {}
        }
    }

    frames
}

fn overlay_program(probe: &HeadlessProbe) -> ProgramId {
    probe
        .draws()
        .into_iter()
        .find(|v| v.uniforms.contains_key("uColor"))
        .unwrap()
        .program
}

#[test]
fn run() {
    let frames_in = vec![
        vec![Event::Resized(800, 600)],
        vec![],
        vec![Event::KeyDown(Key::Tab)],
        vec![Event::KeyDown(Key::Tab)],
        vec![Event::KeyDown(Key::F1)],
        vec![Event::KeyDown(Key::Key1)],
    ];

    let (engine, probe) = engine(settings(), frames_in);
    let engine = engine.run().unwrap();

    assert_eq!(engine.registry().active_index(), None);
    assert!(!engine.has_overlay());
    assert_eq!(engine.renderer().framebuffer_size(), (800, 600));
    assert_eq!(probe.live_objects(), 0);

    // Six frames, the scene first and the overlay on top of it.
    let overlay = overlay_program(&probe);
    let frames = frames(&probe);
    assert_eq!(frames.len(), 6);
    for v in &frames {
        assert_eq!(v.len(), 2);
        assert_ne!(v[0], overlay);
        assert_eq!(v[1], overlay);
    }

    let draws = probe.draws();
    let scene: Vec<_> = draws.iter().filter(|v| v.program != overlay).collect();
    let modes: Vec<_> = scene.iter().map(|v| (v.mode, v.count)).collect();
    assert_eq!(
        modes,
        vec![
            (DrawMode::IndexedTriangles, 6),
            (DrawMode::IndexedTriangles, 6),
            (DrawMode::IndexedTriangles, 6),
            (DrawMode::Triangles, 36),
            (DrawMode::Triangles, 36),
            (DrawMode::IndexedTriangles, 6),
        ]
    );

    assert!(scene[2].texture.is_some());
    assert_eq!(scene[4].polygon_mode, PolygonMode::Line);
    assert!(draws.iter().all(|v| v.blend));
}

#[test]
fn escape() {
    let (engine, probe) = engine(settings(), vec![vec![Event::KeyDown(Key::Escape)], vec![]]);
    engine.run().unwrap();

    assert!(probe.draws().is_empty());
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn unload_order() {
    let mut settings = settings();
    settings.engine.testbed = Some(TexturedCube::NAME.to_owned());

    let (engine, probe) = engine(settings, vec![vec![]]);
    engine.run().unwrap();

    let overlay = overlay_program(&probe);
    let scene = probe.draws()[0].program;
    assert_ne!(scene, overlay);

    let trace = probe.trace();
    let position = |v: Trace| trace.iter().position(|t| *t == v).unwrap();
    assert!(position(Trace::DeleteProgram(scene)) < position(Trace::DeleteProgram(overlay)));
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn undefined_testbed() {
    let mut settings = settings();
    settings.engine.testbed = Some("Nothing".to_owned());

    let (engine, probe) = engine(settings, vec![vec![]]);
    match engine.run() {
        Err(Error::TestBedUndefined(name)) => assert_eq!(name, "Nothing"),
        _ => panic!("ran with an undefined test bed"),
    }

    // The overlay is still released.
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn failed_load_releases_everything() {
    let mut settings = settings();
    settings.engine.testbed = Some(TexturedCube::NAME.to_owned());

    let (mut engine, probe) = engine(settings, vec![vec![]]);
    engine
        .registry_mut()
        .add(TexturedCube::with_image("missing.png"));

    match engine.run() {
        Err(Error::AssetNotFound(path)) => assert!(path.ends_with("textures/missing.png")),
        Err(err) => panic!("unexpected error {}", err),
        Ok(_) => panic!("ran with a missing texture"),
    }

    assert!(probe.draws().is_empty());
    assert_eq!(probe.live_objects(), 0);
}

#[test]
fn digits_out_of_range_are_ignored() {
    let frames_in = vec![
        vec![Event::KeyDown(Key::Key3)],
        vec![Event::KeyDown(Key::Key9), Event::KeyDown(Key::Key0)],
    ];

    let (engine, probe) = engine(settings(), frames_in);
    engine.run().unwrap();

    let overlay = overlay_program(&probe);
    let modes: Vec<_> = probe
        .draws()
        .into_iter()
        .filter(|v| v.program != overlay)
        .map(|v| v.mode)
        .collect();

    assert_eq!(modes, vec![DrawMode::Triangles, DrawMode::Triangles]);
}
