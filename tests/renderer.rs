#[macro_use]
extern crate approx;
extern crate easel;

use easel::prelude::*;
use easel::video::backends::headless::{HeadlessProbe, Trace};
use easel::video::{BlendFactor, Capability, FrameInfo, PolygonMode, Viewport};

fn renderer(dimensions: (u32, u32)) -> (Renderer, HeadlessProbe) {
    let (ctx, probe) = GraphicsContext::headless();
    (Renderer::new(ctx, dimensions).unwrap(), probe)
}

fn clears(probe: &HeadlessProbe) -> Vec<(bool, bool)> {
    probe
        .trace()
        .into_iter()
        .filter_map(|v| match v {
            Trace::Clear { color, depth } => Some((color, depth)),
            _ => None,
        })
        .collect()
}

#[test]
fn setup() {
    let (renderer, probe) = renderer((1280, 768));

    assert_eq!(probe.clear_color(), Color::cornflower_blue());
    assert_eq!(renderer.framebuffer_size(), (1280, 768));
    assert_eq!(
        probe.viewport(),
        Viewport {
            x: 0,
            y: 0,
            width: 1280,
            height: 768,
        }
    );

    assert!(!renderer.debug_draw());
    assert!(!renderer.is_depth_enabled());
    assert_eq!(renderer.last_frame(), FrameInfo::default());
}

#[test]
fn resize() {
    let (mut renderer, probe) = renderer((1280, 768));

    renderer.resize((800, 600)).unwrap();
    assert_eq!(renderer.viewport(), probe.viewport());
    assert_eq!(probe.viewport().width, 800);
    assert_eq!(probe.viewport().height, 600);
    assert_relative_eq!(renderer.aspect(), 800.0 / 600.0);

    let projection = renderer.projection();
    assert_eq!(projection.bounds(), (-400.0, 400.0, -300.0, 300.0));
    assert_ulps_eq!(projection.near, 0.1);
    assert_ulps_eq!(projection.far, 1.0);

    // Empty framebuffers are ignored.
    renderer.resize((0, 600)).unwrap();
    renderer.resize((800, 0)).unwrap();
    assert_eq!(renderer.framebuffer_size(), (800, 600));
    assert_eq!(probe.viewport().width, 800);
}

#[test]
fn ortho() {
    let (renderer, _) = renderer((800, 600));
    let m = renderer.ortho();

    let corner = m * Vector4::new(400.0, 300.0, -0.1, 1.0);
    assert_relative_eq!(corner, Vector4::new(1.0, 1.0, 0.0, 1.0), epsilon = 1e-5);

    let corner = m * Vector4::new(-400.0, -300.0, -1.0, 1.0);
    assert_relative_eq!(corner, Vector4::new(-1.0, -1.0, 1.0, 1.0), epsilon = 1e-5);

    // The origin stays in the center.
    let center = m * Vector4::new(0.0, 0.0, -0.5, 1.0);
    assert_relative_eq!(center.x, 0.0);
    assert_relative_eq!(center.y, 0.0);
}

#[test]
fn blend() {
    let (mut renderer, probe) = renderer((800, 600));
    assert!(!probe.is_enabled(Capability::Blend));

    renderer.enable_blend().unwrap();
    assert!(probe.is_enabled(Capability::Blend));
    assert_eq!(
        probe.blend_func(),
        (BlendFactor::SourceAlpha, BlendFactor::OneMinusSourceAlpha)
    );

    renderer.disable_blend().unwrap();
    assert!(!probe.is_enabled(Capability::Blend));
}

#[test]
fn depth() {
    let (mut renderer, probe) = renderer((800, 600));

    renderer.begin_frame().unwrap();
    renderer.end_frame().unwrap();

    // Depth testing is only enabled around draws, as the cube does.
    renderer.begin_frame().unwrap();
    renderer.enable_depth().unwrap();
    assert!(renderer.is_depth_enabled());
    assert!(probe.is_enabled(Capability::DepthTest));
    renderer.disable_depth().unwrap();
    assert!(!probe.is_enabled(Capability::DepthTest));

    // The depth buffer is cleared once per frame, before the first depth tested draw.
    renderer.enable_depth().unwrap();
    renderer.disable_depth().unwrap();
    renderer.end_frame().unwrap();

    renderer.begin_frame().unwrap();
    renderer.end_frame().unwrap();

    assert_eq!(
        clears(&probe),
        vec![(true, false), (true, false), (false, true), (true, false)]
    );
}

#[test]
fn depth_first_frame() {
    let (mut renderer, probe) = renderer((800, 600));

    // A scene that enables depth in its very first frame never sees an uncleared
    // depth buffer.
    renderer.begin_frame().unwrap();
    renderer.enable_depth().unwrap();
    renderer.disable_depth().unwrap();
    renderer.end_frame().unwrap();
    assert_eq!(clears(&probe), vec![(true, false), (false, true)]);

    // Depth testing that stays enabled across frames is cleared together with color.
    renderer.enable_depth().unwrap();
    renderer.begin_frame().unwrap();
    renderer.enable_depth().unwrap();
    renderer.end_frame().unwrap();

    renderer.begin_frame().unwrap();
    renderer.end_frame().unwrap();

    assert_eq!(
        clears(&probe),
        vec![(true, false), (false, true), (true, true), (true, true)]
    );
}

#[test]
fn debug_draw() {
    let (mut renderer, probe) = renderer((800, 600));

    renderer.toggle_debug_draw();
    assert!(renderer.debug_draw());
    renderer.begin_frame().unwrap();
    assert_eq!(probe.polygon_mode(), PolygonMode::Line);

    renderer.set_debug_draw(false);
    renderer.begin_frame().unwrap();
    assert_eq!(probe.polygon_mode(), PolygonMode::Fill);

    renderer.set_debug_draw(true);
    renderer.begin_frame().unwrap();
    renderer.dispose().unwrap();
    assert_eq!(probe.polygon_mode(), PolygonMode::Fill);
}

#[test]
fn draw_without_program() {
    let (mut renderer, _) = renderer((800, 600));

    renderer.begin_frame().unwrap();
    assert!(renderer.draw_triangles(3).is_err());
    assert!(renderer.draw_indexed_triangles(6).is_err());
    assert_eq!(renderer.end_frame().unwrap(), FrameInfo::default());
}
