// Host-side end-to-end scenarios driving a whole field or scene frame by frame.

use glam::Vec3;
use shapefield_core::*;

const DT: f32 = 1.0 / 60.0;

fn viewport() -> WorldViewport {
    WorldViewport::at_distance(60f32.to_radians(), 16.0 / 9.0, 15.0)
}

#[test]
fn idle_field_stays_at_rest() {
    let mut field = Field::new(25, 8.0);
    for frame in 0..100 {
        field.update(&FrameInput {
            elapsed: frame as f32 * DT,
            dt: DT,
            pointer: PointerState::default(),
            viewport: viewport(),
        });
    }
    for s in field.shapes() {
        assert!(s.state.position.distance(s.state.origin()) < 0.01);
        assert!((s.state.scale - 1.0).abs() < 1e-6);
    }
}

#[test]
fn field_relaxes_after_pointer_leaves() {
    let mut field = Field::new(25, 8.0);
    for _ in 0..30 {
        field.step_shapes(DT, Some(Vec3::ZERO));
    }
    let displaced = field
        .shapes()
        .iter()
        .map(|s| s.state.position.distance(s.state.origin()))
        .fold(0.0, f32::max);
    assert!(displaced > 0.5);
    // Push never exceeds full influence without hover
    assert!(displaced <= 2.0 + 1e-4);
    for _ in 0..100 {
        field.step_shapes(DT, None);
    }
    for s in field.shapes() {
        assert!(s.state.position.distance(s.state.origin()) < 0.01);
    }
}

#[test]
fn hovered_shape_grows_and_others_stay_bounded() {
    let mut field = Field::new(25, 8.0);
    field.set_hovered(5, true);
    let mut prev = 1.0;
    for _ in 0..30 {
        field.step_shapes(DT, None);
        let s = field.shapes()[5].state.scale;
        assert!(s > prev && s < 1.8);
        prev = s;
    }
    assert!(prev > 1.5);
    for (i, s) in field.shapes().iter().enumerate() {
        if i != 5 {
            assert!(s.state.scale <= 1.5);
        }
    }
}

#[test]
fn pointer_on_shape_origin_gives_full_push() {
    let mut field = Field::new(25, 8.0);
    let cursor = field.shapes()[10].state.origin();
    let reports = field.step_shapes(DT, Some(cursor));
    assert_eq!(reports[10].influence, 1.0);
    assert_eq!(reports[10].push.length(), 2.0);
    assert!((reports[10].target_scale - 1.5).abs() < 1e-6);
}

#[test]
fn scene_tick_drives_camera_and_field() {
    let mut scene = Scene::new(SceneConfig::default());
    assert_eq!(scene.field.len(), 40);
    let out = scene.tick(DT, PointerState::default(), ViewportSize::new(800.0, 600.0));
    assert_eq!(out.steps.len(), 40);
    assert!(out.hover_events.is_empty());
    assert_eq!(scene.camera.target, Vec3::ZERO);
    assert!((scene.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    assert!(scene.elapsed() > 0.0);
}

#[test]
fn scene_tick_clamps_long_frames() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.tick(5.0, PointerState::default(), ViewportSize::default());
    assert!((scene.elapsed() - MAX_FRAME_DT_SEC).abs() < 1e-6);
    scene.tick(f32::NAN, PointerState::default(), ViewportSize::default());
    assert!((scene.elapsed() - MAX_FRAME_DT_SEC).abs() < 1e-6);
}

#[test]
fn scene_hover_enters_and_leaves() {
    let mut scene = Scene::new(SceneConfig::default());
    let size = ViewportSize::new(800.0, 600.0);
    let out = scene.tick(DT, PointerState::at(0.0, 0.0), size);
    let hovered = scene.hovered().expect("centre ray should hit a shape");
    assert_eq!(out.hover_events.as_slice(), &[HoverEvent::Enter(hovered)]);
    assert!(scene.field.shapes()[hovered].state.hovered());

    let out = scene.tick(DT, PointerState::default(), size);
    assert_eq!(out.hover_events.as_slice(), &[HoverEvent::Leave(hovered)]);
    assert_eq!(scene.hovered(), None);
    assert_eq!(scene.field.hovered_index(), None);
}

#[test]
fn still_pointer_enters_hover_once() {
    let size = ViewportSize::new(800.0, 600.0);
    for (x, y) in [(0.3, 0.1), (0.0, 0.0)] {
        let mut scene = Scene::new(SceneConfig::default());
        let mut events = Vec::new();
        for _ in 0..240 {
            let out = scene.tick(DT, PointerState::at(x, y), size);
            events.extend(out.hover_events.iter().copied());
        }
        let first = events.first().copied();
        let hovered = match first {
            Some(HoverEvent::Enter(i)) => i,
            other => panic!("expected a single enter at ({x}, {y}), got {other:?}"),
        };
        assert_eq!(events, vec![HoverEvent::Enter(hovered)], "at ({x}, {y})");
        assert_eq!(scene.hovered(), Some(hovered));
        assert_eq!(scene.field.hovered_index(), Some(hovered));
    }
}

#[test]
fn rebuild_bumps_generation_and_resets_state() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.tick(DT, PointerState::default(), ViewportSize::default());
    let next = scene.config().with_shape_count_step(SHAPE_COUNT_STEP);
    scene.rebuild(next.with_camera_mode_toggled());
    assert_eq!(scene.generation(), 1);
    assert_eq!(scene.field.len(), 45);
    assert_eq!(scene.camera_mode(), CameraMode::Follow);
    assert_eq!(scene.elapsed(), 0.0);
}

#[test]
fn post_processing_toggle_keeps_field() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.set_post_processing(false);
    assert!(!scene.config().enable_post_processing);
    assert_eq!(scene.generation(), 0);
}

#[test]
fn empty_scene_ticks_without_shapes() {
    let config = SceneConfig {
        shape_count: 0,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(config);
    let out = scene.tick(DT, PointerState::at(0.2, 0.3), ViewportSize::default());
    assert!(out.steps.is_empty());
    assert_eq!(scene.hovered(), None);
}
