// Host-side tests for the per-shape animator.

use glam::Vec3;
use shapefield_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn influence_is_linear_and_clamped() {
    assert_eq!(influence(0.0), 1.0);
    assert!((influence(4.0) - 0.5).abs() < 1e-6);
    assert_eq!(influence(8.0), 0.0);
    assert_eq!(influence(20.0), 0.0);
}

#[test]
fn repulsion_points_away_from_cursor() {
    let (inf, push) = repulsion(Vec3::new(4.0, 0.0, 0.0), Some(Vec3::ZERO), false);
    assert!((inf - 0.5).abs() < 1e-6);
    assert!((push - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);

    let (inf, push) = repulsion(Vec3::new(4.0, 0.0, 0.0), Some(Vec3::ZERO), true);
    assert!((inf - 0.5).abs() < 1e-6);
    assert!((push - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn repulsion_without_cursor_is_zero() {
    assert_eq!(repulsion(Vec3::ONE, None, false), (0.0, Vec3::ZERO));
    assert_eq!(repulsion(Vec3::ONE, None, true), (0.0, Vec3::ZERO));
}

#[test]
fn repulsion_outside_radius_is_zero_unless_hovered() {
    let far = Vec3::new(10.0, 0.0, 0.0);
    assert_eq!(repulsion(far, Some(Vec3::ZERO), false), (0.0, Vec3::ZERO));
    let (_, push) = repulsion(far, Some(Vec3::ZERO), true);
    assert!((push.length() - 3.0).abs() < 1e-6);
}

#[test]
fn rest_state_converges_to_origin() {
    let origin = Vec3::new(1.0, 2.0, 3.0);
    let mut s = ShapeState::new(3, origin);
    s.position = origin + Vec3::new(3.0, -2.0, 1.0);
    let mut prev = s.position.distance(origin);
    for _ in 0..100 {
        s.step(DT, None);
        let d = s.position.distance(origin);
        assert!(d <= prev * 0.9 + 1e-6, "not contracting: {d} after {prev}");
        prev = d;
    }
    assert!(prev < 0.01);
}

#[test]
fn position_moves_ten_percent_toward_target_each_frame() {
    let mut s = ShapeState::new(0, Vec3::ZERO);
    let report = s.step(DT, Some(Vec3::new(-4.0, 0.0, 0.0)));
    assert!((report.target_position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    assert!((s.position - Vec3::new(0.1, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn hover_overrides_proximity_scale() {
    assert_eq!(target_scale(0.0, true), 1.8);
    assert_eq!(target_scale(1.0, true), 1.8);
    for i in 0..=10 {
        let ts = target_scale(i as f32 / 10.0, false);
        assert!((1.0..=1.5).contains(&ts));
        assert!(ts < target_scale(0.0, true));
    }
}

#[test]
fn scale_eases_toward_target() {
    let mut s = ShapeState::new(5, Vec3::ZERO);
    s.pointer_enter();
    s.step(DT, None);
    assert!((s.scale - (1.0 + 0.8 * 0.15)).abs() < 1e-6);
}

#[test]
fn hover_state_machine_reports_transitions() {
    let mut s = ShapeState::new(2, Vec3::ZERO);
    assert_eq!(s.hover_state(), HoverState::Idle);
    assert!(s.pointer_enter());
    assert!(!s.pointer_enter());
    assert!(s.hovered());
    assert!(s.pointer_leave());
    assert!(!s.pointer_leave());
    assert!(!s.set_hovered(false));
    assert!(s.set_hovered(true));
}

#[test]
fn rotation_follows_scaled_clock_and_index_offset() {
    let mut s = ShapeState::new(10, Vec3::ZERO);
    assert!((s.rotation - Vec3::splat(0.1)).length() < 1e-6);
    for _ in 0..50 {
        s.step(0.1, None);
    }
    // clock = 5 s * 0.2
    let want = Vec3::new(1.0 + 0.1, 1.0 + 0.1, 0.5 + 0.1);
    assert!((s.rotation - want).length() < 1e-4, "{:?}", s.rotation);
    assert_eq!(spin(2.0, 0), Vec3::new(2.0, 2.0, 1.0));
}

#[test]
fn negative_or_invalid_dt_does_not_rewind_clock() {
    let mut s = ShapeState::new(0, Vec3::ZERO);
    s.step(-1.0, None);
    s.step(f32::NAN, None);
    assert_eq!(s.rotation, Vec3::ZERO);
}

#[test]
fn point_size_and_opacity_follow_hover() {
    let mut s = ShapeState::new(40, Vec3::ZERO);
    assert!((s.point_size() - 0.1).abs() < 1e-6);
    assert!((s.opacity() - 0.8).abs() < 1e-6);
    s.pointer_enter();
    assert!((s.point_size() - 0.3).abs() < 1e-6);
    assert_eq!(s.opacity(), 1.0);

    let big = ShapeState::new(80, Vec3::ZERO);
    assert!((big.point_size() - 0.12).abs() < 1e-6);
}

#[test]
fn local_matrix_places_origin_at_position() {
    let mut s = ShapeState::new(1, Vec3::new(2.0, 0.0, -1.0));
    s.scale = 2.0;
    let m = s.local_matrix();
    assert!((m.transform_point3(Vec3::ZERO) - Vec3::new(2.0, 0.0, -1.0)).length() < 1e-6);
    let unit = m.transform_vector3(Vec3::X);
    assert!((unit.length() - 2.0).abs() < 1e-5);
}
