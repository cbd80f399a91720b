// Host-side tests for shape generation and the per-vertex colour field.

use glam::Vec3;
use shapefield_core::geometry;
use shapefield_core::*;

const ALL_KINDS: [ShapeKind; 6] = [
    ShapeKind::Icosphere,
    ShapeKind::Bracket,
    ShapeKind::Lightbulb,
    ShapeKind::Laptop,
    ShapeKind::Diamond,
    ShapeKind::Star,
];

#[test]
fn generate_is_deterministic_for_every_kind() {
    for kind in ALL_KINDS {
        for index in [0usize, 7, 39] {
            let a = generate(index, kind);
            let b = generate(index, kind);
            assert_eq!(a, b, "{kind:?} index {index} differs between calls");
            assert_eq!(a.vertices().len(), a.colors().len());
        }
    }
}

#[test]
fn vertex_counts_match_base_geometries() {
    assert_eq!(generate(0, ShapeKind::Icosphere).len(), 1500);
    assert_eq!(generate(0, ShapeKind::Lightbulb).len(), 17 * 17);
    assert_eq!(generate(0, ShapeKind::Laptop).len(), 24);
    assert_eq!(generate(0, ShapeKind::Diamond).len(), 24);
    // caps: (n - 2) triangles each, walls: two triangles per edge
    assert_eq!(generate(0, ShapeKind::Bracket).len(), 2 * 6 * 3 + 8 * 6);
    assert_eq!(generate(0, ShapeKind::Star).len(), 2 * 8 * 3 + 10 * 6);
}

#[test]
fn icosphere_vertices_lie_on_radius() {
    for v in geometry::icosphere(2.0, 4) {
        assert!((v.length() - 2.0).abs() < 1e-4, "vertex {v:?} off sphere");
    }
}

#[test]
fn extruded_shapes_span_depth() {
    let mesh = generate(3, ShapeKind::Star);
    let (min_z, max_z) = mesh
        .vertices()
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v.z), hi.max(v.z)));
    assert!(min_z.abs() < 1e-6);
    assert!((max_z - 0.2).abs() < 1e-6);
}

#[test]
fn triangulate_convex_and_concave_outlines() {
    let square = [
        glam::Vec2::new(0.0, 0.0),
        glam::Vec2::new(1.0, 0.0),
        glam::Vec2::new(1.0, 1.0),
        glam::Vec2::new(0.0, 1.0),
    ];
    assert_eq!(geometry::triangulate(&square).len(), 2);
    let star = geometry::star_outline(5, 1.0, 0.5);
    assert_eq!(geometry::triangulate(&star).len(), star.len() - 2);
}

#[test]
fn unknown_kind_tag_falls_back_to_icosphere() {
    assert_eq!(ShapeKind::from_tag("teapot"), ShapeKind::Icosphere);
    assert_eq!(ShapeKind::from_tag(""), ShapeKind::Icosphere);
    assert_eq!("STAR".parse::<ShapeKind>(), Ok(ShapeKind::Star));
    assert_eq!(ShapeKind::from_tag("code_bracket"), ShapeKind::Bracket);
    assert_eq!(generate_tagged(4, "teapot"), generate(4, ShapeKind::Icosphere));
    for kind in ALL_KINDS {
        assert_eq!(ShapeKind::from_tag(kind.tag()), kind);
    }
}

#[test]
fn kinds_cycle_through_pattern() {
    assert_eq!(ShapeKind::for_index(0), ShapeKind::Icosphere);
    assert_eq!(ShapeKind::for_index(1), ShapeKind::Bracket);
    assert_eq!(ShapeKind::for_index(5), ShapeKind::Laptop);
    assert_eq!(ShapeKind::for_index(6), ShapeKind::Icosphere);
    assert_eq!(ShapeKind::for_index(10), ShapeKind::Star);
}

#[test]
fn saturation_stays_within_swing_bounds() {
    for kind in ALL_KINDS {
        for v in generate(0, kind).vertices() {
            let hsl = vertex_hsl(*v, 0);
            assert!(
                (0.6 - 1e-6..=1.0 + 1e-6).contains(&hsl.saturation),
                "saturation {} out of range",
                hsl.saturation
            );
            assert!((hsl.hue - (0.3 + v.x * 0.15)).abs() < 1e-6);
        }
    }
}

#[test]
fn lightness_grows_with_index_and_has_floor() {
    let p = Vec3::new(0.5, 0.5, 0.0);
    assert!((vertex_hsl(p, 0).lightness - 0.1).abs() < 1e-6);
    assert!((vertex_hsl(p, 6).lightness - 0.1).abs() < 1e-6);
    assert!((vertex_hsl(p, 20).lightness - 0.3).abs() < 1e-6);
    assert!(vertex_hsl(p, 80).lightness > 1.0);
}

#[test]
fn colors_are_valid_rgb_and_saturate_to_white() {
    for index in [0usize, 30, 66, 79] {
        for c in generate(index, ShapeKind::Diamond).colors() {
            for ch in c {
                assert!((0.0..=1.0).contains(ch), "channel {ch} out of range");
            }
        }
    }
    for c in generate(79, ShapeKind::Diamond).colors() {
        assert_eq!(*c, [1.0, 1.0, 1.0]);
    }
}

#[test]
fn hsl_primary_colors() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    let wrapped = hsl_to_rgb(1.0, 1.0, 0.5);
    for (got, want) in [(red, [1.0, 0.0, 0.0]), (green, [0.0, 1.0, 0.0]), (wrapped, red)] {
        for i in 0..3 {
            assert!((got[i] - want[i]).abs() < 1e-5, "{got:?} != {want:?}");
        }
    }
    assert_eq!(hsl_to_rgb(0.2, 0.0, 0.4), [0.4, 0.4, 0.4]);
}

#[test]
fn packed_vertices_pair_positions_with_colors() {
    let mesh = generate(12, ShapeKind::Laptop);
    let packed = mesh.packed();
    assert_eq!(packed.len(), mesh.len());
    assert_eq!(packed[3].position, mesh.vertices()[3].to_array());
    assert_eq!(packed[3].color, mesh.colors()[3]);
    assert_eq!(std::mem::size_of::<PointVertex>(), 24);
}

#[test]
fn bounding_radius_covers_every_vertex() {
    let mesh = generate(0, ShapeKind::Laptop);
    let r = mesh.bounding_radius();
    let expected = Vec3::new(1.0, 0.05, 0.75).length();
    assert!((r - expected).abs() < 1e-5);
}
