//! Base meshes for each shape kind, emitted as flat vertex position lists.
//!
//! Faceted solids (icosphere, octahedron, extrusions) are emitted as
//! non-indexed triangle lists, so shared corners appear once per face. The
//! sphere and box keep their indexed vertex grids. Either way the list is what
//! gets drawn as points.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

fn icosahedron_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

const OCTAHEDRON_CORNERS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Subdivided icosahedron projected onto a sphere of `radius`.
///
/// Each of the 20 faces is split into `(detail + 1)^2` triangles.
pub fn icosphere(radius: f32, detail: u32) -> Vec<Vec3> {
    polyhedron(&icosahedron_corners(), &ICOSAHEDRON_FACES, radius, detail)
}

pub fn octahedron(radius: f32, detail: u32) -> Vec<Vec3> {
    polyhedron(&OCTAHEDRON_CORNERS, &OCTAHEDRON_FACES, radius, detail)
}

fn polyhedron(corners: &[Vec3], faces: &[[usize; 3]], radius: f32, detail: u32) -> Vec<Vec3> {
    let cols = detail as usize + 1;
    let mut out = Vec::with_capacity(faces.len() * cols * cols * 3);
    for [a, b, c] in faces {
        subdivide_face(corners[*a], corners[*b], corners[*c], cols, &mut out);
    }
    for v in &mut out {
        *v = v.normalize_or_zero() * radius;
    }
    out
}

fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, cols: usize, out: &mut Vec<Vec3>) {
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let f = i as f32 / cols as f32;
        let aj = a.lerp(c, f);
        let bj = b.lerp(c, f);
        let rows = cols - i;
        let row = (0..=rows)
            .map(|j| {
                if rows == 0 {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / rows as f32)
                }
            })
            .collect();
        grid.push(row);
    }
    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                out.extend([grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
            } else {
                out.extend([grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
            }
        }
    }
}

/// Latitude/longitude sphere with `(width_segments + 1) * (height_segments + 1)`
/// grid vertices, seam and pole rows included.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Vec<Vec3> {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut out = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let theta = iy as f32 / h as f32 * PI;
        for ix in 0..=w {
            let phi = ix as f32 / w as f32 * TAU;
            out.push(Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }
    out
}

/// Axis-aligned box centred on the origin, one segment per side: four
/// corners per face, faces ordered +x, -x, +y, -y, +z, -z.
pub fn cuboid(width: f32, height: f32, depth: f32) -> Vec<Vec3> {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
    // (u axis, v axis, w axis, u sign, v sign, u half, v half, w offset)
    let faces: [(usize, usize, usize, f32, f32, f32, f32, f32); 6] = [
        (2, 1, 0, -1.0, -1.0, hd, hh, hw),
        (2, 1, 0, 1.0, -1.0, hd, hh, -hw),
        (0, 2, 1, 1.0, 1.0, hw, hd, hh),
        (0, 2, 1, 1.0, -1.0, hw, hd, -hh),
        (0, 1, 2, 1.0, -1.0, hw, hh, hd),
        (0, 1, 2, -1.0, -1.0, hw, hh, -hd),
    ];
    let mut out = Vec::with_capacity(24);
    for (u, v, w, udir, vdir, uh, vh, woff) in faces {
        for iy in 0..2 {
            let y = iy as f32 * 2.0 * vh - vh;
            for ix in 0..2 {
                let x = ix as f32 * 2.0 * uh - uh;
                let mut p = [0.0f32; 3];
                p[u] = x * udir;
                p[v] = y * vdir;
                p[w] = woff;
                out.push(Vec3::from_array(p));
            }
        }
    }
    out
}

/// Outline of the code-bracket glyph.
pub fn bracket_outline() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, -1.0),
        Vec2::new(-0.3, -1.0),
        Vec2::new(-0.3, -0.8),
        Vec2::new(-0.1, -0.8),
        Vec2::new(-0.1, 0.8),
        Vec2::new(-0.3, 0.8),
        Vec2::new(-0.3, 1.0),
        Vec2::new(0.0, 1.0),
    ]
}

/// Star outline alternating between outer and inner radius.
pub fn star_outline(spikes: u32, outer: f32, inner: f32) -> Vec<Vec2> {
    (0..spikes * 2)
        .map(|i| {
            let angle = i as f32 * PI / spikes as f32;
            let r = if i % 2 == 0 { outer } else { inner };
            Vec2::new(angle.cos() * r, angle.sin() * r)
        })
        .collect()
}

/// Extrude a closed outline along +z by `depth`: back cap, front cap, then
/// the side walls, all as a triangle list.
pub fn extrude(outline: &[Vec2], depth: f32) -> Vec<Vec3> {
    let mut pts: Vec<Vec2> = outline.to_vec();
    if pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    if pts.len() < 3 {
        return Vec::new();
    }
    if signed_area(&pts) < 0.0 {
        pts.reverse();
    }
    let tris = triangulate(&pts);
    let n = pts.len();
    let mut out = Vec::with_capacity(tris.len() * 6 + n * 6);
    let at = |p: Vec2, z: f32| Vec3::new(p.x, p.y, z);
    for [a, b, c] in &tris {
        out.extend([at(pts[*c], 0.0), at(pts[*b], 0.0), at(pts[*a], 0.0)]);
    }
    for [a, b, c] in &tris {
        out.extend([at(pts[*a], depth), at(pts[*b], depth), at(pts[*c], depth)]);
    }
    for i in 0..n {
        let p0 = pts[i];
        let p1 = pts[(i + 1) % n];
        let (a, b, c, d) = (at(p0, 0.0), at(p1, 0.0), at(p1, depth), at(p0, depth));
        out.extend([a, b, d, b, c, d]);
    }
    out
}

fn signed_area(pts: &[Vec2]) -> f32 {
    let n = pts.len();
    (0..n)
        .map(|i| pts[i].perp_dot(pts[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

/// Ear-clipping triangulation of a simple counter-clockwise polygon.
pub fn triangulate(pts: &[Vec2]) -> Vec<[usize; 3]> {
    let mut remaining: Vec<usize> = (0..pts.len()).collect();
    let mut tris = Vec::with_capacity(pts.len().saturating_sub(2));
    while remaining.len() > 3 {
        let m = remaining.len();
        let ear = (0..m).find(|&i| {
            let (a, b, c) = (
                remaining[(i + m - 1) % m],
                remaining[i],
                remaining[(i + 1) % m],
            );
            is_ear(pts, a, b, c, &remaining)
        });
        match ear {
            Some(i) => {
                tris.push([
                    remaining[(i + m - 1) % m],
                    remaining[i],
                    remaining[(i + 1) % m],
                ]);
                remaining.remove(i);
            }
            None => {
                // Degenerate outline: fan whatever is left.
                log::debug!("[geometry] no ear among {} vertices, fanning", m);
                for i in 1..m - 1 {
                    tris.push([remaining[0], remaining[i], remaining[i + 1]]);
                }
                return tris;
            }
        }
    }
    if let [a, b, c] = remaining[..] {
        tris.push([a, b, c]);
    }
    tris
}

fn is_ear(pts: &[Vec2], a: usize, b: usize, c: usize, remaining: &[usize]) -> bool {
    let (pa, pb, pc) = (pts[a], pts[b], pts[c]);
    if (pb - pa).perp_dot(pc - pb) <= 0.0 {
        return false;
    }
    !remaining
        .iter()
        .filter(|&&i| i != a && i != b && i != c)
        .any(|&i| point_in_triangle(pts[i], pa, pb, pc))
}

#[inline]
fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    (b - a).perp_dot(p - a) > 0.0 && (c - b).perp_dot(p - b) > 0.0 && (a - c).perp_dot(p - c) > 0.0
}
