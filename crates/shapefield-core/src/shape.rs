//! Shape generator: deterministic mesh and colour field per `(index, kind)`.

use crate::color::{vertex_color, Rgb};
use crate::geometry;
use glam::Vec3;
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Icosphere,
    Bracket,
    Lightbulb,
    Laptop,
    Diamond,
    Star,
}

/// Kind assignment cycle across the field: shape `i` uses `PATTERN[i % 6]`.
pub const PATTERN: [ShapeKind; 6] = [
    ShapeKind::Icosphere,
    ShapeKind::Bracket,
    ShapeKind::Lightbulb,
    ShapeKind::Diamond,
    ShapeKind::Star,
    ShapeKind::Laptop,
];

impl ShapeKind {
    /// Resolve a kind tag. Unknown tags resolve to the icosphere.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "icosphere" => ShapeKind::Icosphere,
            "bracket" | "code_bracket" => ShapeKind::Bracket,
            "lightbulb" => ShapeKind::Lightbulb,
            "laptop" => ShapeKind::Laptop,
            "diamond" => ShapeKind::Diamond,
            "star" => ShapeKind::Star,
            _ => ShapeKind::default(),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Icosphere => "icosphere",
            ShapeKind::Bracket => "code_bracket",
            ShapeKind::Lightbulb => "lightbulb",
            ShapeKind::Laptop => "laptop",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Star => "star",
        }
    }

    #[inline]
    pub fn for_index(index: usize) -> Self {
        PATTERN[index % PATTERN.len()]
    }

    fn base_vertices(&self) -> Vec<Vec3> {
        match self {
            ShapeKind::Icosphere => geometry::icosphere(2.0, 4),
            ShapeKind::Bracket => geometry::extrude(&geometry::bracket_outline(), 0.2),
            ShapeKind::Lightbulb => geometry::uv_sphere(1.0, 16, 16),
            ShapeKind::Laptop => geometry::cuboid(2.0, 0.1, 1.5),
            ShapeKind::Diamond => geometry::octahedron(1.0, 0),
            ShapeKind::Star => geometry::extrude(&geometry::star_outline(5, 1.0, 0.5), 0.2),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ShapeKind::from_tag(s))
    }
}

/// One point of a shape as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Vertex positions and their colours, aligned 1:1.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeMesh {
    vertices: Vec<Vec3>,
    colors: Vec<Rgb>,
}

impl ShapeMesh {
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Distance of the farthest vertex from the local origin.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }

    pub fn packed(&self) -> Vec<PointVertex> {
        self.vertices
            .iter()
            .zip(&self.colors)
            .map(|(p, c)| PointVertex {
                position: p.to_array(),
                color: *c,
            })
            .collect()
    }
}

/// Build the mesh for shape `index` of the given kind.
pub fn generate(index: usize, kind: ShapeKind) -> ShapeMesh {
    let vertices = kind.base_vertices();
    let colors = vertices.iter().map(|p| vertex_color(*p, index)).collect();
    ShapeMesh { vertices, colors }
}

/// Same as [`generate`] but resolves a raw kind tag first.
pub fn generate_tagged(index: usize, tag: &str) -> ShapeMesh {
    generate(index, ShapeKind::from_tag(tag))
}
