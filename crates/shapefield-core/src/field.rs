//! Field controller: spiral layout, the whole-field sway, and the per-frame
//! driver that steps every shape against one pointer/time snapshot.

use crate::animator::{euler_xyz, ShapeState, StepReport};
use crate::config::SceneConfig;
use crate::constants::*;
use crate::hover::{ray_sphere, HoverEvent};
use crate::pointer::{PointerState, WorldViewport};
use crate::shape::{generate, ShapeKind, ShapeMesh};
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Origin of each shape on a spiral whose radius grows with the index.
pub fn layout(count: usize, spread_radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let frac = i as f32 / count as f32;
            let angle = frac * TAU;
            let radius = frac * spread_radius;
            Vec3::new(
                angle.cos() * radius,
                (i as f32 * LAYOUT_Y_FREQUENCY).sin() * LAYOUT_Y_AMPLITUDE,
                angle.sin() * radius,
            )
        })
        .collect()
}

/// Bounded sway of the whole field as Euler angles (x, y, 0).
#[inline]
pub fn field_rotation(elapsed_sec: f32) -> Vec3 {
    Vec3::new(
        (elapsed_sec * FIELD_SWAY_X_FREQ).cos() * FIELD_SWAY_X_AMP,
        (elapsed_sec * FIELD_SWAY_Y_FREQ).sin() * FIELD_SWAY_Y_AMP,
        0.0,
    )
}

/// Inputs sampled once per frame and shared by every shape.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Seconds since the first frame.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    pub pointer: PointerState,
    pub viewport: WorldViewport,
}

pub struct Shape {
    pub kind: ShapeKind,
    pub mesh: ShapeMesh,
    pub state: ShapeState,
    bounding_radius: f32,
}

impl Shape {
    pub fn new(index: usize, kind: ShapeKind, origin: Vec3) -> Self {
        let mesh = generate(index, kind);
        let bounding_radius = mesh.bounding_radius();
        Self {
            kind,
            mesh,
            state: ShapeState::new(index, origin),
            bounding_radius,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.state.index()
    }

    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    /// World-space bounding sphere under the field transform `group`.
    fn bounds(&self, group: &Mat4) -> (Vec3, f32) {
        (
            group.transform_point3(self.state.position),
            self.bounding_radius * self.state.scale,
        )
    }
}

pub struct Field {
    shapes: Vec<Shape>,
    rotation: Vec3,
    spread_radius: f32,
}

impl Field {
    /// Build `count` shapes on the spiral. A zero count yields an empty field.
    pub fn new(count: usize, spread_radius: f32) -> Self {
        let shapes = layout(count, spread_radius)
            .into_iter()
            .enumerate()
            .map(|(i, origin)| Shape::new(i, ShapeKind::for_index(i), origin))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] built {} shapes, spread {:.2}, {} points",
            shapes.len(),
            spread_radius,
            shapes.iter().map(|s| s.mesh.len()).sum::<usize>()
        );
        Self {
            shapes,
            rotation: field_rotation(0.0),
            spread_radius,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.effective_shape_count(), config.effective_spread())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn spread_radius(&self) -> f32 {
        self.spread_radius
    }

    /// Current sway as Euler angles.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_quat(euler_xyz(self.rotation))
    }

    /// Model matrix of shape `index`, field sway included.
    pub fn world_matrix(&self, index: usize) -> Option<Mat4> {
        self.shapes
            .get(index)
            .map(|s| self.group_matrix() * s.state.local_matrix())
    }

    /// Advance the sway and every shape by one frame.
    pub fn update(&mut self, input: &FrameInput) -> Vec<StepReport> {
        self.rotation = field_rotation(input.elapsed);
        let cursor = input.pointer.world(input.viewport);
        self.step_shapes(input.dt, cursor)
    }

    /// Step every shape against an explicit world-space cursor.
    pub fn step_shapes(&mut self, dt_sec: f32, pointer_world: Option<Vec3>) -> Vec<StepReport> {
        self.shapes
            .iter_mut()
            .map(|s| s.state.step(dt_sec, pointer_world))
            .collect()
    }

    pub fn set_hovered(&mut self, index: usize, hovered: bool) -> bool {
        match self.shapes.get_mut(index) {
            Some(s) => s.state.set_hovered(hovered),
            None => false,
        }
    }

    pub fn apply_hover(&mut self, events: &[HoverEvent]) {
        for ev in events {
            match *ev {
                HoverEvent::Enter(i) => {
                    self.set_hovered(i, true);
                }
                HoverEvent::Leave(i) => {
                    self.set_hovered(i, false);
                }
            }
        }
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.shapes.iter().position(|s| s.state.hovered())
    }

    /// Whether the ray hits shape `index`'s scaled bounding sphere.
    pub fn hits(&self, index: usize, ray_origin: Vec3, ray_dir: Vec3) -> bool {
        self.shapes.get(index).map_or(false, |s| {
            let (center, radius) = s.bounds(&self.group_matrix());
            ray_sphere(ray_origin, ray_dir, center, radius).is_some()
        })
    }

    /// Like [`Field::pick`] but keeps `current` while the ray still hits it.
    pub fn pick_keeping(
        &self,
        ray_origin: Vec3,
        ray_dir: Vec3,
        current: Option<usize>,
    ) -> Option<usize> {
        match current {
            Some(i) if self.hits(i, ray_origin, ray_dir) => Some(i),
            _ => self.pick(ray_origin, ray_dir),
        }
    }

    /// Nearest shape whose scaled bounding sphere the ray hits.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
        let group = self.group_matrix();
        let mut best = None::<(usize, f32)>;
        for (i, s) in self.shapes.iter().enumerate() {
            let (center, radius) = s.bounds(&group);
            if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }
}
