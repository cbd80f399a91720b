//! Per-shape animator: repulsion from the cursor, damped relaxation toward the
//! rest position, clock-driven spin, and hover/proximity scaling.

use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Discrete hover state of one shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

/// Mutable transform of one shape plus its fixed rest position.
#[derive(Clone, Debug)]
pub struct ShapeState {
    index: usize,
    origin: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    hover: HoverState,
    clock: f32,
}

/// What one animator step computed, for the renderer and for inspection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    pub influence: f32,
    pub push: Vec3,
    pub target_position: Vec3,
    pub target_scale: f32,
}

impl ShapeState {
    pub fn new(index: usize, origin: Vec3) -> Self {
        Self {
            index,
            origin,
            position: origin,
            rotation: Vec3::splat(rotation_offset(index)),
            scale: 1.0,
            hover: HoverState::Idle,
            clock: 0.0,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hover == HoverState::Hovered
    }

    #[inline]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    /// Pointer entered the shape. Returns true if the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        let changed = self.hover == HoverState::Idle;
        self.hover = HoverState::Hovered;
        changed
    }

    /// Pointer left the shape. Returns true if the state changed.
    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.hover == HoverState::Hovered;
        self.hover = HoverState::Idle;
        changed
    }

    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if hovered {
            self.pointer_enter()
        } else {
            self.pointer_leave()
        }
    }

    /// Advance one frame. `pointer_world` is `None` when there is no cursor.
    pub fn step(&mut self, dt_sec: f32, pointer_world: Option<Vec3>) -> StepReport {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let hovered = self.hovered();

        let (influence, push) = repulsion(self.position, pointer_world, hovered);
        let target_position = self.origin + push;
        self.position = self.position.lerp(target_position, POSITION_LERP);

        self.clock += dt * ROTATION_CLOCK_RATE;
        self.rotation = spin(self.clock, self.index);

        let target_scale = target_scale(influence, hovered);
        self.scale += (target_scale - self.scale) * SCALE_LERP;

        StepReport {
            influence,
            push,
            target_position,
            target_scale,
        }
    }

    pub fn point_size(&self) -> f32 {
        let base = (self.index as f32 * POINT_SIZE_PER_INDEX).max(POINT_SIZE_MIN);
        if self.hovered() {
            base * HOVER_POINT_SIZE_MULTIPLIER
        } else {
            base
        }
    }

    pub fn opacity(&self) -> f32 {
        if self.hovered() {
            HOVER_POINT_OPACITY
        } else {
            POINT_OPACITY
        }
    }

    /// Local transform: translate, then XYZ Euler rotation, then uniform scale.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            euler_xyz(self.rotation),
            self.position,
        )
    }
}

#[inline]
pub fn rotation_offset(index: usize) -> f32 {
    index as f32 * ROTATION_OFFSET_PER_INDEX
}

#[inline]
pub fn euler_xyz(r: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
}

/// Linear proximity score in [0, 1], zero at and beyond the influence radius.
#[inline]
pub fn influence(distance: f32) -> f32 {
    (1.0 - distance / INFLUENCE_RADIUS).max(0.0)
}

/// Influence and push vector for a shape at `position`.
///
/// A pointer exactly on the shape pushes along +y so the push keeps its full
/// magnitude.
pub fn repulsion(position: Vec3, pointer_world: Option<Vec3>, hovered: bool) -> (f32, Vec3) {
    let Some(cursor) = pointer_world else {
        return (0.0, Vec3::ZERO);
    };
    let away = position - cursor;
    let influence = influence(away.length());
    if influence <= 0.0 && !hovered {
        return (influence, Vec3::ZERO);
    }
    let strength = influence * PUSH_STRENGTH + if hovered { HOVER_PUSH } else { 0.0 };
    let dir = away.try_normalize().unwrap_or(Vec3::Y);
    (influence, dir * strength)
}

/// Hover overrides proximity growth.
#[inline]
pub fn target_scale(influence: f32, hovered: bool) -> f32 {
    if hovered {
        HOVER_SCALE
    } else {
        1.0 + influence * INFLUENCE_SCALE_GAIN
    }
}

#[inline]
pub fn spin(clock: f32, index: usize) -> Vec3 {
    let offset = rotation_offset(index);
    Vec3::new(
        clock + offset,
        clock + offset,
        clock * ROTATION_Z_RATE + offset,
    )
}
