//! Camera description and the two camera controllers.
//!
//! Both controllers keep the camera looking at the origin. The mode is chosen
//! when the controller is built and cannot change afterwards.

use crate::constants::*;
use crate::pointer::{PointerState, WorldViewport};
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_START,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space size of the view at the look-at target.
    pub fn world_viewport(&self) -> WorldViewport {
        WorldViewport::at_distance(self.fovy_radians, self.aspect, self.eye.distance(self.target))
    }

    /// World-space ray through a pointer position given in ndc (+y up).
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ray_through(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize_or_zero();
        (ro, rd)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    /// Drag-to-orbit with auto-rotation.
    Orbit,
    /// Drift toward the pointer.
    Follow,
}

impl CameraMode {
    pub fn from_orbit_flag(enable_orbit_controls: bool) -> Self {
        if enable_orbit_controls {
            CameraMode::Orbit
        } else {
            CameraMode::Follow
        }
    }
}

/// Eases the camera toward a point offset by the pointer. After the pointer
/// leaves, it keeps following the last position seen.
#[derive(Clone, Debug)]
pub struct FollowCamera {
    pub position: Vec3,
    last_ndc: Vec2,
}

impl FollowCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            last_ndc: Vec2::ZERO,
        }
    }

    pub fn update(&mut self, pointer: &PointerState) -> Vec3 {
        if let Some(ndc) = pointer.ndc {
            self.last_ndc = ndc;
        }
        let p = self.last_ndc;
        let target = Vec2::new(p.x * FOLLOW_RANGE, -p.y * FOLLOW_RANGE);
        self.position.x += (target.x - self.position.x) * FOLLOW_LERP;
        self.position.y += (target.y - self.position.y) * FOLLOW_LERP;
        self.position
    }
}

/// Orbit around the origin on a sphere. Dragging changes azimuth and polar
/// angle, the wheel changes the distance, and the camera drifts around the
/// vertical axis while idle.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    radius: f32,
    theta: f32,
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
    dragging: bool,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitControls {
    pub fn new(position: Vec3) -> Self {
        let radius = position.length();
        let (theta, phi) = if radius > 0.0 {
            (
                position.x.atan2(position.z),
                (position.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            radius,
            theta,
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
            dragging: false,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Drag by `delta_px` pixels on an element `element_height_px` tall.
    pub fn drag(&mut self, delta_px: Vec2, element_height_px: f32) {
        if !self.dragging || element_height_px <= 0.0 {
            return;
        }
        let d = delta_px * ORBIT_ROTATE_SPEED;
        self.pending_theta -= TAU * d.x / element_height_px;
        self.pending_phi -= TAU * d.y / element_height_px;
    }

    /// Wheel step. Negative `delta_y` zooms in.
    pub fn zoom(&mut self, delta_y: f32) {
        let step = 0.95_f32.powf(ORBIT_ZOOM_SPEED);
        if delta_y < 0.0 {
            self.pending_scale *= step;
        } else if delta_y > 0.0 {
            self.pending_scale /= step;
        }
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn update(&mut self, dt_sec: f32) -> Vec3 {
        if self.auto_rotate && !self.dragging {
            self.pending_theta -= TAU / 60.0 * self.auto_rotate_speed * dt_sec.max(0.0);
        }
        self.theta += self.pending_theta;
        self.phi = (self.phi + self.pending_phi)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pending_scale = 1.0;
        self.position()
    }

    pub fn position(&self) -> Vec3 {
        let s = self.phi.sin();
        Vec3::new(
            self.radius * s * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * s * self.theta.cos(),
        )
    }
}

pub enum CameraController {
    Orbit(OrbitControls),
    Follow(FollowCamera),
}

impl CameraController {
    pub fn new(mode: CameraMode, start: Vec3) -> Self {
        match mode {
            CameraMode::Orbit => CameraController::Orbit(OrbitControls::new(start)),
            CameraMode::Follow => CameraController::Follow(FollowCamera::new(start)),
        }
    }

    pub fn mode(&self) -> CameraMode {
        match self {
            CameraController::Orbit(_) => CameraMode::Orbit,
            CameraController::Follow(_) => CameraMode::Follow,
        }
    }

    pub fn orbit_mut(&mut self) -> Option<&mut OrbitControls> {
        match self {
            CameraController::Orbit(o) => Some(o),
            CameraController::Follow(_) => None,
        }
    }

    /// Advance one frame and write the result into `camera`.
    pub fn update(&mut self, camera: &mut Camera, dt_sec: f32, pointer: &PointerState) {
        camera.eye = match self {
            CameraController::Orbit(o) => o.update(dt_sec),
            CameraController::Follow(f) => f.update(pointer),
        };
        camera.target = Vec3::ZERO;
    }
}
