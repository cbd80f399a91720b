//! One mounted shape-field scene: field, camera, and hover tracking driven by
//! a single per-frame tick.

use crate::animator::StepReport;
use crate::camera::{Camera, CameraController, CameraMode};
use crate::color::Background;
use crate::config::SceneConfig;
use crate::constants::CAMERA_START;
use crate::field::{Field, FrameInput};
use crate::hover::{HoverEvents, HoverTracker};
use crate::pointer::{PointerState, ViewportSize};
use glam::Vec2;

/// Longest frame step fed to the animators, in seconds.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct Scene {
    config: SceneConfig,
    background: Background,
    pub field: Field,
    pub controller: CameraController,
    pub camera: Camera,
    hover: HoverTracker,
    /// Pointer position of the last pick; hover is only re-resolved when it moves.
    picked_at: Option<Vec2>,
    elapsed: f32,
    generation: u64,
}

/// Result of one tick.
pub struct TickOutcome {
    pub hover_events: HoverEvents,
    pub steps: Vec<StepReport>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let background = config.background();
        let field = Field::from_config(&config);
        let controller = CameraController::new(config.camera_mode(), CAMERA_START);
        log::info!(
            "[field] mounted: shapes={} spread={:.1} camera={:?} post={}",
            field.len(),
            field.spread_radius(),
            controller.mode(),
            config.enable_post_processing
        );
        Self {
            config,
            background,
            field,
            controller,
            camera: Camera::default(),
            hover: HoverTracker::default(),
            picked_at: None,
            elapsed: 0.0,
            generation: 0,
        }
    }

    /// Discard the current field and camera and mount a new scene from
    /// `config`. The generation counter tells the renderer to re-upload.
    pub fn rebuild(&mut self, config: SceneConfig) {
        let generation = self.generation + 1;
        *self = Scene::new(config);
        self.generation = generation;
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.controller.mode()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover.current()
    }

    /// Bloom is a render-time switch and does not disturb the field.
    pub fn set_post_processing(&mut self, enabled: bool) {
        self.config.enable_post_processing = enabled;
    }

    /// Advance by `dt_sec` with one pointer/viewport snapshot.
    pub fn tick(&mut self, dt_sec: f32, pointer: PointerState, size: ViewportSize) -> TickOutcome {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        self.elapsed += dt;

        self.camera.aspect = size.aspect();
        self.controller.update(&mut self.camera, dt, &pointer);

        let current = self.hover.current();
        let picked = match pointer.ndc {
            None => None,
            Some(ndc) if self.picked_at == Some(ndc) => current,
            Some(ndc) => {
                let (ro, rd) = self.camera.ray_through(ndc);
                self.field.pick_keeping(ro, rd, current)
            }
        };
        self.picked_at = pointer.ndc;
        let hover_events = self.hover.update(picked);
        self.field.apply_hover(&hover_events);

        let steps = self.field.update(&FrameInput {
            elapsed: self.elapsed,
            dt,
            pointer,
            viewport: self.camera.world_viewport(),
        });
        TickOutcome {
            hover_events,
            steps,
        }
    }
}
