//! Pointer and viewport state sampled once per frame.

use glam::{Vec2, Vec3};

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Visible world-space rectangle on the plane through the look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldViewport {
    pub width: f32,
    pub height: f32,
}

impl WorldViewport {
    pub fn at_distance(fovy_radians: f32, aspect: f32, distance: f32) -> Self {
        let height = 2.0 * (fovy_radians / 2.0).tan() * distance;
        Self {
            width: height * aspect,
            height,
        }
    }
}

/// Normalized pointer position, `None` while the pointer is outside the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Option<Vec2>,
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            ndc: Some(Vec2::new(x, y)),
        }
    }

    /// Cursor on the z = 0 plane in world units, `None` when absent.
    pub fn world(&self, viewport: WorldViewport) -> Option<Vec3> {
        self.ndc.map(|p| pointer_world(p, viewport))
    }
}

#[inline]
pub fn pointer_world(ndc: Vec2, viewport: WorldViewport) -> Vec3 {
    Vec3::new(
        ndc.x * viewport.width / 2.0,
        ndc.y * viewport.height / 2.0,
        0.0,
    )
}

/// Map a CSS-pixel position inside a `width` x `height` box to ndc with +y up.
/// Returns `None` for degenerate boxes and for positions outside the box.
pub fn ndc_from_css(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    if !(0.0..=width).contains(&x) || !(0.0..=height).contains(&y) {
        return None;
    }
    Some(Vec2::new((x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0))
}
