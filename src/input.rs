use shapefield_core::ndc_from_css;
use glam::Vec2;
use web_sys as web;

/// Latest pointer sample, written by event handlers and read once per frame.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub ndc: Option<Vec2>,
    pub last_css: Vec2,
    pub down: bool,
}

impl MouseState {
    /// Record a move and return the CSS-pixel delta since the previous one.
    pub fn moved_to(&mut self, css: Vec2, ndc: Option<Vec2>) -> Vec2 {
        let delta = css - self.last_css;
        self.last_css = css;
        self.ndc = ndc;
        delta
    }

    pub fn left(&mut self) {
        self.ndc = None;
        self.down = false;
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    (
        Vec2::new(x_css, y_css),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let (p, size) = pointer_canvas_css(ev, canvas);
    ndc_from_css(p.x, p.y, size.x, size.y)
}

// ---------------- Keyboard mapping ----------------
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    MoreShapes,
    FewerShapes,
    ToggleCameraMode,
    TogglePostProcessing,
    ToggleHint,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "+" | "=" => Some(KeyAction::MoreShapes),
        "-" | "_" => Some(KeyAction::FewerShapes),
        "o" | "O" => Some(KeyAction::ToggleCameraMode),
        "b" | "B" => Some(KeyAction::TogglePostProcessing),
        "h" | "H" => Some(KeyAction::ToggleHint),
        _ => None,
    }
}
