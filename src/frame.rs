use crate::core::{Background, PointerState, Scene, ViewportSize};
use crate::dom;
use crate::input;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    pub last_hovered: Option<usize>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let pointer = PointerState {
            ndc: self.mouse.borrow().ndc,
        };
        let rect = self.canvas.get_bounding_client_rect();
        let size = ViewportSize::new(rect.width() as f32, rect.height() as f32);

        let mut scene = self.scene.borrow_mut();
        let outcome = scene.tick(dt_sec, pointer, size);
        for ev in &outcome.hover_events {
            log::debug!("[hover] {:?}", ev);
        }
        let hovered = scene.hovered();
        if hovered.is_some() != self.last_hovered.is_some() {
            dom::set_hover_cursor(hovered.is_some());
        }
        self.last_hovered = hovered;

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    background: Background,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, background).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: TickClosure,
    handle: Rc<RefCell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if let Some(id) = self.handle.borrow_mut().take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
        log::info!("[field] frame loop stopped");
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let w = web::window()?;
    let tick_ref = tick.borrow();
    let cb = tick_ref.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if handle_clone.borrow().is_none() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        *handle_clone.borrow_mut() = request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    *handle.borrow_mut() = request_frame(&tick);
    FrameLoop { tick, handle }
}
