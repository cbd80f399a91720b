use crate::core::Scene;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
    wire_wheel(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (pos, size) = input::pointer_canvas_css(&ev, &w.canvas);
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        let (delta, down) = {
            let mut ms = w.mouse_state.borrow_mut();
            (ms.moved_to(pos, ndc), ms.down)
        };
        if down {
            if let Some(orbit) = w.scene.borrow_mut().controller.orbit_mut() {
                orbit.drag(delta, size.y);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (pos, _) = input::pointer_canvas_css(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.last_css = pos;
            ms.down = true;
        }
        if let Some(orbit) = w.scene.borrow_mut().controller.orbit_mut() {
            orbit.begin_drag();
            log::debug!("[mouse] begin orbit drag");
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().down = false;
        if let Some(orbit) = w.scene.borrow_mut().controller.orbit_mut() {
            orbit.end_drag();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().left();
        if let Some(orbit) = w.scene.borrow_mut().controller.orbit_mut() {
            orbit.end_drag();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if let Some(orbit) = w.scene.borrow_mut().controller.orbit_mut() {
            orbit.zoom(ev.delta_y() as f32);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
