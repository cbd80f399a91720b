use crate::constants::SHAPE_COUNT_STEP;
use crate::core::Scene;
use crate::input::{key_action, KeyAction};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KeyWiring {
    pub document: web::Document,
    pub scene: Rc<RefCell<Scene>>,
}

/// Refresh the hint text and make sure it is visible after a change.
fn update_hint_after_change(document: &web::Document, scene: &Scene) {
    overlay::update(document, scene.config());
    overlay::show(document);
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyWiring) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    if action == KeyAction::ToggleHint {
        overlay::toggle(&w.document);
        ev.prevent_default();
        return;
    }

    let mut scene = w.scene.borrow_mut();
    match action {
        KeyAction::MoreShapes | KeyAction::FewerShapes => {
            let delta = if action == KeyAction::MoreShapes {
                SHAPE_COUNT_STEP
            } else {
                -SHAPE_COUNT_STEP
            };
            let next = scene.config().with_shape_count_step(delta);
            if next.shape_count == scene.config().shape_count {
                return;
            }
            log::info!("[keys] shape count {}", next.shape_count);
            scene.rebuild(next);
        }
        KeyAction::ToggleCameraMode => {
            let next = scene.config().with_camera_mode_toggled();
            log::info!("[keys] camera {:?}", next.camera_mode());
            scene.rebuild(next);
        }
        KeyAction::TogglePostProcessing => {
            let enabled = !scene.config().enable_post_processing;
            scene.set_post_processing(enabled);
            log::info!("[keys] post-processing={}", enabled);
        }
        KeyAction::ToggleHint => {}
    }
    update_hint_after_change(&w.document, &scene);
    ev.prevent_default();
}

pub fn wire_global_keydown(w: KeyWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
