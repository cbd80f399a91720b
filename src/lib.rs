#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::core::{Scene, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Stop the frame loop when the page is hidden for unload.
fn wire_pagehide(frame_loop: frame::FrameLoop) {
    let closure = Closure::wrap(Box::new(move || {
        frame_loop.stop();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shapefield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let config = SceneConfig::from_attributes(&dom::data_attributes(&canvas_el));
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let scene = Scene::new(config);
    let gpu = frame::init_gpu(&canvas, scene.background()).await;
    let scene = Rc::new(RefCell::new(scene));

    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        mouse_state: mouse_state.clone(),
    });
    events::wire_global_keydown(events::KeyWiring {
        document: document.clone(),
        scene: scene.clone(),
    });
    overlay::update(&document, scene.borrow().config());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        mouse: mouse_state,
        canvas,
        gpu,
        last_instant: Instant::now(),
        last_hovered: None,
    }));
    wire_pagehide(frame::start_loop(frame_ctx));
    Ok(())
}
