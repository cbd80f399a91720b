use crate::constants::HINT_ID;
use crate::core::{CameraMode, SceneConfig};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HINT_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

pub fn hint_text(config: &SceneConfig) -> String {
    let mode = match config.camera_mode() {
        CameraMode::Orbit => "orbit",
        CameraMode::Follow => "follow",
    };
    format!(
        "shapes {} (+/-) · camera {} (o) · bloom {} (b) · h hides",
        config.effective_shape_count(),
        mode,
        if config.enable_post_processing { "on" } else { "off" }
    )
}

pub fn update(document: &web::Document, config: &SceneConfig) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        el.set_text_content(Some(&hint_text(config)));
    }
}
