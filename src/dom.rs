use crate::constants::DATA_ATTR_PREFIX;
use fnv::FnvHashMap;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Collect `data-*` attributes of `el`, keyed without the prefix.
pub fn data_attributes(el: &web::Element) -> FnvHashMap<String, String> {
    let mut out = FnvHashMap::default();
    for name in el.get_attribute_names().iter() {
        let Some(name) = name.as_string() else {
            continue;
        };
        let Some(key) = name.strip_prefix(DATA_ATTR_PREFIX) else {
            continue;
        };
        if let Some(value) = el.get_attribute(&name) {
            out.insert(key.to_string(), value);
        }
    }
    out
}

/// Show the pointer cursor over the page while a shape is hovered.
pub fn set_hover_cursor(hovering: bool) {
    let Some(body) = window_document().and_then(|d| d.body()) else {
        return;
    };
    let cursor = if hovering { "pointer" } else { "default" };
    _ = body.style().set_property("cursor", cursor);
}
