use crate::cover::ViewportState;
use crate::input::CanvasRect;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The first `<canvas>` in the document.
pub fn first_canvas(document: &web::Document) -> Option<web::HtmlCanvasElement> {
    document
        .query_selector("canvas")
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

#[inline]
fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w, h)
}

pub fn viewport_state(window: &web::Window) -> ViewportState {
    let (w, h) = inner_size(window);
    let dpr = window.device_pixel_ratio();
    ViewportState {
        width: w as f32,
        height: h as f32,
        dpr: if dpr > 0.0 { dpr as f32 } else { 1.0 },
    }
}

/// Size the canvas to the full window; see `ViewportState::backing_size`.
pub fn sync_canvas_backing_size(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let vp = viewport_state(window);
    let (bw, bh) = vp.backing_size();
    canvas.set_width(bw);
    canvas.set_height(bh);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", vp.width));
    _ = style.set_property("height", &format!("{}px", vp.height));
}

#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
