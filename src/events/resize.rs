use crate::cover::ViewportState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the viewport uniforms in step with the
/// window. The trail targets keep their fixed size.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, viewport: &Rc<RefCell<ViewportState>>) {
    let canvas = canvas.clone();
    let viewport = viewport.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        dom::sync_canvas_backing_size(&window, &canvas);
        let vp = dom::viewport_state(&window);
        log::debug!(
            "[resize] {}x{} dpr={} backing={}x{}",
            vp.width,
            vp.height,
            vp.dpr,
            canvas.width(),
            canvas.height()
        );
        *viewport.borrow_mut() = vp;
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
