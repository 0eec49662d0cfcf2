use crate::dom;
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window-level mouse/pen and single-touch moves into the pointer state.
pub fn wire_pointer_tracking(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerState>>) {
    wire_pointermove(canvas.clone(), pointer.clone());
    wire_touchmove(canvas.clone(), pointer.clone());
}

fn wire_pointermove(canvas: web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // touch input goes through touchmove so it can cancel scrolling
        if ev.pointer_type() == "touch" {
            return;
        }
        let rect = dom::canvas_rect(&canvas);
        pointer.borrow_mut().track(
            &rect,
            ev.client_x() as f32,
            ev.client_y() as f32,
            instant::now(),
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(canvas: web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        ev.prevent_default();
        let rect = dom::canvas_rect(&canvas);
        pointer.borrow_mut().track(
            &rect,
            touch.client_x() as f32,
            touch.client_y() as f32,
            instant::now(),
        );
    }) as Box<dyn FnMut(_)>);

    // Non-passive so preventDefault() is honoured
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
