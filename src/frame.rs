use crate::assets::{AssetInbox, BackgroundSlot};
use crate::cover::{DisplayParams, DisplayUniforms, ViewportState};
use crate::input::PointerState;
use crate::render;
use crate::trail::{PingPong, Stroke, TrailParams, TrailUniforms};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick needs. Event handlers share `pointer` and
/// `viewport`; the asset tasks share `inbox`. All run on the same event loop,
/// so a `RefCell` borrow never overlaps another.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub viewport: Rc<RefCell<ViewportState>>,
    pub inbox: AssetInbox,
    pub gpu: render::GpuState,
    pub ping_pong: PingPong,
    pub trail_params: TrailParams,
    pub display_params: DisplayParams,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        pointer: Rc<RefCell<PointerState>>,
        viewport: Rc<RefCell<ViewportState>>,
        inbox: AssetInbox,
        gpu: render::GpuState,
    ) -> Self {
        Self {
            canvas,
            pointer,
            viewport,
            inbox,
            gpu,
            ping_pong: PingPong::default(),
            trail_params: TrailParams::default(),
            display_params: DisplayParams::default(),
        }
    }

    pub fn frame(&mut self) {
        let stroke = {
            let mut pointer = self.pointer.borrow_mut();
            if pointer.expire_idle(instant::now()) {
                log::debug!("[pointer] idle, stroke settled");
            }
            Stroke::from_pointer(&pointer)
        };

        let arrivals = std::mem::take(&mut *self.inbox.borrow_mut());
        for (slot, image) in &arrivals {
            self.gpu.install_background(*slot, image);
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let trail = TrailUniforms::new(&self.trail_params, stroke.as_ref());
        let display = DisplayUniforms::new(
            &self.viewport.borrow(),
            &self.display_params,
            self.gpu.background_size(BackgroundSlot::Top),
            self.gpu.background_size(BackgroundSlot::Bottom),
        );

        match self.gpu.render(
            self.ping_pong.read(),
            self.ping_pong.write(),
            &trail,
            &display,
        ) {
            Ok(()) => {
                self.ping_pong.advance();
                self.pointer.borrow_mut().end_frame();
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost/outdated, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
