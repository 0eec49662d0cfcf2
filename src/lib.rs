#![cfg(target_arch = "wasm32")]
use crate::assets::{AssetInbox, BackgroundSlot};
use crate::constants::{BOTTOM_IMAGE_URL, TOP_IMAGE_URL};
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod assets;
pub mod constants;
mod core;
pub mod cover;
mod dom;
mod events;
mod frame;
pub mod input;
mod render;
pub mod trail;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fluid-reveal starting");

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
    let canvas = dom::first_canvas(&document).ok_or_else(|| anyhow::anyhow!("missing <canvas>"))?;

    dom::sync_canvas_backing_size(&window, &canvas);
    let viewport = Rc::new(RefCell::new(dom::viewport_state(&window)));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    let gpu = render::GpuState::new(&canvas).await?;

    // Placeholders are bound until these land in the inbox
    let inbox: AssetInbox = Rc::default();
    assets::spawn_background_load(BackgroundSlot::Top, TOP_IMAGE_URL, inbox.clone());
    assets::spawn_background_load(BackgroundSlot::Bottom, BOTTOM_IMAGE_URL, inbox.clone());

    events::wire_pointer_tracking(&canvas, &pointer);
    events::wire_resize(&canvas, &viewport);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        canvas, pointer, viewport, inbox, gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
