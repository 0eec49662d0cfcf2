//! Background image loading.
//!
//! Loads are fire-and-forget: each one runs on its own `spawn_local` task and,
//! on success, reports the decoded pixels through the [`AssetInbox`]. The frame
//! loop drains the inbox and swaps the GPU texture; nothing here touches GPU
//! state. Failures are logged and the placeholder stays up for good.

use crate::constants::MAX_TEXTURE_DIM;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub mod fit;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundSlot {
    Top,
    Bottom,
}

/// RGBA8 pixels ready for upload, plus the image's size before downscaling.
pub struct LoadedImage {
    pub url: String,
    pub natural_width: u32,
    pub natural_height: u32,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub type AssetInbox = Rc<RefCell<Vec<(BackgroundSlot, LoadedImage)>>>;

pub fn spawn_background_load(slot: BackgroundSlot, url: &'static str, inbox: AssetInbox) {
    spawn_local(async move {
        match load_image(url).await {
            Ok(image) => inbox.borrow_mut().push((slot, image)),
            Err(e) => log::error!("Error loading image {}: {:?}", url, e),
        }
    });
}

pub async fn load_image(url: &str) -> anyhow::Result<LoadedImage> {
    let img = fetch_image(url).await?;
    let natural_width = img.natural_width();
    let natural_height = img.natural_height();
    if natural_width == 0 || natural_height == 0 {
        anyhow::bail!("image {} decoded with zero extent", url);
    }
    log::info!(
        "Loaded texture: {} ({}x{})",
        url,
        natural_width,
        natural_height
    );

    let (width, height) = fit::fit_within(natural_width, natural_height, MAX_TEXTURE_DIM);
    if (width, height) != (natural_width, natural_height) {
        log::info!("[assets] downscaled {} to {}x{}", url, width, height);
    }
    let rgba = rasterize(&img, width, height)?;

    Ok(LoadedImage {
        url: url.to_owned(),
        natural_width,
        natural_height,
        width,
        height,
        rgba,
    })
}

async fn fetch_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    let loaded = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    let outcome = JsFuture::from(loaded).await;
    img.set_onload(None);
    img.set_onerror(None);
    outcome.map_err(|e| anyhow::anyhow!("fetch/decode failed: {:?}", e))?;
    Ok(img)
}

/// Draw the image into an offscreen 2D canvas of the target size and read the
/// pixels back. The canvas does the resampling when the size differs.
fn rasterize(img: &web::HtmlImageElement, width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        img,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(data.data().0)
}
