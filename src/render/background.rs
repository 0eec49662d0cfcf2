use crate::assets::LoadedImage;
use glam::Vec2;
use wgpu;
use wgpu::util::{DeviceExt, TextureDataOrder};

use super::formats::BACKGROUND_FORMAT;

/// GPU handle for one background image.
///
/// `size` is the image's natural size in pixels (before any downscale), which
/// is what the cover fit needs. A placeholder reports 1x1.
pub(crate) struct BackgroundTexture {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) size: Vec2,
}

impl BackgroundTexture {
    pub(crate) fn placeholder(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        rgba: [u8; 4],
    ) -> Self {
        Self::upload(device, queue, label, 1, 1, &rgba, Vec2::ONE)
    }

    pub(crate) fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &LoadedImage,
    ) -> Self {
        Self::upload(
            device,
            queue,
            label,
            image.width,
            image.height,
            &image.rgba,
            Vec2::new(image.natural_width as f32, image.natural_height as f32),
        )
    }

    fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
        size: Vec2,
    ) -> Self {
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: BACKGROUND_FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            TextureDataOrder::LayerMajor,
            rgba,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            texture,
            view,
            size,
        }
    }
}
