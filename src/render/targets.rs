use super::helpers;
use wgpu;

/// Single-channel float format for the trail field; renderable and filterable
/// without optional device features.
pub(crate) const FIELD_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::R16Float;

/// The two ping-pong trail fields.
///
/// Both are `size` x `size`, created once and never resized; the display pass
/// resamples them to the surface with linear filtering. Which one is read and
/// which one written is decided by the frame driver's [`crate::trail::PingPong`].
pub(crate) struct SimTargets {
    pub(crate) textures: [wgpu::Texture; 2],
    pub(crate) views: [wgpu::TextureView; 2],
}

impl SimTargets {
    pub(crate) fn new(device: &wgpu::Device, size: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (ping, ping_view) =
            helpers::create_color_texture(device, "trail_ping", size, size, FIELD_FORMAT, usage);
        let (pong, pong_view) =
            helpers::create_color_texture(device, "trail_pong", size, size, FIELD_FORMAT, usage);
        Self {
            textures: [ping, pong],
            views: [ping_view, pong_view],
        }
    }

    /// Zero both fields before the first frame.
    pub(crate) fn clear(&self, encoder: &mut wgpu::CommandEncoder) {
        helpers::clear(encoder, "trail_clear_ping", &self.views[0]);
        helpers::clear(encoder, "trail_clear_pong", &self.views[1]);
    }

    pub(crate) fn size(&self) -> u32 {
        self.textures[0].width()
    }
}
