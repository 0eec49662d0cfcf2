use wgpu;

// Sampled as stored so the reveal blends the encoded sRGB values
pub const BACKGROUND_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Prefer a non-sRGB surface format so blended background bytes reach the
/// canvas unconverted. Falls back to whatever the surface lists first.
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}
