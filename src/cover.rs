use crate::constants::{MASK_EDGE_WIDTH, MASK_THRESHOLD, MAX_PIXEL_RATIO};
use glam::Vec2;

/// Window size in CSS pixels plus the raw device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl ViewportState {
    #[inline]
    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Canvas backing store in device pixels. The ratio is capped at
    /// `MAX_PIXEL_RATIO` but not floored, so zoomed-out pages go below 1.
    pub fn backing_size(&self) -> (u32, u32) {
        let ratio = (self.dpr as f64).min(MAX_PIXEL_RATIO);
        let w = (self.width as f64 * ratio) as u32;
        let h = (self.height as f64 * ratio) as u32;
        (w.max(1), h.max(1))
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            dpr: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayParams {
    pub threshold: f32,
    pub edge_width: f32,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            threshold: MASK_THRESHOLD,
            edge_width: MASK_EDGE_WIDTH,
        }
    }
}

/// Affine UV remap `uv * scale + bias` applied before sampling a background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverTransform {
    pub scale: Vec2,
    pub bias: Vec2,
}

impl CoverTransform {
    pub const IDENTITY: Self = Self {
        scale: Vec2::ONE,
        bias: Vec2::ZERO,
    };

    #[inline]
    pub fn apply(&self, uv: Vec2) -> Vec2 {
        uv * self.scale + self.bias
    }

    #[inline]
    pub fn packed(&self) -> [f32; 4] {
        [self.scale.x, self.scale.y, self.bias.x, self.bias.y]
    }
}

/// `background-size: cover` for an image of `size` pixels shown in a viewport
/// of `resolution`: scale uniformly until both axes are covered, centre, and
/// crop the overflow.
///
/// A size with any component below 1 marks a texture that has not loaded yet;
/// its UVs pass through unchanged.
pub fn cover_transform(resolution: Vec2, size: Vec2) -> CoverTransform {
    if size.x < 1.0 || size.y < 1.0 || resolution.x <= 0.0 || resolution.y <= 0.0 {
        return CoverTransform::IDENTITY;
    }
    let s = resolution / size;
    let scaled = size * s.x.max(s.y);
    let offset = (resolution - scaled) * 0.5;
    CoverTransform {
        scale: resolution / scaled,
        bias: -offset / scaled,
    }
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Lower and upper edge of the reveal threshold. The soft band narrows as the
/// pixel ratio grows so it stays about the same width in physical pixels.
#[inline]
pub fn mask_edges(params: &DisplayParams, dpr: f32) -> [f32; 2] {
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    [params.threshold, params.threshold + params.edge_width / dpr]
}

/// Mix factor between the top (0) and bottom (1) image for a field value.
#[inline]
pub fn blend_factor(fluid: f32, edges: [f32; 2]) -> f32 {
    smoothstep(edges[0], edges[1], fluid)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DisplayUniforms {
    pub top_uv: [f32; 4],
    pub bottom_uv: [f32; 4],
    pub edges: [f32; 2],
    pub _pad: [f32; 2],
}

impl DisplayUniforms {
    pub fn new(
        viewport: &ViewportState,
        params: &DisplayParams,
        top_size: Vec2,
        bottom_size: Vec2,
    ) -> Self {
        let res = viewport.resolution();
        Self {
            top_uv: cover_transform(res, top_size).packed(),
            bottom_uv: cover_transform(res, bottom_size).packed(),
            edges: mask_edges(params, viewport.dpr),
            _pad: [0.0; 2],
        }
    }
}
