use crate::constants::{
    BRUSH_LINE_WIDTH, BRUSH_STRENGTH, MIN_LINE_WIDTH, MOVE_EPSILON, TRAIL_DECAY,
};
use crate::input::PointerState;
use glam::Vec2;

/// Parameters of the trail field update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParams {
    pub decay: f32,
    pub line_width: f32,
    pub brush_strength: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            decay: TRAIL_DECAY,
            line_width: BRUSH_LINE_WIDTH,
            brush_strength: BRUSH_STRENGTH,
        }
    }
}

/// The line stamped into the field this frame.
///
/// The projection treats the line as infinite, so texels past either end of
/// the segment still receive intensity if they are close to its extension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub origin: Vec2,
    pub dir: Vec2,
}

impl Stroke {
    /// Derive the stroke from pointer state: none while idle, and none when the
    /// pointer moved less than the epsilon since the last frame.
    pub fn from_pointer(pointer: &PointerState) -> Option<Self> {
        if !pointer.moving {
            return None;
        }
        let delta = pointer.displacement();
        let len = delta.length();
        if len <= MOVE_EPSILON {
            return None;
        }
        Some(Self {
            origin: pointer.previous,
            dir: delta / len,
        })
    }

    /// Perpendicular distance from `uv` to the stroke line.
    #[inline]
    pub fn distance_to(&self, uv: Vec2) -> f32 {
        let along = (uv - self.origin).dot(self.dir);
        let closest = self.origin + self.dir * along;
        uv.distance(closest)
    }
}

/// Brush falloff: linear from full strength on the line to zero at `line_width`.
#[inline]
pub fn stamp_intensity(distance: f32, params: &TrailParams) -> f32 {
    let width = params.line_width.max(MIN_LINE_WIDTH);
    (1.0 - distance / width).clamp(0.0, 1.0) * params.brush_strength
}

/// Host-side mirror of `fs_trail` in `shaders/trail.wgsl` for one texel.
/// The result is not clamped upward; saturation happens at display time.
pub fn advance_texel(prev: f32, uv: Vec2, stroke: Option<&Stroke>, params: &TrailParams) -> f32 {
    let base = prev * params.decay;
    match stroke {
        Some(s) => base + stamp_intensity(s.distance_to(uv), params),
        None => base,
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TrailUniforms {
    pub origin: [f32; 2],
    pub dir: [f32; 2],
    pub decay: f32,
    pub line_width: f32,
    pub brush_strength: f32,
    pub stamp: u32,
}

impl TrailUniforms {
    pub fn new(params: &TrailParams, stroke: Option<&Stroke>) -> Self {
        let (origin, dir, stamp) = match stroke {
            Some(s) => (s.origin.to_array(), s.dir.to_array(), 1),
            None => ([0.0; 2], [0.0; 2], 0),
        };
        Self {
            origin,
            dir,
            decay: params.decay,
            line_width: params.line_width.max(MIN_LINE_WIDTH),
            brush_strength: params.brush_strength,
            stamp,
        }
    }
}

/// Role bookkeeping for the two simulation targets: one is read, the other
/// written, and the roles swap after every rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PingPong {
    current: usize,
}

impl PingPong {
    /// Target written last frame, sampled by this frame's simulation pass.
    #[inline]
    pub fn read(&self) -> usize {
        self.current
    }

    /// Target the simulation pass writes this frame.
    #[inline]
    pub fn write(&self) -> usize {
        (self.current + 1) % 2
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current = self.write();
    }
}
