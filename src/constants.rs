/// Tuning constants for the trail simulation and the reveal composite.
///
/// Everything is fixed at compile time; there is no runtime configuration
/// surface. Distances are in normalized field space (0..1 across the canvas).

// Simulation field (ping-pong targets are SIM_SIZE x SIM_SIZE, never resized)
pub const SIM_SIZE: u32 = 500;
pub const TRAIL_DECAY: f32 = 0.97; // per-frame multiplier applied to the previous field
pub const BRUSH_LINE_WIDTH: f32 = 0.02;
pub const BRUSH_STRENGTH: f32 = 0.28; // peak intensity added on the stroke line
pub const MIN_LINE_WIDTH: f32 = 0.0001; // guards the distance/width division
pub const MOVE_EPSILON: f32 = 0.001; // displacement below this adds no stamp

// Pointer
pub const POINTER_IDLE_MS: f64 = 100.0;
pub const POINTER_START: [f32; 2] = [0.5, 0.5];

// Reveal mask
pub const MASK_THRESHOLD: f32 = 0.02;
pub const MASK_EDGE_WIDTH: f32 = 0.004; // divided by the device pixel ratio

// Surface and assets
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MAX_TEXTURE_DIM: u32 = 4096;

pub const TOP_IMAGE_URL: &str = "/assests/images/fci6.jpeg";
pub const BOTTOM_IMAGE_URL: &str = "/assests/images/fci10.png";

// Solid placeholder colours shown until the images arrive (RGBA8)
pub const TOP_PLACEHOLDER_RGBA: [u8; 4] = [0x00, 0x00, 0xff, 0xff]; // blue
pub const BOTTOM_PLACEHOLDER_RGBA: [u8; 4] = [0xff, 0x00, 0x00, 0xff]; // red
