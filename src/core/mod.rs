// Shaders bundled as string constants
pub static TRAIL_WGSL: &str = include_str!("../../shaders/trail.wgsl");
pub static DISPLAY_WGSL: &str = include_str!("../../shaders/display.wgsl");
