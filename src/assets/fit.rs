/// Shrink `width` x `height` so the longer side is at most `max_dim`,
/// keeping the aspect ratio. The shorter side is floored. Images already
/// within the cap are returned unchanged.
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    if width <= max_dim && height <= max_dim {
        return (width, height);
    }
    let scaled = |other: u32, long: u32| -> u32 {
        ((other as u64 * max_dim as u64) / long as u64).max(1) as u32
    };
    if width > height {
        (max_dim, scaled(height, width))
    } else {
        (scaled(width, height), max_dim)
    }
}
