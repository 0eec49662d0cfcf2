use crate::constants::{POINTER_IDLE_MS, POINTER_START};
use glam::Vec2;

/// Pointer state shared between the event handlers and the frame loop.
///
/// Event handlers only ever write `current` (through [`PointerState::track`]);
/// `previous` is owned by the frame driver and refreshed once per tick by
/// [`PointerState::end_frame`], after both passes have run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub previous: Vec2,
    pub moving: bool,
    pub last_move_ms: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        let start = Vec2::from_array(POINTER_START);
        Self {
            current: start,
            previous: start,
            moving: false,
            last_move_ms: 0.0,
        }
    }
}

/// Canvas rectangle in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    #[inline]
    pub fn contains(&self, client_x: f32, client_y: f32) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }
}

/// Map a client position inside `rect` to field space: x grows rightwards,
/// y is flipped so 0 is the bottom edge.
///
/// Returns `None` when the position lies outside the rectangle or the
/// rectangle is degenerate.
#[inline]
pub fn canvas_uv(rect: &CanvasRect, client_x: f32, client_y: f32) -> Option<Vec2> {
    if rect.width <= 0.0 || rect.height <= 0.0 || !rect.contains(client_x, client_y) {
        return None;
    }
    let u = (client_x - rect.left) / rect.width;
    let v = 1.0 - (client_y - rect.top) / rect.height;
    Some(Vec2::new(u, v))
}

impl PointerState {
    /// Record a move event. Inside the canvas this updates `current` and
    /// restarts the idle clock; outside it only clears `moving`.
    pub fn track(&mut self, rect: &CanvasRect, client_x: f32, client_y: f32, now_ms: f64) {
        match canvas_uv(rect, client_x, client_y) {
            Some(uv) => {
                self.current = uv;
                self.moving = true;
                self.last_move_ms = now_ms;
            }
            None => self.moving = false,
        }
    }

    /// Settle a stroke once no move event arrived for longer than the idle
    /// timeout. Returns true when the flag flipped.
    pub fn expire_idle(&mut self, now_ms: f64) -> bool {
        if self.moving && now_ms - self.last_move_ms > POINTER_IDLE_MS {
            self.moving = false;
            return true;
        }
        false
    }

    /// End-of-frame snapshot: the next frame's segment starts where this one ended.
    #[inline]
    pub fn end_frame(&mut self) {
        self.previous = self.current;
    }

    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.current - self.previous
    }
}
