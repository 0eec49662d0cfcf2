// Host-side tests for the trail field update.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}
mod trail {
    include!("../src/trail.rs");
}

use glam::Vec2;
use input::{CanvasRect, PointerState};
use trail::*;

const UNIT: CanvasRect = CanvasRect {
    left: 0.0,
    top: 0.0,
    width: 100.0,
    height: 100.0,
};

fn moving_pointer(from: Vec2, to: Vec2) -> PointerState {
    PointerState {
        current: to,
        previous: from,
        moving: true,
        last_move_ms: 0.0,
    }
}

#[test]
fn no_stroke_while_idle() {
    let mut p = moving_pointer(Vec2::new(0.2, 0.2), Vec2::new(0.4, 0.2));
    p.moving = false;
    assert_eq!(Stroke::from_pointer(&p), None);
}

#[test]
fn no_stroke_below_move_epsilon() {
    let p = moving_pointer(Vec2::new(0.5, 0.5), Vec2::new(0.5005, 0.5));
    assert_eq!(Stroke::from_pointer(&p), None);
}

#[test]
fn stroke_direction_is_normalized() {
    let p = moving_pointer(Vec2::new(0.1, 0.1), Vec2::new(0.4, 0.5));
    let s = Stroke::from_pointer(&p).unwrap();
    assert_eq!(s.origin, Vec2::new(0.1, 0.1));
    assert!((s.dir.length() - 1.0).abs() < 1e-6);
    assert!((s.dir.x - 0.6).abs() < 1e-5);
    assert!((s.dir.y - 0.8).abs() < 1e-5);
}

#[test]
fn stamp_falls_off_linearly_to_line_width() {
    let params = TrailParams::default();
    assert!((stamp_intensity(0.0, &params) - 0.28).abs() < 1e-6);
    assert!((stamp_intensity(0.01, &params) - 0.14).abs() < 1e-6);
    assert_eq!(stamp_intensity(0.02, &params), 0.0);
    assert_eq!(stamp_intensity(0.5, &params), 0.0);
}

#[test]
fn zero_line_width_is_guarded() {
    let params = TrailParams {
        line_width: 0.0,
        ..TrailParams::default()
    };
    let v = stamp_intensity(0.0, &params);
    assert!(v.is_finite());
    assert!((v - params.brush_strength).abs() < 1e-6);
}

#[test]
fn projection_uses_infinite_line() {
    let params = TrailParams::default();
    let s = Stroke::from_pointer(&moving_pointer(Vec2::new(0.4, 0.5), Vec2::new(0.5, 0.5))).unwrap();
    // well past the segment end but on its extension
    let beyond = advance_texel(0.0, Vec2::new(0.9, 0.5), Some(&s), &params);
    assert!((beyond - 0.28).abs() < 1e-5);
    let off_line = advance_texel(0.0, Vec2::new(0.45, 0.53), Some(&s), &params);
    assert_eq!(off_line, 0.0);
}

#[test]
fn idle_frame_is_exact_decay() {
    let params = TrailParams::default();
    for prev in [0.0_f32, 0.02, 0.5, 1.0, 1.7] {
        let next = advance_texel(prev, Vec2::new(0.3, 0.7), None, &params);
        assert_eq!(next, prev * 0.97);
    }
}

#[test]
fn decay_is_monotonic_and_tends_to_zero() {
    let params = TrailParams::default();
    let mut v = 1.0_f32;
    for _ in 0..300 {
        let next = advance_texel(v, Vec2::new(0.5, 0.5), None, &params);
        assert!(next <= v);
        v = next;
    }
    assert!(v < 1e-3, "field did not fade: {}", v);
}

#[test]
fn repeated_stamps_are_not_clamped() {
    let params = TrailParams::default();
    let s = Stroke::from_pointer(&moving_pointer(Vec2::new(0.2, 0.5), Vec2::new(0.3, 0.5))).unwrap();
    let mut v = 0.0;
    for _ in 0..20 {
        v = advance_texel(v, Vec2::new(0.25, 0.5), Some(&s), &params);
    }
    assert!(v > 1.0, "expected accumulation past 1.0, got {}", v);
}

#[test]
fn stationary_then_single_move_scenario() {
    let params = TrailParams::default();
    let texel = Vec2::new(0.55, 0.5);
    let mut pointer = PointerState::default();
    let mut field = 0.0_f32;

    // enters at the centre and stays for 5 frames: no displacement, no stamp
    for frame in 0..5 {
        pointer.track(&UNIT, 50.0, 50.0, frame as f64 * 16.0);
        pointer.expire_idle(frame as f64 * 16.0);
        let stroke = Stroke::from_pointer(&pointer);
        assert!(stroke.is_none());
        field = advance_texel(field, texel, stroke.as_ref(), &params);
        pointer.end_frame();
    }
    assert_eq!(field, 0.0);

    // one move to (0.6, 0.5)
    pointer.track(&UNIT, 60.0, 50.0, 80.0);
    let stroke = Stroke::from_pointer(&pointer);
    assert!(stroke.is_some());
    field = advance_texel(field, texel, stroke.as_ref(), &params);
    pointer.end_frame();
    assert!((field - 0.28).abs() < 1e-4, "peak was {}", field);

    // then idle frames: 3% fade per frame
    for _ in 0..3 {
        let stroke = Stroke::from_pointer(&pointer);
        assert!(stroke.is_none());
        let expected = field * 0.97;
        field = advance_texel(field, texel, stroke.as_ref(), &params);
        assert_eq!(field, expected);
    }
}

#[test]
fn uniforms_pack_stroke_and_flag() {
    let params = TrailParams::default();
    let idle = TrailUniforms::new(&params, None);
    assert_eq!(idle.stamp, 0);
    assert_eq!(idle.decay, 0.97);

    let s = Stroke {
        origin: Vec2::new(0.1, 0.2),
        dir: Vec2::new(1.0, 0.0),
    };
    let active = TrailUniforms::new(&params, Some(&s));
    assert_eq!(active.stamp, 1);
    assert_eq!(active.origin, [0.1, 0.2]);
    assert_eq!(active.dir, [1.0, 0.0]);
    assert_eq!(active.line_width, 0.02);
    assert_eq!(active.brush_strength, 0.28);
    assert_eq!(std::mem::size_of::<TrailUniforms>(), 32);
}

#[test]
fn ping_pong_alternates_by_parity() {
    let mut pp = PingPong::default();
    for frame in 0..6 {
        assert_eq!(pp.read(), frame % 2);
        assert_eq!(pp.write(), (frame + 1) % 2);
        assert_ne!(pp.read(), pp.write());
        pp.advance();
    }
}
