// Host-side tests for cover fitting and the reveal threshold.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod cover {
    include!("../src/cover.rs");
}

use cover::*;
use glam::Vec2;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-5
}

#[test]
fn unloaded_texture_passes_uv_through() {
    let res = Vec2::new(1280.0, 720.0);
    assert_eq!(cover_transform(res, Vec2::new(0.0, 0.0)), CoverTransform::IDENTITY);
    assert_eq!(cover_transform(res, Vec2::new(0.5, 900.0)), CoverTransform::IDENTITY);
    assert_eq!(cover_transform(res, Vec2::new(900.0, 0.9)), CoverTransform::IDENTITY);
    let uv = Vec2::new(0.3, 0.8);
    assert_eq!(CoverTransform::IDENTITY.apply(uv), uv);
}

#[test]
fn square_image_in_wide_viewport_crops_vertically() {
    let t = cover_transform(Vec2::new(1000.0, 500.0), Vec2::new(1000.0, 1000.0));
    assert!(approx(t.apply(Vec2::new(0.0, 0.0)), Vec2::new(0.0, 0.25)));
    assert!(approx(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 0.75)));
    assert!(approx(t.apply(Vec2::new(0.5, 0.5)), Vec2::new(0.5, 0.5)));
}

#[test]
fn tall_viewport_crops_horizontally() {
    let t = cover_transform(Vec2::new(400.0, 800.0), Vec2::new(1600.0, 900.0));
    let lo = t.apply(Vec2::ZERO);
    let hi = t.apply(Vec2::ONE);
    // full height used, width cropped symmetrically
    assert!((lo.y - 0.0).abs() < 1e-5 && (hi.y - 1.0).abs() < 1e-5);
    assert!(lo.x > 0.0 && hi.x < 1.0);
    assert!(((lo.x + hi.x) * 0.5 - 0.5).abs() < 1e-5);
}

#[test]
fn matching_aspect_is_identity() {
    let t = cover_transform(Vec2::new(800.0, 600.0), Vec2::new(4000.0, 3000.0));
    assert!(approx(t.scale, Vec2::ONE));
    assert!(approx(t.bias, Vec2::ZERO));
}

#[test]
fn cover_always_fills_viewport() {
    let sizes = [
        Vec2::new(1.0, 1.0),
        Vec2::new(8000.0, 2000.0),
        Vec2::new(300.0, 1200.0),
        Vec2::new(1920.0, 1080.0),
    ];
    let resolutions = [
        Vec2::new(1920.0, 1080.0),
        Vec2::new(390.0, 844.0),
        Vec2::new(1.0, 1.0),
    ];
    for size in sizes {
        for res in resolutions {
            let t = cover_transform(res, size);
            let lo = t.apply(Vec2::ZERO);
            let hi = t.apply(Vec2::ONE);
            assert!(lo.x >= -1e-5 && lo.y >= -1e-5, "{:?} {:?} -> {:?}", res, size, lo);
            assert!(hi.x <= 1.0 + 1e-5 && hi.y <= 1.0 + 1e-5, "{:?} {:?} -> {:?}", res, size, hi);
            // at least one axis spans the whole image
            let span = hi - lo;
            assert!((span.max_element() - 1.0).abs() < 1e-4);
        }
    }
}

#[test]
fn cover_is_scale_invariant() {
    let cases = [
        (Vec2::new(1280.0, 720.0), Vec2::new(3000.0, 2000.0)),
        (Vec2::new(390.0, 844.0), Vec2::new(1024.0, 4096.0)),
        (Vec2::new(1000.0, 1000.0), Vec2::new(640.0, 480.0)),
    ];
    for (res, size) in cases {
        let a = cover_transform(res, size);
        let b = cover_transform(res * 2.0, size * 2.0);
        for uv in [Vec2::ZERO, Vec2::ONE, Vec2::new(0.25, 0.8)] {
            assert!(approx(a.apply(uv), b.apply(uv)));
        }
    }
}

#[test]
fn mask_edges_shrink_with_pixel_ratio() {
    let params = DisplayParams::default();
    let e1 = mask_edges(&params, 1.0);
    let e2 = mask_edges(&params, 2.0);
    assert_eq!(e1[0], 0.02);
    assert!((e1[1] - 0.024).abs() < 1e-7);
    assert!((e2[1] - 0.022).abs() < 1e-7);
    // nonsense ratio falls back to 1
    assert_eq!(mask_edges(&params, 0.0), e1);
}

#[test]
fn blend_factor_is_a_soft_threshold() {
    let edges = mask_edges(&DisplayParams::default(), 1.0);
    assert_eq!(blend_factor(0.0, edges), 0.0);
    assert_eq!(blend_factor(0.02, edges), 0.0);
    assert!((blend_factor(0.022, edges) - 0.5).abs() < 1e-3);
    assert_eq!(blend_factor(0.03, edges), 1.0);
    assert_eq!(blend_factor(5.0, edges), 1.0);
}

#[test]
fn display_uniforms_pack_both_backgrounds() {
    let viewport = ViewportState {
        width: 1000.0,
        height: 500.0,
        dpr: 2.0,
    };
    let u = DisplayUniforms::new(
        &viewport,
        &DisplayParams::default(),
        Vec2::new(1000.0, 1000.0),
        Vec2::new(0.0, 0.0),
    );
    assert!((u.top_uv[1] - 0.5).abs() < 1e-6); // y scale
    assert!((u.top_uv[3] - 0.25).abs() < 1e-6); // y bias
    assert_eq!(u.bottom_uv, [1.0, 1.0, 0.0, 0.0]);
    assert!((u.edges[1] - 0.022).abs() < 1e-7);
    assert_eq!(std::mem::size_of::<DisplayUniforms>(), 48);
}

#[test]
fn backing_size_caps_but_does_not_floor_pixel_ratio() {
    let at = |dpr: f32| {
        ViewportState {
            width: 800.0,
            height: 600.0,
            dpr,
        }
        .backing_size()
    };
    assert_eq!(at(1.0), (800, 600));
    assert_eq!(at(3.0), (1600, 1200));
    // Zoomed-out page
    assert_eq!(at(0.5), (400, 300));
    assert_eq!(
        ViewportState {
            width: 0.5,
            height: 0.5,
            dpr: 1.0
        }
        .backing_size(),
        (1, 1)
    );
}
