//! Forward colorize: apply an HLS delta to a base color.
//!
//! # Formula
//! ```text
//!   h = base.h + delta.h      (shift)
//!   h = delta.h               (clamp)
//!   h → [0, 360) by repeated ±360
//!   s = clamp(base.s + delta.s, 0, 1)
//!   l = clamp(base.l + delta.l, 0.01, 1)
//!
//!   out = gray(l)             if s = 0
//!         hls_to_rgb(h, l, s) otherwise
//!   out.a = color.a
//! ```
//!
//! The lightness floor is 0.01, so this path never yields black from
//! clamping alone; the floor's byte value is 2.

use crate::color::Rgba;
use crate::convert::hls::{Hls, hls_to_rgb, lightness_to_rgb, rgb_to_hls};
use crate::tolerance::{clamp, equals, greater_than, less_than};

/// Lowest lightness the forward transform produces.
pub const LIGHTNESS_FLOOR: f64 = 0.01;

/// Largest hue magnitude wrapped by stepping alone.
pub const HUE_STEP_LIMIT: f64 = 360.0 * 4096.0;

/// Apply `delta` to `color`.
///
/// With `shift` the delta hue rotates the source hue; without it the delta hue
/// replaces it. Alpha is copied from `color` unchanged.
pub fn colorize(color: Rgba, delta: Hls, shift: bool) -> Rgba {
    let base = rgb_to_hls(color);

    let h = normalize_hue(if shift { base.h + delta.h } else { delta.h });
    let s = clamp(base.s + delta.s, 0.0, 1.0);
    let l = clamp(base.l + delta.l, LIGHTNESS_FLOOR, 1.0);

    let rgb = if equals(s, 0.0) {
        lightness_to_rgb(l)
    } else {
        hls_to_rgb(Hls { h, l, s })
    };

    rgb.with_alpha(color.a)
}

/// Wrap a hue into `[0, 360)` by repeated ±360 steps.
///
/// Values within tolerance of 0 or 360 are left alone. Non-finite hues are
/// returned as-is. Hues larger in magnitude than [`HUE_STEP_LIMIT`] are
/// reduced with `rem_euclid` first; past 2^53 a ±360 step is a no-op.
pub fn normalize_hue(mut hue: f64) -> f64 {
    if !hue.is_finite() {
        return hue;
    }
    if hue.abs() > HUE_STEP_LIMIT {
        hue = hue.rem_euclid(360.0);
    }
    while less_than(hue, 0.0) {
        hue += 360.0;
    }
    while greater_than(hue, 360.0) {
        hue -= 360.0;
    }
    hue
}
