//! RGB ↔ HLS conversion with the host's tolerant arithmetic.
//!
//! Hue is in degrees, lightness and saturation in `[0, 1]`. Achromatic
//! colors carry the hue sentinel [`Hls::HUE_UNDEFINED`].
//!
//! # Algorithm
//! ```text
//! l = (max + min) / 2
//! s = (max − min) / (max + min)        if l ≤ 0.5
//!     (max − min) / (2 − max − min)    otherwise
//! h = 60 × { (b' − g')       if r = max
//!            (2 + r' − b')   if g = max
//!            (4 + g' − r')   if b = max }     where c' = (max − c) / (max − min)
//! ```
//!
//! Every comparison above is tolerance-based (see [`crate::tolerance`]).

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::convert::bytes::{byte_to_unit, unit_to_byte};
use crate::error::ColorizeError;
use crate::tolerance::{equals, greater_than, less_than, less_than_or_equal};

/// Hue/lightness/saturation triple.
///
/// Used both for absolute colors and for the deltas a colorized material
/// applies. As a delta, `h` is unbounded and `s` may hold
/// [`Hls::SATURATION_MONOCHROME`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hls {
    /// Hue in degrees.
    pub h: f64,
    /// Lightness.
    pub l: f64,
    /// Saturation.
    pub s: f64,
}

impl Hls {
    /// Hue of an achromatic color.
    pub const HUE_UNDEFINED: f64 = -1.0;
    /// Saturation delta that forces a monochrome result.
    pub const SATURATION_MONOCHROME: f64 = -1.0;

    pub const fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }

    /// Achromatic value at lightness `l`.
    pub const fn gray(l: f64) -> Self {
        Self::new(Self::HUE_UNDEFINED, l, 0.0)
    }

    /// Whether the hue is the undefined sentinel.
    pub fn is_achromatic(&self) -> bool {
        equals(self.h, Self::HUE_UNDEFINED)
    }

    /// Field-wise tolerant equality.
    pub fn approx_eq(&self, other: &Self) -> bool {
        equals(self.h, other.h) && equals(self.l, other.l) && equals(self.s, other.s)
    }
}

/// Convert an RGB color to HLS. Alpha is ignored.
///
/// Max and min are picked with tolerant comparisons starting from red, so
/// channels within tolerance of each other keep the first one seen.
pub fn rgb_to_hls(color: Rgba) -> Hls {
    let r = byte_to_unit(color.r);
    let g = byte_to_unit(color.g);
    let b = byte_to_unit(color.b);

    let mut max = r;
    if greater_than(g, max) {
        max = g;
    }
    if greater_than(b, max) {
        max = b;
    }
    let mut min = r;
    if less_than(g, min) {
        min = g;
    }
    if less_than(b, min) {
        min = b;
    }

    let l = (max + min) / 2.0;

    if equals(min, max) {
        return Hls::gray(l);
    }

    let s = if less_than_or_equal(l, 0.5) {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    };

    let delta = max - min;
    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;

    let mut h = if equals(r, max) {
        // between yellow and magenta
        bc - gc
    } else if equals(g, max) {
        // between cyan and yellow
        2.0 + rc - bc
    } else if equals(b, max) {
        // between magenta and cyan
        4.0 + gc - rc
    } else {
        tracing::warn!(%color, max, "no channel matched max; hue falls back to 0");
        0.0
    };

    h *= 60.0;
    if less_than(h, 0.0) {
        h += 360.0;
    }

    Hls { h, l, s }
}

/// Convert HLS to an opaque RGB color.
///
/// # Panics
/// Panics when `s` is zero but `h` is not [`Hls::HUE_UNDEFINED`]. That input
/// is a caller bug; use [`try_hls_to_rgb`] to get it as an error instead.
pub fn hls_to_rgb(hls: Hls) -> Rgba {
    match try_hls_to_rgb(hls) {
        Ok(color) => color,
        Err(err) => panic!("{err}"),
    }
}

/// Convert HLS to an opaque RGB color, rejecting achromatic values that
/// carry a hue.
pub fn try_hls_to_rgb(hls: Hls) -> Result<Rgba, ColorizeError> {
    let Hls { h, l, s } = hls;

    let m2 = if less_than(l, 0.5) {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let m1 = 2.0 * l - m2;

    let (r, g, b) = if equals(s, 0.0) {
        if !equals(h, Hls::HUE_UNDEFINED) {
            return Err(ColorizeError::AchromaticWithHue { h });
        }
        (l, l, l)
    } else {
        (
            hue_to_channel(m1, m2, h + 120.0),
            hue_to_channel(m1, m2, h),
            hue_to_channel(m1, m2, h - 120.0),
        )
    };

    Ok(Rgba::rgb(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b)))
}

/// Opaque gray whose channels are all the byte value of `lightness`.
pub fn lightness_to_rgb(lightness: f64) -> Rgba {
    Rgba::gray(unit_to_byte(lightness), 255)
}

/// Piecewise-linear channel value for a hue offset.
///
/// Hue gets a single ±360 correction, not a modulo: callers pass at most
/// one revolution out of range.
fn hue_to_channel(n1: f64, n2: f64, mut hue: f64) -> f64 {
    if greater_than(hue, 360.0) {
        hue -= 360.0;
    }
    if less_than(hue, 0.0) {
        hue += 360.0;
    }

    if less_than(hue, 60.0) {
        n1 + (n2 - n1) * hue / 60.0
    } else if less_than(hue, 180.0) {
        n2
    } else if less_than(hue, 240.0) {
        n1 + (n2 - n1) * (240.0 - hue) / 60.0
    } else {
        n1
    }
}
