//! Byte ↔ unit-interval conversions.
//!
//! The two directions round differently and must stay that way:
//!
//! ```text
//! byte → unit:  (byte as f32 / 255) widened to f64
//! unit → byte:  v ≤ 0 → 0,  v ≥ 1 → 255,  otherwise ⌊v × 255⌋
//! ```
//!
//! Rounding to nearest instead of truncating shifts tie cases by one byte.

/// Convert a channel byte to `[0, 1]`.
///
/// The division happens in single precision, as the host does it. Reference
/// deltas are only reproduced exactly with this widening.
#[inline]
pub fn byte_to_unit(value: u8) -> f64 {
    f64::from(f32::from(value) / 255.0)
}

/// Convert a `[0, 1]` value to a channel byte, truncating toward zero.
#[inline]
pub fn unit_to_byte(value: f64) -> u8 {
    if value <= 0.0 {
        0
    } else if value >= 1.0 {
        255
    } else {
        (value * 255.0) as u8
    }
}
