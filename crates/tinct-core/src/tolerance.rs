//! Tolerance-based float comparisons.
//!
//! Every comparison in the colorize math goes through these helpers instead of
//! IEEE operators. Two values closer than [`EQUAL_TOL`] are always equal and
//! never strictly ordered, so `less_than` and `greater_than` are not the
//! complements of `equals`:
//!
//! ```text
//!   less_than(a, b)    ⇔  a − b ≤ −EQUAL_TOL
//!   greater_than(a, b) ⇔  a − b ≥  EQUAL_TOL
//!   equals(a, b)       ⇔ |a − b| <  EQUAL_TOL
//! ```
//!
//! The host computed its reference values in a different precision and order,
//! so the tolerance is fixed and must not be tuned.

/// Absolute comparison tolerance.
pub const EQUAL_TOL: f64 = 1.0e-3;

#[inline]
pub fn less_than(a: f64, b: f64) -> bool {
    (a - b) <= -EQUAL_TOL
}

#[inline]
pub fn greater_than(a: f64, b: f64) -> bool {
    (a - b) >= EQUAL_TOL
}

#[inline]
pub fn equals(a: f64, b: f64) -> bool {
    (a - b).abs() < EQUAL_TOL
}

#[inline]
pub fn less_than_or_equal(a: f64, b: f64) -> bool {
    less_than(a, b) || equals(a, b)
}

/// Clamp with plain comparisons.
///
/// Unlike `f64::clamp` this never panics on `min > max` and passes NaN through.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
