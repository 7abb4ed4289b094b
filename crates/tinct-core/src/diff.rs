//! Per-color comparison against reference output.
//!
//! Used to report how far a computed color lands from the host's color.
//! Deviance is the mean absolute channel difference over all four channels:
//!
//! ```text
//! deviance = (|Δr| + |Δg| + |Δb| + |Δa|) / (4 × 255)
//! ```

use std::fmt;

use serde::Serialize;

use crate::color::Rgba;

/// Difference between an expected and an actual color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelDiff {
    pub expected: Rgba,
    pub actual: Rgba,
    /// Absolute per-channel difference.
    pub delta: Rgba,
    /// Mean channel difference in `[0, 1]`.
    pub deviance: f64,
}

impl PixelDiff {
    /// Compare two colors. Returns `None` when they are identical.
    pub fn between(expected: Rgba, actual: Rgba) -> Option<Self> {
        if expected == actual {
            return None;
        }
        let delta = Rgba::new(
            expected.r.abs_diff(actual.r),
            expected.g.abs_diff(actual.g),
            expected.b.abs_diff(actual.b),
            expected.a.abs_diff(actual.a),
        );
        Some(Self {
            expected,
            actual,
            delta,
            deviance: deviance(delta),
        })
    }

    /// Largest single-channel difference, ignoring alpha.
    pub fn max_rgb_delta(&self) -> u8 {
        self.delta.r.max(self.delta.g).max(self.delta.b)
    }
}

impl fmt::Display for PixelDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <=> {} = {} ({:.2}%)",
            self.expected,
            self.actual,
            self.delta,
            self.deviance * 100.0
        )
    }
}

fn deviance(delta: Rgba) -> f64 {
    let sum = u32::from(delta.r) + u32::from(delta.g) + u32::from(delta.b) + u32::from(delta.a);
    f64::from(sum) / (4.0 * 255.0)
}
