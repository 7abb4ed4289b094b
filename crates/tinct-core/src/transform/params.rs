//! Colorize settings of a material.
//!
//! `ColorizeParams` is what the host stores on a colorized textured material:
//! the HLS deltas plus whether the hue shifts or is replaced. It serializes to
//! JSON so settings can be exchanged with tooling that reads the host's data.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::convert::hls::Hls;
use crate::transform::colorize::colorize;
use crate::transform::deltas::derive_deltas;

/// How the delta hue is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorizeMode {
    /// Delta hue rotates the source hue.
    #[default]
    Shift,
    /// Delta hue replaces the source hue.
    Clamp,
}

impl ColorizeMode {
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Shift)
    }

    /// Human-readable label for status text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Clamp => "clamp",
        }
    }
}

impl From<bool> for ColorizeMode {
    fn from(shift: bool) -> Self {
        if shift { Self::Shift } else { Self::Clamp }
    }
}

impl From<ColorizeMode> for bool {
    fn from(mode: ColorizeMode) -> Self {
        mode.is_shift()
    }
}

/// Deltas and mode of a colorized material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorizeParams {
    pub deltas: Hls,
    #[serde(default)]
    pub mode: ColorizeMode,
}

impl ColorizeParams {
    pub const fn new(deltas: Hls, mode: ColorizeMode) -> Self {
        Self { deltas, mode }
    }

    /// Derive the params a material gets when its texture averages to
    /// `average` and the user picks `target` as the material color.
    pub fn from_average_color(average: Rgba, target: Rgba, mode: ColorizeMode) -> Self {
        Self::new(derive_deltas(average, target, mode.is_shift()), mode)
    }

    /// Colorize one texel.
    pub fn apply(&self, color: Rgba) -> Rgba {
        colorize(color, self.deltas, self.mode.is_shift())
    }
}
