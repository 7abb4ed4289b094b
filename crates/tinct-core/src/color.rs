//! 8-bit RGBA color as stored and exchanged by the host application.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::ColorizeError;

/// An RGBA color with one byte per channel.
///
/// Alpha never takes part in the HLS math; every transform copies it through.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "Rgba::opaque_alpha")]
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Gray with all three color channels set to `value`.
    pub const fn gray(value: u8, a: u8) -> Self {
        Self::new(value, value, value, a)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Exact byte equality of the three color channels.
    ///
    /// This is deliberately not tolerance-based: a color one byte away from
    /// gray is chromatic here even though its HLS saturation may round to zero.
    pub const fn is_monochrome(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    fn opaque_alpha() -> u8 {
        255
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        bytemuck::cast(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        bytemuck::cast(color)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<palette::Srgba<u8>> for Rgba {
    fn from(color: palette::Srgba<u8>) -> Self {
        Self::new(color.color.red, color.color.green, color.color.blue, color.alpha)
    }
}

impl From<Rgba> for palette::Srgba<u8> {
    fn from(color: Rgba) -> Self {
        palette::Srgba::new(color.r, color.g, color.b, color.a)
    }
}

/// Parses `"r,g,b"`, `"r,g,b,a"`, `"#rrggbb"` or `"#rrggbbaa"`.
///
/// Alpha defaults to 255 when omitted.
impl FromStr for Rgba {
    type Err = ColorizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorizeError::InvalidColor(s.to_string()));
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorizeError::InvalidColor(format!(
                "expected r,g,b or r,g,b,a, got: {s}"
            )));
        }

        let mut channels = [255_u8; 4];
        for (channel, part) in channels.iter_mut().zip(&parts) {
            *channel = part.parse::<u8>().map_err(|_| {
                ColorizeError::InvalidColor(format!("channel {part:?} is not a byte in {s}"))
            })?;
        }
        Ok(Self::from(channels))
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, alpha))
}
