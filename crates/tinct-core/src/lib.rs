//! Tinct Core — host-compatible material colorization.
//!
//! Reproduces the colorize transform a 3D-modeling host applies to textured
//! materials: a base color plus HLS deltas gives a new color, and a base color
//! plus a target color gives the deltas. Outputs match the host byte for byte,
//! including its tolerant float comparisons and truncating byte conversion.
//!
//! Everything here is a pure function over value types.

pub mod color;
pub mod convert;
pub mod diff;
pub mod error;
pub mod tolerance;
pub mod transform;

// Re-exports for convenience.
pub use color::Rgba;
pub use convert::hls::{Hls, hls_to_rgb, rgb_to_hls, try_hls_to_rgb};
pub use diff::PixelDiff;
pub use error::ColorizeError;
pub use transform::colorize::colorize;
pub use transform::deltas::derive_deltas;
pub use transform::params::{ColorizeMode, ColorizeParams};
