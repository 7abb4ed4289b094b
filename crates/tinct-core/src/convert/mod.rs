//! Conversions between 8-bit RGB and the host's HLS model.

pub mod bytes;
pub mod hls;

pub use bytes::{byte_to_unit, unit_to_byte};
pub use hls::{Hls, hls_to_rgb, lightness_to_rgb, rgb_to_hls, try_hls_to_rgb};
