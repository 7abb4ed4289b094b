//! Error type shared by the fallible colorize entry points.

/// Errors produced by color parsing and checked HLS conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorizeError {
    /// Saturation is zero but the hue is not the undefined sentinel.
    #[error("achromatic HLS value has a defined hue ({h}); expected -1")]
    AchromaticWithHue { h: f64 },

    #[error("invalid color: {0}")]
    InvalidColor(String),
}
