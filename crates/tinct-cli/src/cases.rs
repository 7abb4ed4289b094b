//! Reference cases: expected host output checked against the transform.
//!
//! Cases are stored as a JSON array. Colorize cases compare RGB bytes exactly
//! (alpha too, since it must pass through); delta cases compare each field
//! with the transform's own tolerance.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tinct_core::{ColorizeMode, Hls, PixelDiff, Rgba, colorize, derive_deltas};

use crate::error::CliError;

/// One expected host result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReferenceCase {
    Colorize {
        name: String,
        color: Rgba,
        delta: Hls,
        #[serde(default)]
        mode: ColorizeMode,
        expected: Rgba,
    },
    Deltas {
        name: String,
        from: Rgba,
        to: Rgba,
        #[serde(default)]
        mode: ColorizeMode,
        expected: Hls,
    },
}

/// Result of running a single case.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass,
    ColorMismatch(PixelDiff),
    DeltaMismatch { actual: Hls, expected: Hls },
}

impl ReferenceCase {
    pub fn name(&self) -> &str {
        match self {
            Self::Colorize { name, .. } | Self::Deltas { name, .. } => name,
        }
    }

    pub fn run(&self) -> Outcome {
        match self {
            Self::Colorize {
                color,
                delta,
                mode,
                expected,
                ..
            } => {
                let actual = colorize(*color, *delta, mode.is_shift());
                match PixelDiff::between(*expected, actual) {
                    Some(diff) => Outcome::ColorMismatch(diff),
                    None => Outcome::Pass,
                }
            }
            Self::Deltas {
                from,
                to,
                mode,
                expected,
                ..
            } => {
                let actual = derive_deltas(*from, *to, mode.is_shift());
                if actual.approx_eq(expected) {
                    Outcome::Pass
                } else {
                    Outcome::DeltaMismatch {
                        actual,
                        expected: *expected,
                    }
                }
            }
        }
    }
}

/// Cases taken from the host's published reference values.
pub fn builtin_cases() -> Vec<ReferenceCase> {
    let reference_delta = Hls::new(92.58741048890613, 0.13725490868091583, -0.11229892646129502);
    vec![
        ReferenceCase::Colorize {
            name: "shifted texel".to_string(),
            color: Rgba::new(115, 137, 98, 128),
            delta: reference_delta,
            mode: ColorizeMode::Shift,
            expected: Rgba::new(147, 156, 158, 128),
        },
        ReferenceCase::Deltas {
            name: "shift deltas from average color".to_string(),
            from: Rgba::new(105, 137, 98, 255),
            to: Rgba::new(147, 154, 158, 255),
            mode: ColorizeMode::Shift,
            expected: reference_delta,
        },
        ReferenceCase::Deltas {
            name: "monochrome target".to_string(),
            from: Rgba::new(105, 137, 98, 255),
            to: Rgba::gray(128, 255),
            mode: ColorizeMode::Shift,
            expected: Hls::new(0.0, 0.041176483035087585, Hls::SATURATION_MONOCHROME),
        },
    ]
}

pub fn load_cases(path: &Path) -> Result<Vec<ReferenceCase>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Run every case, logging mismatches. Fails if any case mismatched.
pub fn verify(cases: &[ReferenceCase]) -> Result<(), CliError> {
    let mut failed = 0;
    for case in cases {
        match case.run() {
            Outcome::Pass => tracing::info!(case = case.name(), "match"),
            Outcome::ColorMismatch(diff) => {
                failed += 1;
                tracing::error!(
                    case = case.name(),
                    %diff,
                    max_delta = diff.max_rgb_delta(),
                    "color mismatch"
                );
            }
            Outcome::DeltaMismatch { actual, expected } => {
                failed += 1;
                tracing::error!(case = case.name(), ?actual, ?expected, "delta mismatch");
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Mismatch {
            failed,
            total: cases.len(),
        });
    }
    Ok(())
}
