//! Inverse colorize: the delta that turns one color into another.
//!
//! The case split mirrors [`colorize`](super::colorize::colorize):
//!
//! | `from`     | `to`       | h                    | l       | s          |
//! |------------|------------|----------------------|---------|------------|
//! | monochrome | monochrome | 0                    | Δl      | 0          |
//! | chromatic  | monochrome | 0                    | Δl      | −1 (force) |
//! | monochrome | chromatic  | `to.h` (absolute)    | Δl      | `to.s`     |
//! | chromatic  | chromatic  | Δh (shift) / `to.h`  | Δl      | Δs         |
//!
//! A gray base has no hue or saturation to take a difference from, so that
//! row carries the target's absolute values.

use crate::color::Rgba;
use crate::convert::hls::{Hls, rgb_to_hls};

/// Which row of the case table a pair of colors falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaCase {
    BothMonochrome,
    TargetMonochrome,
    BaseMonochrome,
    Chromatic,
}

impl DeltaCase {
    pub fn classify(from: &Rgba, to: &Rgba) -> Self {
        match (from.is_monochrome(), to.is_monochrome()) {
            (true, true) => Self::BothMonochrome,
            (false, true) => Self::TargetMonochrome,
            (true, false) => Self::BaseMonochrome,
            (false, false) => Self::Chromatic,
        }
    }
}

/// Compute the delta that [`colorize`](super::colorize::colorize) needs to
/// turn `from` into `to`.
///
/// With `shift` false the hue is the target's absolute hue, matching the
/// clamp mode of the forward transform.
pub fn derive_deltas(from: Rgba, to: Rgba, shift: bool) -> Hls {
    let base = rgb_to_hls(from);
    let target = rgb_to_hls(to);
    let l = target.l - base.l;

    let case = DeltaCase::classify(&from, &to);
    tracing::trace!(%from, %to, shift, ?case, "deriving colorize deltas");

    match case {
        DeltaCase::BothMonochrome => Hls::new(0.0, l, 0.0),
        DeltaCase::TargetMonochrome => Hls::new(0.0, l, Hls::SATURATION_MONOCHROME),
        DeltaCase::BaseMonochrome => Hls::new(target.h, l, target.s),
        DeltaCase::Chromatic => {
            let h = if shift { target.h - base.h } else { target.h };
            Hls::new(h, l, target.s - base.s)
        }
    }
}
