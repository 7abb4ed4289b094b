//! The forward colorize transform, its inverse, and material parameters.

pub mod colorize;
pub mod deltas;
pub mod params;
