//! Core scalar helpers: angles, truncation, log10, range maps.
//!
//! Every function here is a closed-form expression over `f64` and follows IEEE semantics
//! for NaN, infinities, and division by zero. Nothing is clamped or validated unless the
//! caller opts into a `checked_*` variant.

mod angle;
mod curve;
mod maps;
mod round;

pub use angle::{deg_to_rad, rad_to_deg};
pub use curve::Curve;
pub use maps::{checked_map, checked_map_curved, map, map_curved, MapError};
pub use round::{log10, truncate};
