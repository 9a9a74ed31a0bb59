//! Small math helpers for procedural generation.
//!
//! Layout
//! - `scalar`: angle conversion, truncation toward zero, log10, linear and curved range maps.
//! - `random`: random sign and exponent-weighted range sampling, with replayable seeding.
//! - `util`: frequency tables over sequences.
//!
//! Numeric policy
//! - The plain functions never panic and never return `Result`. Invalid input degrades to
//!   IEEE sentinels (NaN, ±inf) or, for `map_curved` with `Curve::Invalid`, to the input value.
//! - `checked_*` variants surface the same conditions as `MapError` for callers who want them.

mod cfg;
pub mod random;
pub mod scalar;
pub mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use random::{random_range, random_sign, RangeCfg, ReplayToken, Sampler};
pub use scalar::{
    checked_map, checked_map_curved, deg_to_rad, log10, map, map_curved, rad_to_deg, truncate,
    Curve, MapError,
};
pub use util::{distinct_map, distinct_map_by_string};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::random::{
        random_range, random_range_with, random_sign, random_sign_with, RangeCfg, ReplayToken,
        Sampler,
    };
    pub use crate::scalar::{
        checked_map, checked_map_curved, deg_to_rad, log10, map, map_curved, rad_to_deg,
        truncate, Curve, MapError,
    };
    pub use crate::util::{distinct_map, distinct_map_by_string};
}
