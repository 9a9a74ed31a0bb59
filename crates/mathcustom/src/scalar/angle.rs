use std::f64::consts::PI;

use crate::cfg::HALF_TURN_DEG;

/// Degrees to radians: `x·π/180`.
#[inline]
pub fn deg_to_rad(x: f64) -> f64 {
    x * PI / HALF_TURN_DEG
}

/// Radians to degrees: `180·x/π`.
#[inline]
pub fn rad_to_deg(x: f64) -> f64 {
    HALF_TURN_DEG * x / PI
}
