//! Truncation toward zero and base-10 logarithm.

use std::f64::consts::LN_10;

use crate::cfg::DECIMAL_BASE;

#[inline]
fn toward_zero(x: f64) -> f64 {
    if x >= 0.0 {
        x.floor()
    } else {
        x.ceil()
    }
}

/// Round toward zero, optionally keeping `decimals` decimal places.
///
/// `None` and `Some(0)` behave identically: both truncate to an integer. Negative
/// `decimals` truncate to tens, hundreds, and so on (`truncate(1234.0, Some(-2)) == 1200`).
///
/// The result is computed as `trunc(x·10^d) / 10^d`, so it carries the usual binary
/// representation error of the rescale (e.g. `truncate(3.14159, Some(2))` is the `f64`
/// nearest to 3.14).
pub fn truncate(x: f64, decimals: Option<i32>) -> f64 {
    match decimals {
        Some(d) if d != 0 => {
            let scale = DECIMAL_BASE.powi(d);
            toward_zero(x * scale) / scale
        }
        _ => toward_zero(x),
    }
}

/// Base-10 logarithm as `ln(x) / ln(10)`.
///
/// Computed as a quotient rather than via `f64::log10`, so `log10(1000.0)` is
/// `2.9999999999999996`, not `3.0`. Zero gives `-inf`, negatives NaN.
#[inline]
pub fn log10(x: f64) -> f64 {
    x.ln() / LN_10
}
