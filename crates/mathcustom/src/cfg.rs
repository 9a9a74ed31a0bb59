//! Fixed constants shared across modules (internal).
//!
//! Policy
//! - Values are part of the numeric contract of the helpers; they are not tunable.

/// Degrees in a half turn; pairs with `PI` for angle conversion.
pub(crate) const HALF_TURN_DEG: f64 = 180.0;
/// Uniform draws strictly below this value produce a negative sign.
pub(crate) const SIGN_THRESHOLD: f64 = 0.5;
/// Base of the decimal scaling used by `truncate`.
pub(crate) const DECIMAL_BASE: f64 = 10.0;
