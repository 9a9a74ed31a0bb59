//! Linear and curved range maps (Arduino-style `map`).
//!
//! Both maps extrapolate freely outside `[in_min, in_max]`. A collapsed input range
//! divides by zero and yields ±inf or NaN; `checked_map`/`checked_map_curved` report it
//! as `MapError::DegenerateRange` instead.

use std::fmt;

use super::curve::Curve;

/// Linearly map `val` from `[in_min, in_max]` to `[out_min, out_max]`.
#[inline]
pub fn map(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (val - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Map `val` through `curve`: normalize to `t`, reshape, then rescale to the output range.
///
/// Fallback
/// - `Curve::Invalid` returns `val` unchanged. Callers that prefer an error should use
///   `checked_map_curved`.
pub fn map_curved(
    val: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    curve: Curve<'_>,
) -> f64 {
    let t = (val - in_min) / (in_max - in_min);
    match curve.apply(t) {
        Some(shaped) => shaped * (out_max - out_min) + out_min,
        None => val,
    }
}

/// Why a checked map refused its input.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// `in_min == in_max`, so the input range cannot be normalized.
    DegenerateRange { bound: f64 },
    /// An argument was NaN or infinite.
    NonFinite { arg: &'static str, value: f64 },
    /// `map_curved` was given `Curve::Invalid`.
    InvalidCurve,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRange { bound } => {
                write!(f, "degenerate input range: in_min == in_max == {bound}")
            }
            Self::NonFinite { arg, value } => write!(f, "non-finite {arg}: {value}"),
            Self::InvalidCurve => write!(f, "invalid curve argument"),
        }
    }
}

impl std::error::Error for MapError {}

fn check_args(
    val: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> Result<(), MapError> {
    let args = [
        ("val", val),
        ("in_min", in_min),
        ("in_max", in_max),
        ("out_min", out_min),
        ("out_max", out_max),
    ];
    if let Some(&(arg, value)) = args.iter().find(|(_, v)| !v.is_finite()) {
        return Err(MapError::NonFinite { arg, value });
    }
    if in_min == in_max {
        return Err(MapError::DegenerateRange { bound: in_min });
    }
    Ok(())
}

/// `map` with finite-input and non-degenerate-range checks.
pub fn checked_map(
    val: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> Result<f64, MapError> {
    check_args(val, in_min, in_max, out_min, out_max)?;
    Ok(map(val, in_min, in_max, out_min, out_max))
}

/// `map_curved` with the checks of `checked_map`; `Curve::Invalid` is an error here.
pub fn checked_map_curved(
    val: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    curve: Curve<'_>,
) -> Result<f64, MapError> {
    if !curve.is_valid() {
        return Err(MapError::InvalidCurve);
    }
    check_args(val, in_min, in_max, out_min, out_max)?;
    Ok(map_curved(val, in_min, in_max, out_min, out_max, curve))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_midpoint_and_endpoints() {
        assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map(0.0, 0.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(map(10.0, 0.0, 10.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn linear_extrapolates_and_inverts() {
        assert_eq!(map(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
        assert_eq!(map(-5.0, 0.0, 10.0, 0.0, 100.0), -50.0);
        assert_eq!(map(2.0, 0.0, 10.0, 100.0, 0.0), 80.0);
    }

    #[test]
    fn linear_degenerate_range_is_ieee() {
        assert_eq!(map(5.0, 3.0, 3.0, 0.0, 1.0), f64::INFINITY);
        assert!(map(3.0, 3.0, 3.0, 0.0, 1.0).is_nan());
    }

    #[test]
    fn curved_exponent_one_is_linear() {
        let lin = map(5.0, 0.0, 10.0, 0.0, 100.0);
        assert_eq!(map_curved(5.0, 0.0, 10.0, 0.0, 100.0, Curve::Exponent(1.0)), lin);
    }

    #[test]
    fn curved_exponent_and_function() {
        assert!((map_curved(5.0, 0.0, 10.0, 0.0, 100.0, Curve::from(2.0)) - 25.0).abs() < 1e-12);
        let flip = |t: f64| 1.0 - t;
        let v = map_curved(2.0, 0.0, 10.0, 0.0, 100.0, Curve::Function(&flip));
        assert!((v - 80.0).abs() < 1e-12);
    }

    #[test]
    fn curved_invalid_returns_input() {
        for val in [-3.0, 0.0, 5.0, 42.0] {
            assert_eq!(map_curved(val, 0.0, 10.0, 0.0, 100.0, Curve::Invalid), val);
        }
        assert_eq!(map_curved(7.0, 0.0, 10.0, 0.0, 100.0, Curve::parse("bogus")), 7.0);
    }

    #[test]
    fn curved_does_not_clamp() {
        // t = 2, t^2 = 4
        assert!((map_curved(20.0, 0.0, 10.0, 0.0, 1.0, Curve::Exponent(2.0)) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn checked_reports_errors() {
        assert_eq!(checked_map(5.0, 0.0, 10.0, 0.0, 100.0), Ok(50.0));
        assert_eq!(
            checked_map(5.0, 2.0, 2.0, 0.0, 1.0),
            Err(MapError::DegenerateRange { bound: 2.0 })
        );
        assert!(matches!(
            checked_map(f64::NAN, 0.0, 1.0, 0.0, 1.0),
            Err(MapError::NonFinite { arg: "val", .. })
        ));
        assert_eq!(
            checked_map_curved(5.0, 0.0, 10.0, 0.0, 100.0, Curve::Invalid),
            Err(MapError::InvalidCurve)
        );
        assert_eq!(
            checked_map_curved(5.0, 0.0, 10.0, 0.0, 100.0, Curve::Exponent(1.0)),
            Ok(50.0)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(MapError::InvalidCurve.to_string(), "invalid curve argument");
        let e = MapError::NonFinite {
            arg: "out_max",
            value: f64::INFINITY,
        };
        assert_eq!(e.to_string(), "non-finite out_max: inf");
    }
}
