//! Curve argument for `map_curved`.
//!
//! A curve reshapes the normalized input `t` before it is rescaled to the output range.
//! It is either a power `t^e`, an arbitrary function, or `Invalid`, which makes
//! `map_curved` hand back its input untouched.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Shape applied to the normalized input of `map_curved`.
#[derive(Clone, Copy)]
pub enum Curve<'a> {
    /// Polynomial map `t ↦ t^e`. `Exponent(1.0)` is the linear map.
    Exponent(f64),
    /// Caller-supplied map `t ↦ f(t)`.
    Function(&'a dyn Fn(f64) -> f64),
    /// Unusable curve argument; `map_curved` returns `val` unchanged.
    Invalid,
}

impl<'a> Curve<'a> {
    /// Reshaped value of `t`, or `None` for `Invalid`.
    #[inline]
    pub fn apply(&self, t: f64) -> Option<f64> {
        match *self {
            Curve::Exponent(e) => Some(t.powf(e)),
            Curve::Function(f) => Some(f(t)),
            Curve::Invalid => None,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Curve::Invalid)
    }
}

impl Curve<'static> {
    /// Look up a stock easing curve by name (see `Curve::names`).
    pub fn named(name: &str) -> Option<Self> {
        CATALOGUE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| Curve::Function(f))
    }

    /// Names accepted by `Curve::named`.
    pub fn names() -> impl Iterator<Item = &'static str> {
        CATALOGUE.iter().map(|(n, _)| *n)
    }

    /// Parse user text: a number becomes an exponent, a catalogue name a function,
    /// anything else `Invalid`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Ok(e) = text.parse::<f64>() {
            return Curve::Exponent(e);
        }
        Self::named(text).unwrap_or(Curve::Invalid)
    }
}

impl From<f64> for Curve<'_> {
    fn from(e: f64) -> Self {
        Curve::Exponent(e)
    }
}

impl fmt::Debug for Curve<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Exponent(e) => f.debug_tuple("Exponent").field(e).finish(),
            Curve::Function(_) => f.write_str("Function(..)"),
            Curve::Invalid => f.write_str("Invalid"),
        }
    }
}

static CATALOGUE: [(&str, fn(f64) -> f64); 6] = [
    ("linear", linear),
    ("smoothstep", smoothstep),
    ("smootherstep", smootherstep),
    ("sqrt", sqrt),
    ("ease-in-sine", ease_in_sine),
    ("ease-out-sine", ease_out_sine),
];

fn linear(t: f64) -> f64 {
    t
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn smootherstep(t: f64) -> f64 {
    t * t * t * (t * (6.0 * t - 15.0) + 10.0)
}

fn sqrt(t: f64) -> f64 {
    t.sqrt()
}

fn ease_in_sine(t: f64) -> f64 {
    1.0 - (t * FRAC_PI_2).cos()
}

fn ease_out_sine(t: f64) -> f64 {
    (t * FRAC_PI_2).sin()
}
