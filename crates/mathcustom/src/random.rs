//! Random sign and exponent-weighted range sampling.
//!
//! Model
//! - Every draw starts from one uniform `u ∈ [0, 1)` (`Rng::gen::<f64>()`).
//! - The plain functions use `rand::thread_rng()`, so they are safe to call from any
//!   thread without sharing state. The `_with` variants take a caller generator for
//!   seeded or per-task use.
//! - `Sampler` bundles a seeded `StdRng`; a `ReplayToken (seed, index)` reproduces the
//!   exact stream of draws, e.g. one stream per generated tile or level.
//!
//! Exponent weighting
//! - `random_range(min, max, Some(e))` returns `u^e·(max − min) + min`. `e > 1` clusters
//!   samples near `min`, `0 < e < 1` near `max`.
//! - `Some(0.0)` and `Some(NaN)` count as "no exponent", so they
//!   sample uniformly rather than collapsing every draw to `max`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::SIGN_THRESHOLD;

/// `-1` or `1` with equal probability, from the thread-local generator.
pub fn random_sign() -> i32 {
    random_sign_with(&mut rand::thread_rng())
}

/// `-1` when a uniform draw falls below one half, else `1`.
#[inline]
pub fn random_sign_with<R: Rng>(rng: &mut R) -> i32 {
    if rng.gen::<f64>() < SIGN_THRESHOLD {
        -1
    } else {
        1
    }
}

/// Sample `[min, max)`, optionally weighted by `exp`, from the thread-local generator.
pub fn random_range(min: f64, max: f64, exp: Option<f64>) -> f64 {
    random_range_with(&mut rand::thread_rng(), min, max, exp)
}

/// Sample `[min, max)` with a caller generator. `min < max` is not checked; swapped
/// bounds sample `(max, min]`.
#[inline]
pub fn random_range_with<R: Rng>(rng: &mut R, min: f64, max: f64, exp: Option<f64>) -> f64 {
    let u = rng.gen::<f64>();
    let w = match effective_exponent(exp) {
        Some(e) => u.powf(e),
        None => u,
    };
    w * (max - min) + min
}

#[inline]
fn effective_exponent(exp: Option<f64>) -> Option<f64> {
    exp.filter(|e| *e != 0.0 && !e.is_nan())
}

/// Range sampling configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeCfg {
    pub min: f64,
    pub max: f64,
    /// Polynomial weighting exponent; `None` (or a falsy value) samples uniformly.
    pub exp: Option<f64>,
}

impl Default for RangeCfg {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            exp: None,
        }
    }
}

impl RangeCfg {
    #[inline]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        random_range_with(rng, self.min, self.max, self.exp)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Seeded source for the random helpers.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_replay(token: ReplayToken) -> Self {
        Self {
            rng: token.to_std_rng(),
        }
    }

    pub fn sign(&mut self) -> i32 {
        random_sign_with(&mut self.rng)
    }

    pub fn range(&mut self, min: f64, max: f64, exp: Option<f64>) -> f64 {
        random_range_with(&mut self.rng, min, max, exp)
    }

    pub fn sample(&mut self, cfg: &RangeCfg) -> f64 {
        cfg.sample(&mut self.rng)
    }

    /// `n` consecutive draws from `cfg`.
    pub fn ranges(&mut self, n: usize, cfg: &RangeCfg) -> Vec<f64> {
        (0..n).map(|_| cfg.sample(&mut self.rng)).collect()
    }

    /// Underlying generator, for callers mixing in their own draws.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIALS: usize = 10_000;

    #[test]
    fn sign_is_balanced() {
        let mut neg = 0usize;
        for _ in 0..TRIALS {
            match random_sign() {
                -1 => neg += 1,
                1 => {}
                other => panic!("unexpected sign {other}"),
            }
        }
        let frac = neg as f64 / TRIALS as f64;
        assert!((frac - 0.5).abs() < 0.05, "negative fraction {frac}");
    }

    #[test]
    fn seeded_sign_is_balanced() {
        let mut s = Sampler::new(7);
        let sum: i64 = (0..TRIALS).map(|_| s.sign() as i64).sum();
        assert!(sum.unsigned_abs() < (TRIALS / 10) as u64, "sum {sum}");
    }

    #[test]
    fn unit_range_is_half_open() {
        for _ in 0..TRIALS {
            let x = random_range(0.0, 1.0, None);
            assert!((0.0..1.0).contains(&x), "{x}");
        }
    }

    #[test]
    fn shifted_range_and_exponent_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..TRIALS {
            let x = random_range_with(&mut rng, -5.0, 5.0, Some(3.0));
            assert!((-5.0..5.0).contains(&x), "{x}");
        }
    }

    #[test]
    fn exponent_biases_samples() {
        let mut s = Sampler::new(11);
        let toward_min: f64 = (0..TRIALS).map(|_| s.range(0.0, 1.0, Some(2.0))).sum::<f64>();
        let toward_max: f64 = (0..TRIALS).map(|_| s.range(0.0, 1.0, Some(0.5))).sum::<f64>();
        assert!(toward_min / (TRIALS as f64) < 0.4);
        assert!(toward_max / (TRIALS as f64) > 0.6);
    }

    #[test]
    fn falsy_exponent_samples_uniformly() {
        for exp in [Some(0.0), Some(f64::NAN)] {
            let mut a = StdRng::seed_from_u64(5);
            let mut b = StdRng::seed_from_u64(5);
            for _ in 0..100 {
                assert_eq!(
                    random_range_with(&mut a, 2.0, 4.0, exp),
                    random_range_with(&mut b, 2.0, 4.0, None)
                );
            }
        }
    }

    #[test]
    fn swapped_bounds_are_not_rejected() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let x = random_range_with(&mut rng, 1.0, 0.0, None);
            assert!(x > 0.0 && x <= 1.0, "{x}");
        }
    }

    #[test]
    fn replay_token_reproduces_stream() {
        let cfg = RangeCfg {
            min: 10.0,
            max: 20.0,
            exp: Some(1.5),
        };
        let tok = ReplayToken::new(42, 7);
        let a = Sampler::from_replay(tok).ranges(64, &cfg);
        let b = Sampler::from_replay(tok).ranges(64, &cfg);
        assert_eq!(a, b);
        let c = Sampler::from_replay(ReplayToken::new(42, 8)).ranges(64, &cfg);
        assert_ne!(a, c);
        assert!(a.iter().all(|x| (10.0..20.0).contains(x)));
    }

    #[test]
    fn borrowed_rng_advances_the_stream() {
        let tok = ReplayToken::new(8, 0);
        let mut mixed = Sampler::from_replay(tok);
        let own: u32 = mixed.rng().gen_range(0..100);
        assert!(own < 100);
        let after = mixed.range(0.0, 1.0, None);

        let mut plain = Sampler::from_replay(tok);
        let _: u32 = plain.rng().gen_range(0..100);
        assert_eq!(plain.range(0.0, 1.0, None), after);
        assert_ne!(Sampler::from_replay(tok).range(0.0, 1.0, None), after);
    }

    #[test]
    fn default_cfg_is_unit_interval() {
        let cfg = RangeCfg::default();
        let mut s = Sampler::new(1);
        assert!((0..1000).all(|_| (0.0..1.0).contains(&s.sample(&cfg))));
    }
}
