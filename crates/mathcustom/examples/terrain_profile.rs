//! Procedural terrain profile from the helpers.
//!
//! Draws jittered height samples along a ridge, shapes them with a smoothstep
//! map, adds a few boulders from the sampler's own generator, and tallies
//! the quantized heights.
//!
//! Run: `cargo run -p mathcustom --example terrain_profile`

use mathcustom::prelude::*;
use rand::Rng;

fn main() {
    let mut sampler = Sampler::from_replay(ReplayToken::new(2024, 0));
    let smooth = Curve::named("smoothstep").unwrap_or(Curve::Exponent(1.0));

    let heights: Vec<f64> = (0..=16)
        .map(|i| {
            let x = i as f64;
            let base = map_curved(x, 0.0, 16.0, 0.0, 100.0, smooth);
            let jitter = sampler.sign() as f64 * sampler.range(0.0, 8.0, Some(2.0));
            // Occasional boulder on the ridge.
            let boulder = if sampler.rng().gen_bool(0.1) { 5.0 } else { 0.0 };
            truncate(base + jitter + boulder, Some(1))
        })
        .collect();

    for (i, h) in heights.iter().enumerate() {
        let slope = rad_to_deg((h - heights[i.saturating_sub(1)]).atan());
        println!("x={i:>2} h={h:>6.1} slope={slope:>6.1}°");
    }

    let bands = distinct_map(heights.iter().map(|h| truncate(h / 25.0, None) as i64));
    let mut bands: Vec<_> = bands.into_iter().collect();
    bands.sort();
    println!("height bands (×25): {bands:?}");
}
