//! Frequency tables over sequences.
//!
//! Key policy
//! - `distinct_map` keeps native typed keys: `1` and `"1"` can never collide.
//! - `distinct_map_by_string` coerces keys through `Display`, so `1` and `"1"` share
//!   a key. Useful for floats, which are not `Hash`.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Count occurrences of each distinct item. Empty input gives an empty map.
pub fn distinct_map<T, I>(items: I) -> HashMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Count occurrences keyed by each item's `Display` form.
pub fn distinct_map_by_string<T, I>(items: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    distinct_map(items.into_iter().map(|item| item.to_string()))
}
