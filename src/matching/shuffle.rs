//! Pool Shuffle
//!
//! Uniform random permutation of the right-side items.

use rand::Rng;

/// Fisher–Yates: walk from the last index down to 1, swapping each slot with
/// a uniformly chosen index in `0..=i`. Slices of length 0 or 1 are untouched.
pub fn fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
