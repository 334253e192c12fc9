//! Weighted and uniform random selection over ordered sequences.
//!
//! This module provides helpers to pick one element (and its index) from a slice:
//! - [select_weighted]: draws proportionally to an explicit weight slice.
//! - [select_weighted_by]: derives weights from a per-element selector function.
//! - [select_uniform]: picks with equal probability for every element.
//!
//! Inputs are never mutated; destructive variants that remove the chosen element
//! live in [crate::sampling]. When randomness is required, pass an RNG that
//! implements [rand::RngCore] (or [rand::Rng] for the uniform variant).
use rand::{Rng, RngCore};
use tracing::warn;

use crate::error::{Error, Result};

/// A chosen element together with the index it occupied at selection time.
///
/// For destructive operations the index refers to the collection as it existed
/// immediately before the element was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<T> {
    pub element: T,
    pub index: usize,
}

impl<T> Selection<T> {
    pub fn new(element: T, index: usize) -> Self {
        Self { element, index }
    }
}

/// Selects one element with probability proportional to its weight.
///
/// `weights[i]` describes `items[i]`; both slices must be non-empty and of equal
/// length. Weights must be finite and non-negative, and at least one must be
/// positive. The input is not mutated.
pub fn select_weighted<'a, T, R: RngCore + ?Sized>(
    items: &'a [T],
    weights: &[f32],
    rng: &mut R,
) -> Result<Selection<&'a T>> {
    if weights.len() != items.len() {
        return Err(Error::LengthMismatch {
            elements: items.len(),
            weights: weights.len(),
        });
    }

    let index = weighted_index(weights, rng)?;
    Ok(Selection::new(&items[index], index))
}

/// Selects one element with probability proportional to `weight_of(element)`.
///
/// The selector is applied to every element in order to build the weight vector,
/// then selection proceeds as in [select_weighted].
pub fn select_weighted_by<'a, T, R, F>(
    items: &'a [T],
    weight_of: F,
    rng: &mut R,
) -> Result<Selection<&'a T>>
where
    R: RngCore + ?Sized,
    F: Fn(&T) -> f32,
{
    let weights: Vec<f32> = items.iter().map(|el| weight_of(el)).collect();
    select_weighted(items, &weights, rng)
}

/// Selects one element uniformly at random.
///
/// Distribution-equivalent to [select_weighted] with every weight set to `1`.
pub fn select_uniform<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    rng: &mut R,
) -> Result<Selection<&'a T>> {
    if items.is_empty() {
        return Err(Error::EmptyInput);
    }

    let index = rng.random_range(0..items.len());
    Ok(Selection::new(&items[index], index))
}

/// Resolves a weight slice to an index via a cumulative-sum walk.
///
/// Draws `target = u * sum(weights)` with `u` in `[0, 1)` and returns the first
/// index whose positive weight pushes the running sum past (or within epsilon of)
/// the target. Zero-weight entries are never eligible, even at an exact cumulative
/// boundary.
pub(crate) fn weighted_index<R: RngCore + ?Sized>(weights: &[f32], rng: &mut R) -> Result<usize> {
    if weights.is_empty() {
        return Err(Error::EmptyInput);
    }

    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { index, weight });
        }
    }

    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        return Err(Error::DegenerateWeights);
    }

    let target = rand01(rng) * total;
    let mut running = 0.0f32;

    for (index, &weight) in weights.iter().enumerate() {
        running += weight;
        if weight > 0.0 && (target < running || approx(target, running)) {
            return Ok(index);
        }
    }

    // The walk can only exhaust when rounding makes the accumulated sum fall
    // short of the precomputed total.
    warn!(total, target, "cumulative walk exhausted, using last index");
    Ok(weights.len() - 1)
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Approximate float equality with magnitude-relative tolerance.
///
/// Treats values as equal when their difference is below one millionth of the
/// larger operand, with an absolute floor for values near zero.
#[inline]
pub(crate) fn approx(a: f32, b: f32) -> bool {
    (b - a).abs() < (1e-6f32 * a.abs().max(b.abs())).max(f32::EPSILON * 8.0)
}
