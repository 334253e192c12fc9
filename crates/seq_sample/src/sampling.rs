//! Destructive random sampling: pops that remove the chosen element.
//!
//! All operations here mutate the caller's `Vec` in place, removing elements by
//! index with the remainder shifting down. Multi-element variants apply each pop
//! to the collection as it stands after the previous pop, so returned indexes are
//! relative to the progressively shrinking collection, not the original.
//!
//! Preconditions are validated before any mutation; a failed call leaves the
//! collection untouched. Weighted variants resolve the index through
//! [crate::selection] against the collection's current state.
use rand::{Rng, RngCore};

use crate::error::{Error, Result};
use crate::selection::{weighted_index, Selection};

/// Removes and returns the element at `index`, shifting later elements down.
pub fn pop_at<T>(items: &mut Vec<T>, index: usize) -> Result<T> {
    if index >= items.len() {
        return Err(Error::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }

    Ok(items.remove(index))
}

/// Pops each index in order, against the collection as it stands after the
/// previous pop.
///
/// Indexes are taken literally per pop and are not translated for earlier
/// removals; the j-th index must be valid for a collection that has already
/// shrunk by j elements. The whole batch is validated up front, so an invalid
/// index fails without removing anything.
pub fn pop_many_at<T>(items: &mut Vec<T>, indexes: &[usize]) -> Result<Vec<T>> {
    for (already_popped, &index) in indexes.iter().enumerate() {
        let len = items.len().saturating_sub(already_popped);
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
    }

    let mut popped = Vec::with_capacity(indexes.len());
    for &index in indexes {
        popped.push(items.remove(index));
    }

    Ok(popped)
}

/// Removes and returns one uniformly random element with its pre-removal index.
pub fn pop_random<T, R: Rng + ?Sized>(items: &mut Vec<T>, rng: &mut R) -> Result<Selection<T>> {
    if items.is_empty() {
        return Err(Error::EmptyInput);
    }

    let index = rng.random_range(0..items.len());
    Ok(Selection::new(items.remove(index), index))
}

/// Pops `count` uniformly random elements, one after another.
///
/// Each returned index is relative to the collection immediately before that
/// pop. Repeats are impossible by construction since every pop removes its
/// element. Requires `count <= items.len()`; otherwise fails without mutating.
pub fn pop_random_n<T, R: Rng + ?Sized>(
    items: &mut Vec<T>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Selection<T>>> {
    if count > items.len() {
        return Err(Error::EmptyInput);
    }

    let mut popped = Vec::with_capacity(count);
    for _ in 0..count {
        popped.push(pop_random(items, rng)?);
    }

    Ok(popped)
}

/// Pops one element chosen proportionally to the given weights.
///
/// Weights must match the collection's current length; callers performing
/// repeated weighted pops must resupply weights for the shrunk collection.
pub fn pop_weighted<T, R: RngCore + ?Sized>(
    items: &mut Vec<T>,
    weights: &[f32],
    rng: &mut R,
) -> Result<Selection<T>> {
    if weights.len() != items.len() {
        return Err(Error::LengthMismatch {
            elements: items.len(),
            weights: weights.len(),
        });
    }

    let index = weighted_index(weights, rng)?;
    Ok(Selection::new(items.remove(index), index))
}

/// Pops one element chosen proportionally to `weight_of(element)`.
///
/// The selector is re-applied to the current collection on every call, so it
/// stays valid across repeated pops without the caller rebuilding weights.
pub fn pop_weighted_by<T, R, F>(items: &mut Vec<T>, weight_of: F, rng: &mut R) -> Result<Selection<T>>
where
    R: RngCore + ?Sized,
    F: Fn(&T) -> f32,
{
    let weights: Vec<f32> = items.iter().map(|el| weight_of(el)).collect();
    pop_weighted(items, &weights, rng)
}
