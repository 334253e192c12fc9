//! Stateless sequence helpers: shuffling, non-destructive random picks,
//! exclusion, and string rendering.
//!
//! Everything here leaves the input untouched and returns fresh values; the
//! destructive counterparts live in [crate::sampling].
use std::fmt::Display;

use rand::{Rng, RngCore};

use crate::error::Result;
use crate::sampling::pop_random_n;
use crate::selection::{rand01, select_uniform};

/// Returns the elements in a uniformly random order, without mutating the input.
///
/// Each element gets an independent uniform sort key and the result is ordered
/// by key. Ties have probability ~0 with continuous keys, so no tie-break rule
/// is needed.
pub fn shuffled<T: Clone, R: RngCore + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut keyed: Vec<(f32, T)> = items
        .iter()
        .map(|el| (rand01(rng), el.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, el)| el).collect()
}

/// Returns one uniformly random element without removing it.
pub fn random_element<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Result<&'a T> {
    select_uniform(items, rng).map(|sel| sel.element)
}

/// Returns `count` distinct random elements, ordered as they appear in the input.
///
/// Positions are drawn by destructively popping a disposable copy of the index
/// range, then the input is filtered by membership in the drawn set. The result
/// follows the original sequence's order of surviving elements, not the order
/// the positions were drawn in.
pub fn random_elements<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    let mut index_pool: Vec<usize> = (0..items.len()).collect();
    let drawn: Vec<usize> = pop_random_n(&mut index_pool, count, rng)?
        .into_iter()
        .map(|sel| sel.element)
        .collect();

    Ok(items
        .iter()
        .enumerate()
        .filter(|(i, _)| drawn.contains(i))
        .map(|(_, el)| el.clone())
        .collect())
}

/// Returns the elements not present in `excluded`, preserving relative order.
///
/// A structural set difference by value equality: every occurrence of an
/// excluded value is dropped, surviving duplicates are kept.
pub fn except<T: PartialEq + Clone>(items: &[T], excluded: &[T]) -> Vec<T> {
    items
        .iter()
        .filter(|el| !excluded.contains(el))
        .cloned()
        .collect()
}

/// Renders the sequence as `"[e1, e2, ..., en]"`.
pub fn as_string<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(|el| el.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Applies `action` to each element in order.
pub fn for_each<T, F: FnMut(&T)>(items: &[T], mut action: F) {
    for element in items {
        action(element);
    }
}
