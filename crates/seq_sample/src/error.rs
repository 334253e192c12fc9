//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover empty inputs, weight/sequence length mismatches, out-of-range
//! indexes, and invalid or degenerate weight vectors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("sequence must contain at least one element")]
    EmptyInput,

    #[error("weight count {weights} does not match element count {elements}")]
    LengthMismatch { elements: usize, weights: usize },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("weight {weight} at index {index} must be finite and non-negative")]
    InvalidWeight { index: usize, weight: f32 },

    #[error("all weights are zero, distribution is undefined")]
    DegenerateWeights,
}
