#![forbid(unsafe_code)]
//! seq_sample: weighted random selection and destructive sampling for ordered collections.
//!
//! Modules:
//! - selection: non-mutating weighted/uniform picks returning element + index
//! - sampling: destructive pops (by index, uniform, weighted) against a mutable Vec
//! - sequence: shuffle, non-destructive random picks, exclusion, string rendering
//!
//! All randomness flows through a caller-supplied RNG, so every operation is
//! deterministic under a seeded generator. Collections are caller-owned; nothing
//! is retained between calls.
pub mod error;
pub mod sampling;
pub mod selection;
pub mod sequence;

/// Convenient re-exports for common items. Import with `use seq_sample::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{
        pop_at, pop_many_at, pop_random, pop_random_n, pop_weighted, pop_weighted_by,
    };
    pub use crate::selection::{
        select_uniform, select_weighted, select_weighted_by, Selection,
    };
    pub use crate::sequence::{
        as_string, except, for_each, random_element, random_elements, shuffled,
    };
}
