//! Pure filter/sort transforms over loaded content.
//!
//! # Responsibility
//! - Implement project search, tag filtering and ordering.
//! - Implement the experience tag filter.
//!
//! # Invariants
//! - Functions here never mutate their inputs or any shared state.

pub mod filter;
