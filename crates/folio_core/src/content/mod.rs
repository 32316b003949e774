//! Static content sources for projects, experience and education.
//!
//! # Responsibility
//! - Define the data-source contract consumed at startup.
//! - Normalize loaded collections (unique project ids, derived tags,
//!   summary counters).
//!
//! # Invariants
//! - A load either yields all three collections or fails as a whole.
//! - Loaded collections are immutable afterwards.

pub mod bundle;
pub mod source;

pub use bundle::{ContentBundle, ContentSummary};
pub use source::{ContentError, ContentResult, ContentSource, DirContentSource, InlineContentSource};
