//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the content entities loaded from the data source.
//! - Define the navigation and preference value types shared by services.
//!
//! # Invariants
//! - Content entities are immutable after load; views only filter/sort them.
//! - Missing optional fields deserialize to empty/absent, never to errors.

pub mod education;
pub mod experience;
pub mod favorites;
mod lenient;
pub mod project;
pub mod theme;
pub mod view;

/// Label rendered in place of a missing end date.
pub const ONGOING_LABEL: &str = "Present";
