//! Rendering boundary.
//!
//! # Responsibility
//! - Turn filtered content into HTML fragments (`templates`).
//! - Hand fragments and visibility changes to a host `Surface`.
//!
//! # Invariants
//! - Every interpolated text value is HTML-escaped.
//! - Writing a region replaces its previous content; nothing accumulates.

pub mod surface;
pub mod templates;

pub use surface::{MemorySurface, Surface};
pub use templates::escape_html;
