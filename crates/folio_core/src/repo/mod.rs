//! Preference persistence abstractions and implementations.
//!
//! # Responsibility
//! - Define the minimal `get/set/remove` key-value capability.
//! - Isolate SQLite details behind that capability.
//! - Map favorites and theme preferences onto their fixed keys.
//!
//! # Invariants
//! - Only the `favorites` and `theme` keys are read or written.
//! - Malformed stored values degrade to defaults, never to errors.

pub mod kv_store;
pub mod preferences_repo;
pub mod sqlite_store;
