//! Favorited project identifiers.
//!
//! # Invariants
//! - Membership only changes through `toggle`.
//! - Serialized form is a JSON array of id strings in sorted order.

use crate::model::project::ProjectId;
use std::collections::BTreeSet;

/// Set of favorited project ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: BTreeSet<ProjectId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.ids.contains(project_id)
    }

    /// Flips membership of `project_id`.
    ///
    /// Returns `true` when the project is a favorite after the call.
    pub fn toggle(&mut self, project_id: &str) -> bool {
        if self.ids.remove(project_id) {
            false
        } else {
            self.ids.insert(project_id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Encodes the set as a JSON array.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Decodes a JSON array of ids.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let ids = serde_json::from_str::<Vec<ProjectId>>(raw)?;
        Ok(ids.into_iter().collect())
    }
}

impl FromIterator<ProjectId> for FavoritesSet {
    fn from_iter<T: IntoIterator<Item = ProjectId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
