//! Project domain model.
//!
//! # Responsibility
//! - Define the project record rendered by the projects grid and modal.
//! - Accept both string and numeric identifiers from data files.
//!
//! # Invariants
//! - `id` is unique within one loaded set (enforced by the content loader).
//! - `tags` and `gallery` are empty rather than absent when missing, `null`
//!   or malformed.

use crate::model::lenient;
use serde::{Deserialize, Serialize};

/// Stable project identifier used for favorites and modal lookup.
pub type ProjectId = String;

/// One portfolio project as described by `projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Numeric ids are stringified so lookups compare like the page did.
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: ProjectId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: String,
    /// Long-form text shown in the case-study modal.
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub tags: Vec<String>,
    /// Card thumbnail path.
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub gallery: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub demo: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub repo: Option<String>,
    /// Presence enables the "Case study" modal button.
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub case_study: Option<String>,
}

impl Project {
    /// Creates a project with only identity and headline fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            description: None,
            year: None,
            tags: Vec::new(),
            image: None,
            gallery: Vec::new(),
            demo: None,
            repo: None,
            case_study: None,
        }
    }

    /// Year used for ordering; missing years sort as `0`.
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(0)
    }

    /// Text matched by free-text search: title, summary and tags.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.tags.join(" ")).to_lowercase()
    }
}
