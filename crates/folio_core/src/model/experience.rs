//! Work experience entries rendered on the timeline and resume.

use crate::model::lenient;
use serde::{Deserialize, Serialize};

/// One role from `experience.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start: String,
    /// Absent means the role is ongoing.
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub tags: Vec<String>,
    /// Contribution to the "years of experience" counter.
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    pub years: Option<f64>,
}

impl ExperienceEntry {
    /// End label with the ongoing fallback applied.
    pub fn end_label(&self) -> &str {
        self.end.as_deref().unwrap_or(crate::model::ONGOING_LABEL)
    }
}
