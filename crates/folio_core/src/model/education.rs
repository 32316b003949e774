//! Education entries rendered as cards and on the resume.

use crate::model::lenient;
use serde::{Deserialize, Serialize};

/// One school record from `education.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub school: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub coursework: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub awards: Vec<String>,
}

impl EducationEntry {
    pub fn end_label(&self) -> &str {
        self.end.as_deref().unwrap_or(crate::model::ONGOING_LABEL)
    }
}
