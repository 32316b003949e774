//! Content source contract and implementations.
//!
//! # Invariants
//! - Sources never partially succeed; any failing document fails the load.
//! - Unknown JSON fields are ignored and optional fields default.

use crate::content::bundle::ContentBundle;
use crate::model::education::EducationEntry;
use crate::model::experience::ExperienceEntry;
use crate::model::project::Project;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File name of the projects document inside a content directory.
pub const PROJECTS_FILE: &str = "projects.json";
/// File name of the experience document inside a content directory.
pub const EXPERIENCE_FILE: &str = "experience.json";
/// File name of the education document inside a content directory.
pub const EDUCATION_FILE: &str = "education.json";

pub type ContentResult<T> = Result<T, ContentError>;

/// Content load failure.
#[derive(Debug)]
pub enum ContentError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Source cannot serve content at all (offline host, missing binding).
    Unavailable(String),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse `{}`: {source}", path.display())
            }
            Self::Unavailable(message) => write!(f, "content source unavailable: {message}"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Unavailable(_) => None,
        }
    }
}

/// Provider of the three content collections.
pub trait ContentSource {
    /// Fetches all collections. Called once per page session.
    fn load(&self) -> ContentResult<ContentBundle>;
}

/// Reads the three JSON documents from one directory.
#[derive(Debug, Clone)]
pub struct DirContentSource {
    root: PathBuf,
}

impl DirContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_document<T: DeserializeOwned>(&self, file_name: &str) -> ContentResult<Vec<T>> {
        let path = self.root.join(file_name);
        let raw = std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ContentError::Parse { path, source })
    }
}

impl ContentSource for DirContentSource {
    fn load(&self) -> ContentResult<ContentBundle> {
        let projects: Vec<Project> = self.read_document(PROJECTS_FILE)?;
        let experience: Vec<ExperienceEntry> = self.read_document(EXPERIENCE_FILE)?;
        let education: Vec<EducationEntry> = self.read_document(EDUCATION_FILE)?;
        Ok(ContentBundle::new(projects, experience, education))
    }
}

/// Content compiled into the host, for pages that inline their data.
#[derive(Debug, Clone, Default)]
pub struct InlineContentSource {
    bundle: ContentBundle,
}

impl InlineContentSource {
    pub fn new(bundle: ContentBundle) -> Self {
        Self { bundle }
    }

    /// Projects-only page variant with no experience or education data.
    pub fn projects(projects: Vec<Project>) -> Self {
        Self::new(ContentBundle::new(projects, Vec::new(), Vec::new()))
    }

    /// Parses an inlined projects array.
    pub fn from_projects_json(raw: &str) -> ContentResult<Self> {
        let projects = serde_json::from_str(raw).map_err(|source| ContentError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Ok(Self::projects(projects))
    }
}

impl ContentSource for InlineContentSource {
    fn load(&self) -> ContentResult<ContentBundle> {
        Ok(self.bundle.clone())
    }
}
