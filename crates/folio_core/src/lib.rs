//! Core of the folio portfolio page.
//! Owns routing, content state, preferences and rendering; hosts only
//! forward events and apply `Surface` updates.

pub mod config;
pub mod content;
pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use content::{
    ContentBundle, ContentError, ContentSource, ContentSummary, DirContentSource,
    InlineContentSource,
};
pub use logging::{init_logging, logging_status, LogLevel, LogSettings, LoggingError};
pub use model::education::EducationEntry;
pub use model::experience::ExperienceEntry;
pub use model::favorites::FavoritesSet;
pub use model::project::{Project, ProjectId};
pub use model::theme::ThemeMode;
pub use model::view::{FocusTarget, Region, ViewId};
pub use render::{MemorySurface, Surface};
pub use repo::kv_store::{KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use repo::sqlite_store::SqliteStore;
pub use search::filter::{apply_project_filter, ProjectFilter, SortKey, TagFilter};
pub use service::contact::{Clipboard, ClipboardError, MemoryClipboard, UnavailableClipboard};
pub use service::keyboard::KeyAction;
pub use service::portfolio_service::{AppOptions, PortfolioApp};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
