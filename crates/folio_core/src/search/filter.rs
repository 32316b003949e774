//! Project and experience filtering.
//!
//! # Invariants
//! - Output order depends only on the arguments.
//! - Sorting is stable: ties keep source order.

use crate::model::experience::ExperienceEntry;
use crate::model::favorites::FavoritesSet;
use crate::model::project::Project;
use std::cmp::Ordering;

/// Chip label matching every project.
pub const TAG_WILDCARD: &str = "All";
/// Experience filter value matching every role.
pub const EXPERIENCE_WILDCARD: &str = "all";

/// Ordering applied to the filtered projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Source order.
    #[default]
    None,
    /// Ascending by title, case-insensitive.
    Alpha,
    /// Descending by year; missing years sort last.
    Recent,
    /// Favorites first, then descending by year.
    Stars,
}

impl SortKey {
    /// Parses a sort control value; unknown values keep source order.
    pub fn from_control_value(value: &str) -> Self {
        match value.trim() {
            "alpha" => Self::Alpha,
            "recent" => Self::Recent,
            "stars" => Self::Stars,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Alpha => "alpha",
            Self::Recent => "recent",
            Self::Stars => "stars",
        }
    }
}

/// Single-tag selection with a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parses a project tag chip; only `All` (or blank) is the wildcard.
    pub fn from_chip_value(value: &str) -> Self {
        Self::parse_with_wildcard(value, TAG_WILDCARD)
    }

    /// Parses the experience select; only `all` (or blank) is the wildcard.
    pub fn from_experience_value(value: &str) -> Self {
        Self::parse_with_wildcard(value, EXPERIENCE_WILDCARD)
    }

    fn parse_with_wildcard(value: &str, wildcard: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == wildcard {
            Self::All
        } else {
            Self::Tag(trimmed.to_string())
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether an item carrying `tags` passes this filter.
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => tags.iter().any(|value| value == tag),
        }
    }

    /// Label of the chip representing this selection.
    pub fn chip_label(&self) -> &str {
        match self {
            Self::All => TAG_WILDCARD,
            Self::Tag(tag) => tag.as_str(),
        }
    }
}

/// Full set of project filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search_text: String,
    pub tag: TagFilter,
    pub sort: SortKey,
}

/// Filters and orders `projects` without mutating anything.
///
/// A project is included iff `tag_filter` matches its tags and the lowercase
/// `search_text` is empty or a substring of its lowercase title, summary and
/// tags.
pub fn apply_project_filter<'a>(
    projects: &'a [Project],
    favorites: &FavoritesSet,
    search_text: &str,
    tag_filter: &TagFilter,
    sort_key: SortKey,
) -> Vec<&'a Project> {
    let needle = search_text.to_lowercase();
    let mut items = projects
        .iter()
        .filter(|project| tag_filter.matches(&project.tags))
        .filter(|project| needle.is_empty() || project.search_haystack().contains(&needle))
        .collect::<Vec<_>>();

    match sort_key {
        SortKey::None => {}
        SortKey::Alpha => items.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::Recent => items.sort_by(|a, b| b.sort_year().cmp(&a.sort_year())),
        SortKey::Stars => items.sort_by(|a, b| {
            let a_star = favorites.contains(&a.id);
            let b_star = favorites.contains(&b.id);
            b_star
                .cmp(&a_star)
                .then_with(|| b.sort_year().cmp(&a.sort_year()))
        }),
    }

    items
}

/// Convenience wrapper over [`apply_project_filter`] for a control snapshot.
pub fn apply_filter_controls<'a>(
    projects: &'a [Project],
    favorites: &FavoritesSet,
    controls: &ProjectFilter,
) -> Vec<&'a Project> {
    apply_project_filter(
        projects,
        favorites,
        &controls.search_text,
        &controls.tag,
        controls.sort,
    )
}

/// Roles matching the experience tag filter, in source order.
pub fn filter_experience<'a>(
    entries: &'a [ExperienceEntry],
    tag_filter: &TagFilter,
) -> Vec<&'a ExperienceEntry> {
    entries
        .iter()
        .filter(|entry| tag_filter.matches(&entry.tags))
        .collect()
}

// Approximates locale collation: case-folded first, raw text breaks ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::{apply_project_filter, filter_experience, SortKey, TagFilter};
    use crate::model::experience::ExperienceEntry;
    use crate::model::favorites::FavoritesSet;
    use crate::model::project::Project;

    fn project(id: &str, title: &str, year: Option<i32>, tags: &[&str]) -> Project {
        let mut project = Project::new(id, title);
        project.year = year;
        project.tags = tags.iter().map(|tag| tag.to_string()).collect();
        project
    }

    fn titles(items: &[&Project]) -> Vec<String> {
        items.iter().map(|project| project.title.clone()).collect()
    }

    #[test]
    fn alpha_sorts_case_insensitively() {
        let projects = vec![
            project("1", "zebra", None, &[]),
            project("2", "Apple", None, &[]),
            project("3", "Mango", None, &[]),
        ];
        let sorted = apply_project_filter(
            &projects,
            &FavoritesSet::new(),
            "",
            &TagFilter::All,
            SortKey::Alpha,
        );
        assert_eq!(titles(&sorted), vec!["Apple", "Mango", "zebra"]);
    }

    #[test]
    fn stars_ties_break_by_descending_year_with_missing_as_zero() {
        let projects = vec![
            project("old", "Old", Some(2018), &[]),
            project("none", "None", None, &[]),
            project("new", "New", Some(2024), &[]),
            project("fav", "Fav", Some(2010), &[]),
        ];
        let favorites: FavoritesSet = ["fav".to_string()].into_iter().collect();
        let sorted =
            apply_project_filter(&projects, &favorites, "", &TagFilter::All, SortKey::Stars);
        assert_eq!(titles(&sorted), vec!["Fav", "New", "Old", "None"]);
    }

    #[test]
    fn search_matches_tags_and_ignores_case() {
        let projects = vec![
            project("1", "Drone", None, &["Aero"]),
            project("2", "Charger", None, &["ev"]),
        ];
        let hits = apply_project_filter(
            &projects,
            &FavoritesSet::new(),
            "AERO",
            &TagFilter::All,
            SortKey::None,
        );
        assert_eq!(titles(&hits), vec!["Drone"]);
    }

    #[test]
    fn tag_and_search_must_both_match() {
        let projects = vec![
            project("1", "Charger", None, &["ev"]),
            project("2", "Inverter", None, &["ev"]),
        ];
        let hits = apply_project_filter(
            &projects,
            &FavoritesSet::new(),
            "inv",
            &TagFilter::Tag("ev".to_string()),
            SortKey::None,
        );
        assert_eq!(titles(&hits), vec!["Inverter"]);
    }

    #[test]
    fn control_values_parse_with_their_own_wildcard() {
        assert_eq!(TagFilter::from_chip_value("All"), TagFilter::All);
        assert_eq!(TagFilter::from_chip_value(" "), TagFilter::All);
        assert_eq!(
            TagFilter::from_chip_value("all"),
            TagFilter::Tag("all".to_string())
        );
        assert_eq!(TagFilter::from_experience_value("all"), TagFilter::All);
        assert_eq!(
            TagFilter::from_experience_value("All"),
            TagFilter::Tag("All".to_string())
        );
        assert_eq!(SortKey::from_control_value("recent"), SortKey::Recent);
        assert_eq!(SortKey::from_control_value("bogus"), SortKey::None);
    }

    #[test]
    fn project_tag_named_all_is_selectable() {
        let projects = vec![
            project("1", "Everything", None, &["all"]),
            project("2", "Other", None, &["ev"]),
        ];
        let hits = apply_project_filter(
            &projects,
            &FavoritesSet::new(),
            "",
            &TagFilter::from_chip_value("all"),
            SortKey::None,
        );
        assert_eq!(titles(&hits), vec!["Everything"]);
    }

    #[test]
    fn experience_filter_keeps_source_order() {
        let entries: Vec<ExperienceEntry> = serde_json::from_str(
            r#"[
                {"title": "A", "tags": ["ev"]},
                {"title": "B", "tags": ["aero"]},
                {"title": "C", "tags": ["ev", "aero"]}
            ]"#,
        )
        .unwrap();
        let hits = filter_experience(&entries, &TagFilter::Tag("aero".to_string()));
        let names: Vec<_> = hits.iter().map(|entry| entry.title.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(filter_experience(&entries, &TagFilter::All).len(), 3);
    }
}
