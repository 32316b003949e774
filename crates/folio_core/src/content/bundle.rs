//! Loaded content collections and derived projections.

use crate::model::education::EducationEntry;
use crate::model::experience::ExperienceEntry;
use crate::model::project::Project;
use log::warn;
use std::collections::{BTreeSet, HashSet};

/// The three collections fetched from one content source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBundle {
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

/// Counters shown on the home view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentSummary {
    pub project_count: usize,
    /// Sum of `years` across experience entries; missing counts as zero.
    pub experience_years: f64,
    pub award_count: usize,
}

impl ContentSummary {
    /// Years label without a trailing `.0` for whole numbers.
    pub fn experience_years_label(&self) -> String {
        format_number(self.experience_years)
    }
}

impl ContentBundle {
    pub fn new(
        projects: Vec<Project>,
        experience: Vec<ExperienceEntry>,
        education: Vec<EducationEntry>,
    ) -> Self {
        Self {
            projects,
            experience,
            education,
        }
    }

    /// Drops later projects whose id was already seen.
    ///
    /// Returns the number of dropped projects.
    pub fn dedupe_project_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let before = self.projects.len();
        self.projects.retain(|project| {
            if seen.insert(project.id.clone()) {
                return true;
            }
            warn!(
                "event=content_load module=content status=warn error_code=duplicate_project_id project_id={}",
                project.id
            );
            false
        });
        before - self.projects.len()
    }

    /// Sorted, deduplicated union of all project tags.
    pub fn project_tags(&self) -> BTreeSet<String> {
        self.projects
            .iter()
            .flat_map(|project| project.tags.iter().cloned())
            .collect()
    }

    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            project_count: self.projects.len(),
            experience_years: self
                .experience
                .iter()
                .map(|entry| entry.years.unwrap_or(0.0))
                .sum(),
            award_count: self.education.iter().map(|entry| entry.awards.len()).sum(),
        }
    }

    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == project_id)
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::ContentBundle;
    use crate::model::education::EducationEntry;
    use crate::model::experience::ExperienceEntry;
    use crate::model::project::Project;

    fn experience(years: Option<f64>) -> ExperienceEntry {
        serde_json::from_value(serde_json::json!({ "title": "Engineer", "years": years }))
            .unwrap()
    }

    #[test]
    fn summary_counts_projects_years_and_awards() {
        let mut school: EducationEntry =
            serde_json::from_value(serde_json::json!({ "school": "MIT" })).unwrap();
        school.awards = vec!["Dean's list".to_string(), "Scholarship".to_string()];
        let bundle = ContentBundle::new(
            vec![Project::new("a", "A"), Project::new("b", "B")],
            vec![experience(Some(2.0)), experience(None), experience(Some(1.5))],
            vec![school],
        );

        let summary = bundle.summary();
        assert_eq!(summary.project_count, 2);
        assert_eq!(summary.experience_years_label(), "3.5");
        assert_eq!(summary.award_count, 2);
    }

    #[test]
    fn whole_year_sums_render_without_fraction() {
        let bundle = ContentBundle::new(
            Vec::new(),
            vec![experience(Some(3.0)), experience(Some(1.0))],
            Vec::new(),
        );
        assert_eq!(bundle.summary().experience_years_label(), "4");
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let mut bundle = ContentBundle::new(
            vec![
                Project::new("x", "First"),
                Project::new("y", "Other"),
                Project::new("x", "Second"),
            ],
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(bundle.dedupe_project_ids(), 1);
        let titles: Vec<_> = bundle.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Other"]);
    }

    #[test]
    fn project_tags_are_sorted_and_unique() {
        let mut a = Project::new("a", "A");
        a.tags = vec!["ev".to_string(), "aero".to_string()];
        let mut b = Project::new("b", "B");
        b.tags = vec!["ev".to_string()];
        let bundle = ContentBundle::new(vec![a, b], Vec::new(), Vec::new());
        let tags: Vec<_> = bundle.project_tags().into_iter().collect();
        assert_eq!(tags, vec!["aero".to_string(), "ev".to_string()]);
    }
}
