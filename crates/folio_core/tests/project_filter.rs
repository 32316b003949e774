use folio_core::{apply_project_filter, FavoritesSet, Project, SortKey, TagFilter};

fn project(id: &str, title: &str, year: Option<i32>, tags: &[&str]) -> Project {
    let mut project = Project::new(id, title);
    project.year = year;
    project.summary = format!("{title} summary");
    project.tags = tags.iter().map(|tag| tag.to_string()).collect();
    project
}

fn ids(items: &[&Project]) -> Vec<String> {
    items.iter().map(|project| project.id.clone()).collect()
}

#[test]
fn alpha_orders_titles_ascending() {
    let projects = vec![
        project("z", "Zebra", None, &[]),
        project("a", "Apple", None, &[]),
        project("m", "Mango", None, &[]),
    ];
    let sorted = apply_project_filter(
        &projects,
        &FavoritesSet::new(),
        "",
        &TagFilter::All,
        SortKey::Alpha,
    );
    let titles: Vec<_> = sorted.iter().map(|project| project.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple", "Mango", "Zebra"]);
}

#[test]
fn recent_orders_years_descending_with_missing_last() {
    let projects = vec![
        project("a", "A", Some(2021), &[]),
        project("none", "None", None, &[]),
        project("b", "B", Some(2023), &[]),
        project("c", "C", Some(2019), &[]),
    ];
    let sorted = apply_project_filter(
        &projects,
        &FavoritesSet::new(),
        "",
        &TagFilter::All,
        SortKey::Recent,
    );
    let years: Vec<_> = sorted.iter().map(|project| project.year).collect();
    assert_eq!(years, vec![Some(2023), Some(2021), Some(2019), None]);
}

#[test]
fn tag_filter_keeps_matching_projects_in_source_order() {
    let projects = vec![
        project("ev-2", "Charger", Some(2020), &["ev"]),
        project("aero", "Glider", Some(2022), &["aero"]),
        project("ev-1", "Battery", Some(2024), &["ev"]),
    ];
    let filtered = apply_project_filter(
        &projects,
        &FavoritesSet::new(),
        "",
        &TagFilter::Tag("ev".to_string()),
        SortKey::None,
    );
    assert_eq!(ids(&filtered), vec!["ev-2", "ev-1"]);
}

#[test]
fn filter_is_pure_across_repeated_calls() {
    let projects = vec![
        project("1", "Rocket", Some(2020), &["aero"]),
        project("2", "Scooter", Some(2024), &["ev"]),
        project("3", "Rover", None, &["ev", "aero"]),
    ];
    let snapshot = projects.clone();
    let favorites: FavoritesSet = ["3".to_string()].into_iter().collect();

    let first = ids(&apply_project_filter(
        &projects,
        &favorites,
        "ro",
        &TagFilter::All,
        SortKey::Stars,
    ));
    let second = ids(&apply_project_filter(
        &projects,
        &favorites,
        "ro",
        &TagFilter::All,
        SortKey::Stars,
    ));

    assert_eq!(first, second);
    assert_eq!(first, vec!["3", "1"]);
    assert_eq!(projects, snapshot);
}

#[test]
fn search_is_case_insensitive_over_title_summary_and_tags() {
    let projects = vec![
        project("1", "Wind Tunnel", None, &["aero"]),
        project("2", "Inverter", None, &["Power"]),
    ];
    let favorites = FavoritesSet::new();

    let by_summary = apply_project_filter(
        &projects,
        &favorites,
        "TUNNEL SUMMARY",
        &TagFilter::All,
        SortKey::None,
    );
    assert_eq!(ids(&by_summary), vec!["1"]);

    let by_tag = apply_project_filter(&projects, &favorites, "power", &TagFilter::All, SortKey::None);
    assert_eq!(ids(&by_tag), vec!["2"]);

    let none = apply_project_filter(&projects, &favorites, "zzz", &TagFilter::All, SortKey::None);
    assert!(none.is_empty());
}

#[test]
fn chip_named_all_selects_that_tag_not_the_wildcard() {
    let projects = vec![
        project("1", "Toolkit", None, &["all"]),
        project("2", "Glider", None, &["aero"]),
    ];
    let picked = apply_project_filter(
        &projects,
        &FavoritesSet::new(),
        "",
        &TagFilter::from_chip_value("all"),
        SortKey::None,
    );
    assert_eq!(ids(&picked), vec!["1"]);

    let every = apply_project_filter(
        &projects,
        &FavoritesSet::new(),
        "",
        &TagFilter::from_chip_value("All"),
        SortKey::None,
    );
    assert_eq!(ids(&every), vec!["1", "2"]);
}
