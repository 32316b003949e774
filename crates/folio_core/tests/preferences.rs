use folio_core::{
    AppOptions, ContentBundle, InlineContentSource, KeyValueStore, MemoryStore, MemorySurface,
    PortfolioApp, Project, Region, SortKey, SqliteStore, ThemeMode, ViewId,
};

fn options(prefers_dark: bool) -> AppOptions {
    AppOptions {
        contact_email: "me@example.com".to_string(),
        prefers_dark,
        resume_project_limit: 6,
        current_year: 2026,
    }
}

fn projects_source() -> InlineContentSource {
    let mut older = Project::new("older", "Older");
    older.year = Some(2019);
    let mut newer = Project::new("newer", "Newer");
    newer.year = Some(2024);
    InlineContentSource::new(ContentBundle::new(vec![older, newer], Vec::new(), Vec::new()))
}

#[test]
fn theme_toggle_flips_from_light_system_preference() {
    let mut app = PortfolioApp::new(MemoryStore::new(), MemorySurface::new(), options(false));
    assert_eq!(app.surface().theme(), None);

    assert_eq!(app.toggle_theme(), ThemeMode::Dark);
    assert_eq!(app.store().get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(app.surface().theme(), Some(ThemeMode::Dark));

    assert_eq!(app.toggle_theme(), ThemeMode::Light);
    assert_eq!(app.store().get("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(app.surface().theme(), Some(ThemeMode::Light));
}

#[test]
fn stored_theme_is_applied_at_startup_and_wins_over_system() {
    let store = MemoryStore::with_entries([("theme", "light")]);
    let mut app = PortfolioApp::new(store, MemorySurface::new(), options(true));
    assert_eq!(app.surface().theme(), Some(ThemeMode::Light));
    assert_eq!(app.toggle_theme(), ThemeMode::Dark);
}

#[test]
fn favorite_toggle_sequence_matches_odd_toggle_counts() {
    let mut app = PortfolioApp::new(MemoryStore::new(), MemorySurface::new(), options(false));
    let sequence = ["a", "b", "a", "c", "c", "c", "b", "d"];
    for id in sequence {
        app.toggle_favorite(id);
    }

    let favorites: Vec<_> = app.favorites().iter().collect();
    assert_eq!(favorites, vec!["c", "d"]);
    assert_eq!(app.store().get("favorites").unwrap().as_deref(), Some(r#"["c","d"]"#));
}

#[test]
fn favorite_toggle_rerenders_stars_and_stars_sort() {
    let mut app = PortfolioApp::new(MemoryStore::new(), MemorySurface::new(), options(false));
    app.load_content_source(&projects_source()).unwrap();
    app.navigate(ViewId::Projects);
    app.set_sort_key(SortKey::Stars);

    let grid = app.surface().content(Region::ProjectsGrid).to_string();
    assert!(grid.find("Newer").unwrap() < grid.find("Older").unwrap());

    assert!(app.toggle_favorite("older"));
    let grid = app.surface().content(Region::ProjectsGrid);
    assert!(grid.find("Older").unwrap() < grid.find("Newer").unwrap());
    assert!(grid.contains(r#"aria-pressed="true" data-id="older""#));

    assert!(!app.toggle_favorite("older"));
    assert!(app.favorites().is_empty());
}

#[test]
fn preferences_survive_reopening_the_sqlite_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.sqlite3");

    {
        let store = SqliteStore::open(&path).unwrap();
        let mut app = PortfolioApp::new(store, MemorySurface::new(), options(false));
        app.toggle_favorite("p1");
        app.toggle_favorite("p2");
        app.toggle_theme();
    }

    let store = SqliteStore::open(&path).unwrap();
    let app = PortfolioApp::new(store, MemorySurface::new(), options(false));
    let favorites: Vec<_> = app.favorites().iter().collect();
    assert_eq!(favorites, vec!["p1", "p2"]);
    assert_eq!(app.theme(), Some(ThemeMode::Dark));
    assert_eq!(app.surface().theme(), Some(ThemeMode::Dark));
}

#[test]
fn malformed_favorites_start_empty_and_are_overwritten() {
    let store = MemoryStore::with_entries([("favorites", "not json")]);
    let mut app = PortfolioApp::new(store, MemorySurface::new(), options(false));
    assert!(app.favorites().is_empty());

    app.toggle_favorite("x");
    assert_eq!(app.store().get("favorites").unwrap().as_deref(), Some(r#"["x"]"#));
}
