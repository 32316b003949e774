use folio_core::{
    AppOptions, FocusTarget, KeyAction, MemoryClipboard, MemoryStore, MemorySurface, PortfolioApp,
    Region, UnavailableClipboard, ViewId,
};

fn app() -> PortfolioApp<MemoryStore, MemorySurface> {
    PortfolioApp::new(
        MemoryStore::new(),
        MemorySurface::new(),
        AppOptions {
            contact_email: "me@example.com".to_string(),
            prefers_dark: false,
            resume_project_limit: 6,
            current_year: 2026,
        },
    )
}

#[test]
fn g_chord_navigates_within_window() {
    let mut app = app();
    assert_eq!(app.handle_key("g", 10_000), KeyAction::Armed);
    assert_eq!(
        app.handle_key("e", 10_500),
        KeyAction::Navigate(ViewId::Experience)
    );
    assert_eq!(app.active_view(), ViewId::Experience);

    assert_eq!(app.handle_key("c", 11_000), KeyAction::Ignored);
    assert_eq!(app.active_view(), ViewId::Experience);
}

#[test]
fn slash_focuses_search_only_on_projects_view() {
    let mut app = app();
    app.handle_key("/", 0);
    assert_eq!(app.surface().focused(), Some(FocusTarget::View(ViewId::Home)));

    app.navigate_fragment("#projects");
    assert_eq!(app.handle_key("/", 5), KeyAction::FocusSearch);
    assert_eq!(app.surface().focused(), Some(FocusTarget::ProjectSearch));
}

#[test]
fn help_overlay_toggles_and_auto_hides() {
    let mut app = app();
    app.handle_key("?", 1_000);
    assert!(app.is_help_visible());
    assert!(!app.surface().is_region_hidden(Region::KeyboardHelp));
    assert!(app.surface().content(Region::KeyboardHelp).contains("<kbd>g</kbd>"));

    app.tick(4_499);
    assert!(app.is_help_visible());
    app.tick(4_500);
    assert!(!app.is_help_visible());
    assert!(app.surface().is_region_hidden(Region::KeyboardHelp));
}

#[test]
fn copy_email_flashes_toast_on_success() {
    let mut app = app();
    let mut clipboard = MemoryClipboard::new();

    assert!(app.copy_contact_email(&mut clipboard, 0));
    assert_eq!(clipboard.contents(), Some("me@example.com"));
    assert_eq!(
        app.surface().content(Region::KeyboardHelp),
        "Email copied to clipboard"
    );
    assert!(!app.surface().is_region_hidden(Region::KeyboardHelp));

    app.tick(1_500);
    assert!(app.surface().is_region_hidden(Region::KeyboardHelp));
}

#[test]
fn clipboard_failure_is_swallowed_without_toast() {
    let mut app = app();
    assert!(!app.copy_contact_email(&mut UnavailableClipboard, 0));
    assert!(app.surface().is_region_hidden(Region::KeyboardHelp));
    assert_eq!(app.surface().content(Region::KeyboardHelp), "");
}

#[test]
fn contact_mailto_uses_configured_address() {
    let app = app();
    let url = app.compose_contact_mailto("Bo", "bo@x.io", "Hello & bye");
    assert!(url.starts_with("mailto:me@example.com?subject=Portfolio%20Contact%20"));
    assert!(url.contains("&body=Hello%20%26%20bye%0A%0AFrom: Bo <bo%40x.io>"));
}
