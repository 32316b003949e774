//! View router and render-on-demand content engine.
//!
//! # Responsibility
//! - Map navigation targets to exactly one visible view.
//! - Re-derive view content from in-memory state on every render.
//! - Persist favorites and theme through the injected key-value store.
//!
//! # Invariants
//! - Exactly one view is visible after every navigation.
//! - `render_view` replaces region content; repeated calls are idempotent.
//! - Content load failure never clears or corrupts already rendered views.
//! - Store write failures are logged; in-memory state still changes.

use crate::content::{ContentBundle, ContentResult, ContentSource, ContentSummary};
use crate::model::favorites::FavoritesSet;
use crate::model::project::Project;
use crate::model::theme::ThemeMode;
use crate::model::view::{FocusTarget, Region, ViewId};
use crate::render::templates;
use crate::render::Surface;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::preferences_repo::{load_favorites, load_theme, save_favorites, save_theme};
use crate::search::filter::{
    apply_filter_controls, filter_experience, ProjectFilter, SortKey, TagFilter,
};
use crate::service::contact::{compose_mailto, Clipboard, EMAIL_COPIED_MESSAGE};
use crate::service::keyboard::{ChordState, KeyAction};
use crate::service::overlay::{TransientOverlay, FLASH_MS};
use chrono::Datelike;
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// Number of projects listed on the resume view.
pub const RESUME_PROJECT_LIMIT: usize = 6;

const KEYBOARD_HELP_HTML: &str =
    "<kbd>g</kbd> then <kbd>e</kbd>/<kbd>p</kbd>/<kbd>d</kbd>/<kbd>c</kbd>/<kbd>h</kbd>/<kbd>r</kbd> to jump · <kbd>/</kbd> search projects · <kbd>?</kbd> help";

/// Host-provided settings for one page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// Address used by the contact form and copy button.
    pub contact_email: String,
    /// Host color-scheme preference used when no theme is stored.
    pub prefers_dark: bool,
    pub resume_project_limit: usize,
    /// Year written to the footer.
    pub current_year: i32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            contact_email: "you@example.com".to_string(),
            prefers_dark: false,
            resume_project_limit: RESUME_PROJECT_LIMIT,
            current_year: chrono::Local::now().year(),
        }
    }
}

/// Application state plus the router/renderer operating on it.
pub struct PortfolioApp<S: KeyValueStore, U: Surface> {
    store: S,
    surface: U,
    options: AppOptions,
    content: ContentBundle,
    tags: BTreeSet<String>,
    favorites: FavoritesSet,
    theme: Option<ThemeMode>,
    view: ViewId,
    project_filter: ProjectFilter,
    experience_filter: TagFilter,
    chord: ChordState,
    overlay: TransientOverlay,
    modal_project: Option<String>,
}

impl<S: KeyValueStore, U: Surface> PortfolioApp<S, U> {
    /// Boots a page session.
    ///
    /// # Side effects
    /// - Reads favorites and theme from `store` once.
    /// - Applies the stored theme, writes the footer year, hides the
    ///   overlay and shows the home view.
    pub fn new(store: S, surface: U, options: AppOptions) -> Self {
        let favorites = load_favorites(&store);
        let theme = load_theme(&store);
        let mut app = Self {
            store,
            surface,
            options,
            content: ContentBundle::default(),
            tags: BTreeSet::new(),
            favorites,
            theme,
            view: ViewId::Home,
            project_filter: ProjectFilter::default(),
            experience_filter: TagFilter::All,
            chord: ChordState::new(),
            overlay: TransientOverlay::new(),
            modal_project: None,
        };

        if let Some(mode) = app.theme {
            app.surface.set_theme(mode);
        }
        let year = app.options.current_year.to_string();
        app.surface.set_text(Region::FooterYear, &year);
        app.surface.set_region_hidden(Region::KeyboardHelp, true);
        app.render_tag_chips();
        app.navigate(ViewId::Home);
        info!(
            "event=app_start module=service status=ok favorites={} theme={}",
            app.favorites.len(),
            app.theme.map_or("unset", ThemeMode::as_str)
        );
        app
    }

    pub fn active_view(&self) -> ViewId {
        self.view
    }

    pub fn content(&self) -> &ContentBundle {
        &self.content
    }

    pub fn summary(&self) -> ContentSummary {
        self.content.summary()
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Applied theme; `None` until stored or toggled.
    pub fn theme(&self) -> Option<ThemeMode> {
        self.theme
    }

    pub fn project_filter(&self) -> &ProjectFilter {
        &self.project_filter
    }

    pub fn experience_filter(&self) -> &TagFilter {
        &self.experience_filter
    }

    pub fn is_help_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Id of the project whose modal is open.
    pub fn open_modal_project(&self) -> Option<&str> {
        self.modal_project.as_deref()
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Shows `target`, hides every other view and re-renders `target`.
    pub fn navigate(&mut self, target: ViewId) {
        self.view = target;
        for view in ViewId::ALL {
            self.surface.set_view_hidden(view, view != target);
            self.surface.set_nav_selected(view, view == target);
        }
        self.surface.focus(FocusTarget::View(target));
        self.render_view(target);
        debug!("event=navigate module=router status=ok view={}", target.as_str());
    }

    /// Routes a URL fragment; unknown fragments show home.
    pub fn navigate_fragment(&mut self, fragment: &str) {
        let target = ViewId::from_fragment(fragment);
        if target == ViewId::Home && !is_home_fragment(fragment) {
            debug!("event=navigate module=router status=fallback fragment={fragment}");
        }
        self.navigate(target);
    }

    /// Re-derives `view` content from current state.
    pub fn render_view(&mut self, view: ViewId) {
        match view {
            ViewId::Home | ViewId::Contact => {}
            ViewId::Projects => {
                let items = self.filtered_projects();
                let html = templates::projects_grid(&items, &self.favorites);
                self.surface.set_html(Region::ProjectsGrid, &html);
            }
            ViewId::Experience => {
                let entries = filter_experience(&self.content.experience, &self.experience_filter);
                let html = templates::experience_timeline(&entries);
                self.surface.set_html(Region::ExperienceTimeline, &html);
            }
            ViewId::Education => {
                let cards = templates::education_cards(&self.content.education);
                let coursework = templates::coursework_list(&self.content.education);
                self.surface.set_html(Region::EducationCards, &cards);
                self.surface.set_html(Region::CourseworkList, &coursework);
            }
            ViewId::Resume => {
                let html = templates::resume(
                    &self.content.experience,
                    &self.content.education,
                    &self.content.projects,
                    self.options.resume_project_limit,
                );
                self.surface.set_html(Region::ResumeTarget, &html);
            }
        }
    }

    /// Projects visible under the current filter controls.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        apply_filter_controls(&self.content.projects, &self.favorites, &self.project_filter)
    }

    /// Loads all collections from `source` and refreshes dependent views.
    ///
    /// # Errors
    /// - Returns the source error after logging it; state and rendered
    ///   views are left exactly as they were.
    pub fn load_content_source(
        &mut self,
        source: &impl ContentSource,
    ) -> ContentResult<ContentSummary> {
        let mut bundle = match source.load() {
            Ok(bundle) => bundle,
            Err(err) => {
                warn!("event=content_load module=content status=error error={err}");
                return Err(err);
            }
        };

        bundle.dedupe_project_ids();
        self.tags = bundle.project_tags();
        self.content = bundle;
        self.project_filter.tag = TagFilter::All;

        let summary = self.content.summary();
        self.surface
            .set_text(Region::StatProjects, &summary.project_count.to_string());
        self.surface
            .set_text(Region::StatYears, &summary.experience_years_label());
        self.surface
            .set_text(Region::StatAwards, &summary.award_count.to_string());
        self.render_tag_chips();
        self.navigate(self.view);

        info!(
            "event=content_load module=content status=ok projects={} experience={} education={} tags={}",
            self.content.projects.len(),
            self.content.experience.len(),
            self.content.education.len(),
            self.tags.len()
        );
        Ok(summary)
    }

    /// Flips favorite membership, persists it and re-renders projects.
    ///
    /// Returns `true` when the project is a favorite after the call.
    pub fn toggle_favorite(&mut self, project_id: &str) -> bool {
        let favorited = self.favorites.toggle(project_id);
        if let Err(err) = save_favorites(&mut self.store, &self.favorites) {
            warn!("event=favorite_toggle module=prefs status=error project_id={project_id} error={err}");
        }
        debug!("event=favorite_toggle module=prefs status=ok project_id={project_id} favorited={favorited}");
        self.render_view(ViewId::Projects);
        favorited
    }

    /// Flips between light and dark, persisting and applying the result.
    ///
    /// Without a stored theme the host preference is the starting point.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let current = self
            .theme
            .unwrap_or_else(|| ThemeMode::from_system(self.options.prefers_dark));
        let next = current.toggled();
        if let Err(err) = save_theme(&mut self.store, next) {
            warn!("event=theme_toggle module=prefs status=error error={err}");
        }
        self.theme = Some(next);
        self.surface.set_theme(next);
        debug!("event=theme_toggle module=prefs status=ok theme={}", next.as_str());
        next
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.project_filter.search_text = text.into();
        self.render_view(ViewId::Projects);
    }

    /// Presses one tag chip (or the wildcard) and re-renders projects.
    pub fn select_tag(&mut self, tag: TagFilter) {
        self.project_filter.tag = tag;
        self.render_tag_chips();
        self.render_view(ViewId::Projects);
    }

    pub fn set_sort_key(&mut self, sort: SortKey) {
        self.project_filter.sort = sort;
        self.render_view(ViewId::Projects);
    }

    pub fn set_experience_filter(&mut self, filter: TagFilter) {
        self.experience_filter = filter;
        self.render_view(ViewId::Experience);
    }

    /// Renders and opens the case-study modal for `project_id`.
    ///
    /// Returns `false` (modal untouched) when the id is unknown.
    pub fn open_project_modal(&mut self, project_id: &str) -> bool {
        let Some(project) = self.content.find_project(project_id) else {
            warn!("event=modal_open module=service status=error error_code=project_not_found project_id={project_id}");
            return false;
        };

        let html = templates::project_modal(project);
        self.surface.set_html(Region::ModalContent, &html);
        self.surface.set_modal_open(true);
        self.modal_project = Some(project.id.clone());
        true
    }

    pub fn close_project_modal(&mut self) {
        self.modal_project = None;
        self.surface.set_modal_open(false);
    }

    /// Applies one key press at `now_ms`.
    pub fn handle_key(&mut self, key: &str, now_ms: u64) -> KeyAction {
        let action = self.chord.handle_key(key, now_ms, self.view);
        match action {
            KeyAction::Navigate(view) => self.navigate(view),
            KeyAction::FocusSearch => self.surface.focus(FocusTarget::ProjectSearch),
            KeyAction::ToggleHelp => {
                let visible = self.overlay.toggle(now_ms);
                if visible {
                    self.surface.set_html(Region::KeyboardHelp, KEYBOARD_HELP_HTML);
                }
                self.surface.set_region_hidden(Region::KeyboardHelp, !visible);
            }
            KeyAction::Armed | KeyAction::Ignored => {}
        }
        action
    }

    /// Fires overlay timers due at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if self.overlay.tick(now_ms) {
            self.surface.set_region_hidden(Region::KeyboardHelp, true);
        }
    }

    /// Copies the contact address; a failed write shows no toast.
    ///
    /// Returns whether the copy succeeded.
    pub fn copy_contact_email(&mut self, clipboard: &mut impl Clipboard, now_ms: u64) -> bool {
        match clipboard.write_text(&self.options.contact_email) {
            Ok(()) => {
                self.flash(EMAIL_COPIED_MESSAGE, now_ms);
                true
            }
            Err(err) => {
                debug!("event=copy_email module=service status=error error={err}");
                false
            }
        }
    }

    /// `mailto:` URL for a contact form submission.
    pub fn compose_contact_mailto(&self, name: &str, email: &str, message: &str) -> String {
        compose_mailto(&self.options.contact_email, name, email, message)
    }

    fn flash(&mut self, message: &str, now_ms: u64) {
        self.surface.set_text(Region::KeyboardHelp, message);
        self.overlay.show(now_ms, FLASH_MS);
        self.surface.set_region_hidden(Region::KeyboardHelp, false);
    }

    fn render_tag_chips(&mut self) {
        let html = templates::tag_chips(&self.tags, &self.project_filter.tag);
        self.surface.set_html(Region::TagChips, &html);
    }
}

fn is_home_fragment(fragment: &str) -> bool {
    matches!(fragment.strip_prefix('#').unwrap_or(fragment), "" | "home")
}

#[cfg(test)]
mod tests {
    use super::{AppOptions, PortfolioApp};
    use crate::model::view::{Region, ViewId};
    use crate::render::MemorySurface;
    use crate::repo::kv_store::MemoryStore;

    fn options() -> AppOptions {
        AppOptions {
            contact_email: "me@example.com".to_string(),
            prefers_dark: false,
            resume_project_limit: 6,
            current_year: 2026,
        }
    }

    #[test]
    fn boot_shows_home_and_writes_footer_year() {
        let app = PortfolioApp::new(MemoryStore::new(), MemorySurface::new(), options());
        assert_eq!(app.active_view(), ViewId::Home);
        assert_eq!(app.surface().visible_views(), vec![ViewId::Home]);
        assert_eq!(app.surface().content(Region::FooterYear), "2026");
        assert!(app.surface().is_region_hidden(Region::KeyboardHelp));
        assert_eq!(app.theme(), None);
    }

    #[test]
    fn unknown_modal_id_leaves_modal_closed() {
        let mut app = PortfolioApp::new(MemoryStore::new(), MemorySurface::new(), options());
        assert!(!app.open_project_modal("missing"));
        assert!(!app.surface().is_modal_open());
        assert_eq!(app.open_modal_project(), None);
    }
}
