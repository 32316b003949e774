//! Host document abstraction.

use crate::model::theme::ThemeMode;
use crate::model::view::{FocusTarget, Region, ViewId};
use std::collections::BTreeMap;

/// Mutable page document the renderer writes into.
///
/// Browser bindings map these calls onto DOM updates; `MemorySurface`
/// records them for tests and static export.
pub trait Surface {
    fn set_view_hidden(&mut self, view: ViewId, hidden: bool);
    /// Navigation selection indicator (`aria-selected`) of a view's nav link.
    fn set_nav_selected(&mut self, view: ViewId, selected: bool);
    /// Replaces the inner HTML of `region`.
    fn set_html(&mut self, region: Region, html: &str);
    /// Replaces the text content of `region`; the host escapes it.
    fn set_text(&mut self, region: Region, text: &str);
    fn set_region_hidden(&mut self, region: Region, hidden: bool);
    /// Applies the document theme attribute.
    fn set_theme(&mut self, mode: ThemeMode);
    fn focus(&mut self, target: FocusTarget);
    fn set_modal_open(&mut self, open: bool);
}

/// In-memory document recording the last value written to every slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    hidden_views: BTreeMap<ViewId, bool>,
    nav_selected: BTreeMap<ViewId, bool>,
    contents: BTreeMap<Region, String>,
    hidden_regions: BTreeMap<Region, bool>,
    theme: Option<ThemeMode>,
    focused: Option<FocusTarget>,
    modal_open: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Views currently not hidden, in navigation order.
    pub fn visible_views(&self) -> Vec<ViewId> {
        ViewId::ALL
            .into_iter()
            .filter(|view| self.hidden_views.get(view) == Some(&false))
            .collect()
    }

    /// Views whose nav link carries the selection indicator.
    pub fn selected_nav(&self) -> Vec<ViewId> {
        self.nav_selected
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(view, _)| *view)
            .collect()
    }

    /// Last HTML or text written to `region`; empty when never written.
    pub fn content(&self, region: Region) -> &str {
        self.contents.get(&region).map_or("", String::as_str)
    }

    /// Regions start hidden until explicitly shown.
    pub fn is_region_hidden(&self, region: Region) -> bool {
        self.hidden_regions.get(&region).copied().unwrap_or(true)
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        self.theme
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focused
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}

impl Surface for MemorySurface {
    fn set_view_hidden(&mut self, view: ViewId, hidden: bool) {
        self.hidden_views.insert(view, hidden);
    }

    fn set_nav_selected(&mut self, view: ViewId, selected: bool) {
        self.nav_selected.insert(view, selected);
    }

    fn set_html(&mut self, region: Region, html: &str) {
        self.contents.insert(region, html.to_string());
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.contents.insert(region, text.to_string());
    }

    fn set_region_hidden(&mut self, region: Region, hidden: bool) {
        self.hidden_regions.insert(region, hidden);
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = Some(mode);
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focused = Some(target);
    }

    fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }
}
