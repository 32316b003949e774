//! Keyboard shortcut chords.
//!
//! - `/` focuses project search while the projects view is active.
//! - `?` toggles the help overlay.
//! - `g` arms an 800 ms window in which `e p d c h r` jump to a view.

use crate::model::view::ViewId;

/// Window after `g` during which a view key navigates.
pub const CHORD_WINDOW_MS: u64 = 800;

/// Effect requested by one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(ViewId),
    FocusSearch,
    ToggleHelp,
    /// Chord prefix accepted; nothing to do yet.
    Armed,
    Ignored,
}

/// State of the two-key `g` chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordState {
    armed_until: Option<u64>,
}

impl ChordState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self, now_ms: u64) -> bool {
        self.armed_until.is_some_and(|deadline| now_ms < deadline)
    }

    /// Interprets one key press at `now_ms`.
    ///
    /// A navigation does not disarm the chord; it expires with its window.
    pub fn handle_key(&mut self, key: &str, now_ms: u64, active_view: ViewId) -> KeyAction {
        match key {
            "/" => {
                if active_view == ViewId::Projects {
                    KeyAction::FocusSearch
                } else {
                    KeyAction::Ignored
                }
            }
            "?" => KeyAction::ToggleHelp,
            other if other.eq_ignore_ascii_case("g") => {
                self.armed_until = Some(now_ms.saturating_add(CHORD_WINDOW_MS));
                KeyAction::Armed
            }
            other if self.is_armed(now_ms) => {
                chord_target(other).map_or(KeyAction::Ignored, KeyAction::Navigate)
            }
            _ => KeyAction::Ignored,
        }
    }
}

/// View reached by `g` followed by `key`.
pub fn chord_target(key: &str) -> Option<ViewId> {
    match key.to_lowercase().as_str() {
        "e" => Some(ViewId::Experience),
        "p" => Some(ViewId::Projects),
        "d" => Some(ViewId::Education),
        "c" => Some(ViewId::Contact),
        "h" => Some(ViewId::Home),
        "r" => Some(ViewId::Resume),
        _ => None,
    }
}
