//! Transient overlay shared by the keyboard help and confirmation toasts.
//!
//! # Invariants
//! - Each show schedules one hide deadline; deadlines are never cancelled.
//! - Any due deadline hides the overlay, even if a later show is pending.

/// Auto-hide delay after toggling keyboard help.
pub const HELP_OVERLAY_MS: u64 = 3_500;
/// Auto-hide delay for confirmation toasts.
pub const FLASH_MS: u64 = 1_500;

/// Visibility plus fire-and-forget hide timers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransientOverlay {
    visible: bool,
    hide_deadlines: Vec<u64>,
}

impl TransientOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pending_timers(&self) -> usize {
        self.hide_deadlines.len()
    }

    /// Flips visibility and schedules a hide after [`HELP_OVERLAY_MS`].
    ///
    /// Returns the visibility after the flip.
    pub fn toggle(&mut self, now_ms: u64) -> bool {
        self.visible = !self.visible;
        self.schedule_hide(now_ms, HELP_OVERLAY_MS);
        self.visible
    }

    /// Shows the overlay and schedules a hide after `duration_ms`.
    pub fn show(&mut self, now_ms: u64, duration_ms: u64) {
        self.visible = true;
        self.schedule_hide(now_ms, duration_ms);
    }

    /// Fires every deadline due at `now_ms`.
    ///
    /// Returns `true` when at least one timer fired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let before = self.hide_deadlines.len();
        self.hide_deadlines.retain(|deadline| *deadline > now_ms);
        let fired = self.hide_deadlines.len() != before;
        if fired {
            self.visible = false;
        }
        fired
    }

    fn schedule_hide(&mut self, now_ms: u64, delay_ms: u64) {
        self.hide_deadlines.push(now_ms.saturating_add(delay_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::{TransientOverlay, FLASH_MS, HELP_OVERLAY_MS};

    #[test]
    fn toggle_auto_hides_after_delay() {
        let mut overlay = TransientOverlay::new();
        assert!(overlay.toggle(0));
        assert!(!overlay.tick(HELP_OVERLAY_MS - 1));
        assert!(overlay.is_visible());
        assert!(overlay.tick(HELP_OVERLAY_MS));
        assert!(!overlay.is_visible());
        assert_eq!(overlay.pending_timers(), 0);
    }

    #[test]
    fn earlier_timer_hides_a_newer_show() {
        let mut overlay = TransientOverlay::new();
        overlay.toggle(0);
        overlay.show(3_000, FLASH_MS);

        assert!(overlay.tick(HELP_OVERLAY_MS));
        assert!(!overlay.is_visible());
        assert_eq!(overlay.pending_timers(), 1);

        assert!(overlay.tick(3_000 + FLASH_MS));
        assert!(!overlay.is_visible());
    }

    #[test]
    fn double_toggle_hides_immediately_and_timers_stay_idempotent() {
        let mut overlay = TransientOverlay::new();
        overlay.toggle(0);
        assert!(!overlay.toggle(100));
        assert!(overlay.tick(10_000));
        assert!(!overlay.is_visible());
    }
}
