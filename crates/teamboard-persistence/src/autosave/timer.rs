//! Debounce timer for auto-save.

use std::time::Instant;

use super::AutoSaveConfig;

/// Tracks unsaved changes in one form and when they should be saved.
///
/// At most one save is pending at a time: every change pushes the deadline
/// out to `debounce` after that change. Times are passed in by the caller so
/// the host's event loop (or a test) decides what "now" is.
#[derive(Debug, Clone, Default)]
pub struct AutosaveTimer {
    /// Whether there are unsaved changes.
    dirty: bool,

    /// When the pending save should fire.
    deadline: Option<Instant>,

    /// Whether a save is currently in progress.
    saving: bool,
}

impl AutosaveTimer {
    /// Create a new timer with no unsaved changes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are unsaved changes.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Check if a save is in progress.
    #[inline]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Check if an automatic save is scheduled.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Record a change made at `now`, resetting any pending deadline.
    ///
    /// With auto-save disabled the form still becomes dirty but nothing is
    /// scheduled.
    pub fn mark_changed(&mut self, now: Instant, config: &AutoSaveConfig) {
        self.dirty = true;
        self.deadline = config.enabled.then(|| now + config.debounce());
    }

    /// Drop the pending save without touching the dirty flag.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether the pending save should run at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        !self.saving && self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Mark that a save has started.
    pub fn start_save(&mut self) {
        self.saving = true;
        self.deadline = None;
    }

    /// Mark that a save has completed successfully.
    pub fn save_complete(&mut self) {
        self.dirty = false;
        self.saving = false;
        self.deadline = None;
    }

    /// Mark that a save has failed.
    ///
    /// Nothing is rescheduled; the next edit or a manual save retries.
    pub fn save_failed(&mut self) {
        self.saving = false;
        // Keep dirty = true since save failed
    }
}
