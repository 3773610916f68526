//! Debounced save scheduling.
//!
//! Content edits are committed to storage only after an idle period
//! ([`SAVE_DEBOUNCE`]) since the last keystroke, or immediately when the
//! user toggles out of edit mode. [`SaveScheduler`] is the explicit,
//! cancellable form of that timer: schedule on edit, cancel-and-reschedule
//! on further edits, cancel on explicit save. At most one save is pending
//! per note at any time.
//!
//! The scheduler never reads a clock; callers pass `now` in, which keeps
//! timing fully controllable in tests.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use stickies_core::SaveScheduler;
//!
//! let mut scheduler = SaveScheduler::new();
//! let start = Instant::now();
//!
//! scheduler.schedule("a", start);
//! assert!(scheduler.take_due(start).is_empty());
//!
//! let due = scheduler.take_due(start + Duration::from_millis(600));
//! assert_eq!(due, vec!["a".to_string()]);
//! assert!(scheduler.is_idle());
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Idle period after the last keystroke before a note's content is saved.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Tracks at most one pending save deadline per note.
#[derive(Debug)]
pub struct SaveScheduler {
    pending: HashMap<String, Instant>,
    delay: Duration,
}

impl SaveScheduler {
    /// Creates a scheduler with the standard [`SAVE_DEBOUNCE`] window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(SAVE_DEBOUNCE)
    }

    /// Creates a scheduler with a custom idle window.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            pending: HashMap::new(),
            delay,
        }
    }

    /// Arms the save deadline for `id` at `now + delay`.
    ///
    /// A prior pending save for the same note is superseded, so a stream of
    /// keystrokes coalesces into one write.
    pub fn schedule(&mut self, id: &str, now: Instant) {
        self.pending.insert(id.to_string(), now + self.delay);
    }

    /// Drops the pending save for `id`, returning whether one existed.
    pub fn cancel(&mut self, id: &str) -> bool {
        self.pending.remove(id).is_some()
    }

    /// Drains and returns every note whose deadline has passed at `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<String> {
        let due: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &due {
            self.pending.remove(id);
        }
        due
    }

    /// The earliest pending deadline, or `None` when nothing is scheduled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    /// Returns `true` when no saves are pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for SaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_not_due_before_idle_period() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.schedule("a", start);
        assert!(scheduler.take_due(start + Duration::from_millis(499)).is_empty());
        assert!(!scheduler.is_idle());
    }

    #[test]
    fn test_due_after_idle_period() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.schedule("a", start);
        assert_eq!(scheduler.take_due(start + DELAY), vec!["a".to_string()]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_reschedule_extends_deadline() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.schedule("a", start);
        scheduler.schedule("a", start + Duration::from_millis(300));

        assert!(scheduler.take_due(start + DELAY).is_empty());
        let due = scheduler.take_due(start + Duration::from_millis(800));
        assert_eq!(due, vec!["a".to_string()]);
    }

    #[test]
    fn test_cancel_drops_pending_save() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.schedule("a", start);
        assert!(scheduler.cancel("a"));
        assert!(!scheduler.cancel("a"));
        assert!(scheduler.take_due(start + DELAY).is_empty());
    }

    #[test]
    fn test_notes_are_tracked_independently() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.schedule("a", start);
        scheduler.schedule("b", start + Duration::from_millis(400));

        let mut due = scheduler.take_due(start + DELAY);
        due.sort();
        assert_eq!(due, vec!["a".to_string()]);
        assert!(!scheduler.is_idle());

        let due = scheduler.take_due(start + Duration::from_millis(900));
        assert_eq!(due, vec!["b".to_string()]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_next_deadline_is_earliest() {
        let mut scheduler = SaveScheduler::with_delay(Duration::from_millis(100));
        let start = Instant::now();
        assert_eq!(scheduler.next_deadline(), None);

        scheduler.schedule("b", start + Duration::from_millis(50));
        scheduler.schedule("a", start);
        assert_eq!(
            scheduler.next_deadline(),
            Some(start + Duration::from_millis(100))
        );
    }
}
