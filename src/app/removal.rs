//! Two-phase removal of list rows.
//!
//! A row that is about to leave the list is first marked as removing and
//! drawn dimmed. The store mutation runs only once the removal animation has
//! finished, which the event loop detects by polling [`RemovalTracker::take_finished`]
//! on every tick. Taking an entry removes it from the tracker, so each
//! pending action fires exactly once.

use std::time::{Duration, Instant};

use crate::core::TaskId;

/// How long a row stays in the removing state.
pub const REMOVAL_ANIMATION: Duration = Duration::from_millis(300);

/// Mutation to apply when the animation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalAction {
    /// Delete the task.
    Delete,
    /// Flip the completed flag (the row leaves the current filter).
    ToggleComplete,
}

#[derive(Debug, Clone, Copy)]
struct PendingRemoval {
    id: TaskId,
    action: RemovalAction,
    started: Instant,
}

/// Rows currently animating out.
#[derive(Debug, Clone)]
pub struct RemovalTracker {
    pending: Vec<PendingRemoval>,
    duration: Duration,
}

impl Default for RemovalTracker {
    fn default() -> Self {
        Self::new(REMOVAL_ANIMATION)
    }
}

impl RemovalTracker {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            pending: Vec::new(),
            duration,
        }
    }

    /// Starts removing `id`.
    ///
    /// Returns `false` and changes nothing if the row is already removing.
    pub fn begin(&mut self, id: TaskId, action: RemovalAction, now: Instant) -> bool {
        if self.is_removing(id) {
            return false;
        }
        self.pending.push(PendingRemoval {
            id,
            action,
            started: now,
        });
        true
    }

    #[must_use]
    pub fn is_removing(&self, id: TaskId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every entry whose animation has finished at `now`,
    /// oldest first.
    pub fn take_finished(&mut self, now: Instant) -> Vec<(TaskId, RemovalAction)> {
        let duration = self.duration;
        let (finished, still_pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|p| now.saturating_duration_since(p.started) >= duration);
        self.pending = still_pending;
        finished.into_iter().map(|p| (p.id, p.action)).collect()
    }
}
