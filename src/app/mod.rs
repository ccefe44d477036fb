//! Main application state and logic.
//!
//! This module contains the core `App` controller and its implementation,
//! organized into submodules:
//! - `events` - Key, paste and background event handling
//! - `layout` - Screen layout calculation
//! - `removal` - Two-phase removal of list rows
//! - `render` - UI rendering
//! - `state` - Application state structures
//! - `suggestions` - Debounced suggestion requests
//!
//! ## Control Flow
//!
//! A user action mutates the [`Session`], which writes the task list through
//! to storage. The list, stats line and empty state are derived from the
//! session on every frame, so they can never go stale. Suggestion requests
//! run on the tokio runtime and report back through an event channel that
//! is drained once per loop iteration.

pub mod events;
mod layout;
pub mod removal;
mod render;
pub mod state;
mod suggestions;

#[cfg(test)]
mod tests;

pub use layout::{MainLayout, SUGGESTION_PANEL_HEIGHT, calculate_main_layout};

use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::core::{
    FilterMode, MockSuggestionProvider, Session, SuggestionProvider, SuggestionTiming, Task,
    TaskId,
};
use crate::fs::{Storage, StorageError};
use crate::tui::Theme;

use self::removal::{RemovalAction, RemovalTracker};
pub use self::state::{AppEvent, InputState, LayoutState, SuggestionState, TaskListState};
use crate::tui::widgets::SuggestionPanel;

/// Channel buffer size for background events.
const EVENT_CHANNEL_SIZE: usize = 64;

/// Main application state.
///
/// Organized into component sub-structs:
/// - `session`: task store, filter mode and theme (source of truth)
/// - `input`: new-task composer
/// - `list`: selection in the filtered task list
/// - `suggestions`: suggestion panel and pending request
/// - `removals`: rows animating out of the list
pub struct App {
    // =========================================================================
    // Shared State
    // =========================================================================
    /// Tasks, filter and theme.
    pub(crate) session: Session,
    /// Palette matching `session.theme()`.
    pub(crate) theme: Theme,
    /// Last persistence problem, shown in the stats line.
    pub(crate) notice: Option<String>,
    /// Should quit flag.
    should_quit: bool,

    // =========================================================================
    // Event Channels
    // =========================================================================
    /// Event receiver for background events.
    event_rx: mpsc::Receiver<AppEvent>,
    /// Event sender (cloned into suggestion tasks).
    event_tx: mpsc::Sender<AppEvent>,

    // =========================================================================
    // Component States
    // =========================================================================
    pub(crate) input: InputState,
    pub(crate) list: TaskListState,
    pub(crate) suggestions: SuggestionState,
    pub(crate) removals: RemovalTracker,
    pub(crate) layout: LayoutState,

    /// Source of suggestions.
    provider: Arc<dyn SuggestionProvider>,
    /// Debounce and latency settings.
    timing: SuggestionTiming,
}

impl App {
    /// Creates the application with the mock suggestion provider.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        let timing = SuggestionTiming::default();
        Self::with_provider(
            storage,
            Arc::new(MockSuggestionProvider::new(timing.latency)),
            timing,
        )
    }

    /// Creates the application with a custom suggestion provider and timing.
    #[must_use]
    pub fn with_provider(
        storage: Storage,
        provider: Arc<dyn SuggestionProvider>,
        timing: SuggestionTiming,
    ) -> Self {
        let session = Session::load(storage);
        info!(
            tasks = session.tasks().len(),
            theme = session.theme().name(),
            provider = provider.name(),
            "session loaded"
        );
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);

        Self {
            theme: Theme::for_mode(session.theme()),
            session,
            notice: None,
            should_quit: false,
            event_rx,
            event_tx,
            input: InputState::new(),
            list: TaskListState::default(),
            suggestions: SuggestionState::default(),
            removals: RemovalTracker::default(),
            layout: LayoutState::default(),
            provider,
            timing,
        }
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Read access to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current suggestion panel content.
    #[must_use]
    pub fn suggestion_panel(&self) -> &SuggestionPanel {
        &self.suggestions.panel
    }

    /// Current composer text.
    #[must_use]
    pub fn input_text(&self) -> String {
        self.input.text()
    }

    /// Calculates and caches the layout for the given terminal area.
    ///
    /// Should be called once per frame before rendering.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        self.layout.main = calculate_main_layout(terminal_area);
    }

    // =========================================================================
    // Task List
    // =========================================================================

    /// Tasks visible under the current filter.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.session.visible_tasks()
    }

    /// Id of the selected task in the filtered view.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.list.selected).map(|t| t.id)
    }

    pub(crate) fn select_prev(&mut self) {
        self.list.selected = self.list.selected.saturating_sub(1);
    }

    pub(crate) fn select_next(&mut self) {
        self.list.selected += 1;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.list.clamp(len);
    }

    /// Adds a task from the composer text.
    ///
    /// Blank input is ignored. On success the input is cleared, any pending
    /// suggestion request is cancelled and the panel shows the placeholder.
    pub fn add_task_from_input(&mut self) {
        let text = self.input.text();
        let before = self.session.tasks().len();
        let result = self.session.add_task(&text);
        self.report(result);
        if self.session.tasks().len() == before {
            return;
        }

        self.input.clear();
        self.cancel_suggestions();
        self.suggestions.panel = SuggestionPanel::Placeholder;
        self.clamp_selection();
    }

    /// Toggles completion of `id`.
    ///
    /// When the toggle would make the row leave the current filter (completing
    /// under `Active`, reopening under `Completed`) the row animates out first
    /// and the mutation runs when the animation finishes. Every other toggle
    /// applies immediately.
    pub fn request_toggle_complete(&mut self, id: TaskId) {
        let Some(task) = self.session.store().get(id) else {
            return;
        };
        if self.removals.is_removing(id) {
            return;
        }

        let leaves_view = match self.session.filter() {
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
            FilterMode::All | FilterMode::Priority => false,
        };

        if leaves_view {
            self.removals
                .begin(id, RemovalAction::ToggleComplete, Instant::now());
        } else {
            self.apply_removal(id, RemovalAction::ToggleComplete);
        }
    }

    /// Toggles the priority flag of `id` immediately.
    pub fn toggle_priority(&mut self, id: TaskId) {
        if self.removals.is_removing(id) {
            return;
        }
        let result = self.session.toggle_priority(id);
        self.report(result);
        self.clamp_selection();
    }

    /// Starts the two-phase deletion of `id`.
    pub fn request_delete(&mut self, id: TaskId) {
        if self.session.store().get(id).is_none() {
            return;
        }
        self.removals.begin(id, RemovalAction::Delete, Instant::now());
    }

    /// Removes every completed task.
    pub fn clear_completed(&mut self) {
        let result = self.session.clear_completed();
        self.report(result);
        self.clamp_selection();
    }

    /// Selects a filter mode.
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.session.set_filter(mode);
        self.clamp_selection();
    }

    /// Switches between the light and dark theme and persists the choice.
    pub fn toggle_theme(&mut self) {
        let result = self.session.toggle_theme();
        self.report(result);
        self.theme = Theme::for_mode(self.session.theme());
    }

    /// Applies removals whose animation has finished.
    ///
    /// This method should be called on every event loop tick.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub(crate) fn tick_at(&mut self, now: Instant) {
        for (id, action) in self.removals.take_finished(now) {
            self.apply_removal(id, action);
        }
    }

    fn apply_removal(&mut self, id: TaskId, action: RemovalAction) {
        let result = match action {
            RemovalAction::Delete => self.session.delete_task(id),
            RemovalAction::ToggleComplete => self.session.toggle_complete(id),
        };
        self.report(result);
        self.clamp_selection();
    }

    /// Records the outcome of a persisted mutation.
    ///
    /// Save failures are logged and surfaced in the stats line; the
    /// in-memory change stays applied.
    fn report<T>(&mut self, result: Result<T, StorageError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.notice = None;
                Some(value)
            }
            Err(e) => {
                warn!(error = %e, "failed to persist change");
                self.notice = Some(format!("Not saved: {e}"));
                None
            }
        }
    }
}
