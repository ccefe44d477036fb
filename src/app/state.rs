//! Application state structures.
//!
//! - **`InputState`**: the new-task composer
//! - **`TaskListState`**: selection in the task list
//! - **`SuggestionState`**: the suggestion panel and its request lifecycle
//! - **`LayoutState`**: layout computed each frame

use tokio::task::JoinHandle;
use tui_textarea::{CursorMove, TextArea};

use crate::app::layout::MainLayout;
use crate::core::{Suggestion, SuggestionError};
use crate::tui::widgets::{SuggestionEntry, SuggestionPanel, suggestion_entries};

/// Placeholder shown in the composer.
pub const INPUT_PLACEHOLDER: &str = "What needs to be done?";

/// Events sent from background tasks to the UI.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The debounce period elapsed; the provider should be called now.
    SuggestionsDue {
        /// Generation of the request (for cancellation).
        generation: u64,
        /// Trimmed input the request was scheduled for.
        text: String,
    },
    /// The provider finished.
    SuggestionsReady {
        /// Generation of the request (for cancellation).
        generation: u64,
        /// Suggestions, or the reason none could be produced.
        result: Result<Vec<Suggestion>, SuggestionError>,
    },
}

/// State of the new-task composer.
pub struct InputState {
    /// Single-line text area.
    pub textarea: TextArea<'static>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(Vec::new()),
        }
    }

    /// Current input text.
    #[must_use]
    pub fn text(&self) -> String {
        self.textarea.lines().join(" ")
    }

    /// Replaces the input with `text` and moves the cursor to its end.
    pub fn set_text(&mut self, text: &str) {
        self.textarea = new_textarea(vec![text.to_string()]);
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Clears the input.
    pub fn clear(&mut self) {
        self.textarea = new_textarea(Vec::new());
    }
}

fn new_textarea(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = TextArea::new(lines);
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea
}

/// Selection within the filtered task list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskListState {
    /// Index into the filtered view.
    pub selected: usize,
}

impl TaskListState {
    /// Keeps the selection inside a view of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Suggestion panel plus the bookkeeping for the debounced request.
#[derive(Debug, Default)]
pub struct SuggestionState {
    /// Panel content.
    pub panel: SuggestionPanel,
    /// Generation of the newest request; events from older ones are dropped.
    pub generation: u64,
    /// Handle of the pending debounced request, if any.
    pub(crate) pending: Option<JoinHandle<()>>,
}

impl SuggestionState {
    /// Selectable rows of the panel (empty unless suggestions are showing).
    #[must_use]
    pub fn entries(&self) -> Vec<SuggestionEntry> {
        match &self.panel {
            SuggestionPanel::Showing { suggestions, .. } => suggestion_entries(suggestions),
            _ => Vec::new(),
        }
    }

    /// Currently highlighted row.
    #[must_use]
    pub fn selected_entry(&self) -> Option<SuggestionEntry> {
        match &self.panel {
            SuggestionPanel::Showing {
                suggestions,
                selected,
            } => suggestion_entries(suggestions).into_iter().nth(*selected),
            _ => None,
        }
    }

    /// Whether a debounced request is still outstanding.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

/// Dynamic layout dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    /// Main screen layout, recalculated every frame.
    pub main: MainLayout,
}
