//! Debounced suggestion requests.
//!
//! Every input change restarts the request: the previous pending task is
//! aborted and the generation counter is bumped. A timer task sleeps for the
//! debounce period and reports `SuggestionsDue`. The UI then shows the loading
//! state, snapshots the live task list and spawns the provider call, which
//! reports `SuggestionsReady`. Events carrying an older generation are
//! dropped when they reach the UI, so a superseded request can never
//! overwrite newer panel content even if its abort raced with a send.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::App;
use super::state::AppEvent;
use crate::core::{Suggestion, SuggestionError, SuggestionProvider, Task, should_suggest};
use crate::tui::widgets::{SuggestionEntry, SuggestionPanel};

/// Error text shown when the provider fails.
pub const SUGGESTION_ERROR_TEXT: &str = "Failed to get suggestions. Please try again.";

/// Spawns the quiet-period timer for one input value.
fn spawn_debounce(
    generation: u64,
    text: String,
    debounce: Duration,
    event_tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(debounce).await;
        let _ = event_tx
            .send(AppEvent::SuggestionsDue { generation, text })
            .await;
    })
}

/// Spawns the provider call against a snapshot of the tasks.
fn spawn_request(
    generation: u64,
    text: String,
    tasks: Vec<Task>,
    provider: Arc<dyn SuggestionProvider>,
    event_tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = provider.suggest(&text, &tasks).await;
        let _ = event_tx
            .send(AppEvent::SuggestionsReady { generation, result })
            .await;
    })
}

impl App {
    /// Reacts to a change of the composer text.
    ///
    /// Short input shows the placeholder without computing anything; longer
    /// input schedules a new debounced request, cancelling the previous one.
    pub(crate) fn on_input_changed(&mut self) {
        self.cancel_suggestions();

        let text = self.input.text();
        if !should_suggest(&text) {
            self.suggestions.panel = SuggestionPanel::Placeholder;
            return;
        }

        let generation = self.suggestions.generation;
        debug!(generation, "scheduling suggestions");
        self.suggestions.pending = Some(spawn_debounce(
            generation,
            text.trim().to_string(),
            self.timing.debounce,
            self.event_tx.clone(),
        ));
    }

    /// Aborts the pending request and invalidates any of its in-flight events.
    pub(crate) fn cancel_suggestions(&mut self) {
        if let Some(handle) = self.suggestions.pending.take() {
            handle.abort();
        }
        self.suggestions.generation = self.suggestions.generation.wrapping_add(1);
    }

    /// Handles a suggestion event from a background task.
    pub(crate) fn handle_suggestion_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SuggestionsDue { generation, text } => {
                if generation != self.suggestions.generation {
                    return;
                }
                debug!(generation, "requesting suggestions");
                self.suggestions.panel = SuggestionPanel::Loading;
                self.suggestions.pending = Some(spawn_request(
                    generation,
                    text,
                    self.session.tasks().to_vec(),
                    Arc::clone(&self.provider),
                    self.event_tx.clone(),
                ));
            }
            AppEvent::SuggestionsReady { generation, result } => {
                if generation != self.suggestions.generation {
                    debug!(generation, "dropping stale suggestions");
                    return;
                }
                self.suggestions.pending = None;
                self.show_suggestions(result);
            }
        }
    }

    fn show_suggestions(&mut self, result: Result<Vec<Suggestion>, SuggestionError>) {
        self.suggestions.panel = match result {
            Ok(suggestions) if suggestions.is_empty() => SuggestionPanel::NoSuggestions,
            Ok(suggestions) => SuggestionPanel::Showing {
                suggestions,
                selected: 0,
            },
            Err(e) => {
                warn!(error = %e, "suggestion request failed");
                SuggestionPanel::Error(SUGGESTION_ERROR_TEXT.to_string())
            }
        };
    }

    pub(crate) fn suggestion_up(&mut self) {
        if let SuggestionPanel::Showing { selected, .. } = &mut self.suggestions.panel {
            *selected = selected.saturating_sub(1);
        }
    }

    pub(crate) fn suggestion_down(&mut self) {
        let count = self.suggestions.entries().len();
        if let SuggestionPanel::Showing { selected, .. } = &mut self.suggestions.panel {
            *selected = (*selected + 1).min(count.saturating_sub(1));
        }
    }

    /// Activates the highlighted suggestion.
    ///
    /// A similar task copies its text into the composer and resets the panel.
    /// Any other suggestion replaces the panel with a confirmation message.
    /// Neither touches the task store.
    pub fn activate_suggestion(&mut self) {
        let Some(entry) = self.suggestions.selected_entry() else {
            return;
        };

        match entry {
            SuggestionEntry::Similar(similar) => {
                let Some(task) = self.session.store().get(similar.id) else {
                    return;
                };
                let text = task.text.clone();
                self.input.set_text(&text);
                self.cancel_suggestions();
                self.suggestions.panel = SuggestionPanel::Placeholder;
            }
            SuggestionEntry::Action { kind, .. } => {
                let text = self.input.text();
                self.suggestions.panel = SuggestionPanel::Message(kind.confirmation(text.trim()));
            }
        }
    }
}
