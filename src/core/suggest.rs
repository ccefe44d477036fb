//! Smart suggestions for in-progress task text.
//!
//! Suggestions are produced by a [`SuggestionProvider`]. The bundled
//! [`MockSuggestionProvider`] simulates a remote service: it waits a fixed
//! latency and then derives suggestions locally with
//! [`generate_suggestions`]. Debouncing and cancellation live in the app
//! layer, which owns the request lifecycle.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::task::{Task, TaskId};

/// Minimum trimmed input length (in chars) that triggers a computation.
pub const MIN_QUERY_CHARS: usize = 2;

/// Maximum number of entries in the "similar tasks" group.
pub const MAX_SIMILAR_TASKS: usize = 3;

/// Quiet period after the last input change before suggestions are requested.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Simulated provider latency.
pub const SUGGESTION_LATENCY: Duration = Duration::from_millis(800);

/// Timing knobs for the suggestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTiming {
    /// Quiet period before a request is issued.
    pub debounce: Duration,
    /// Simulated latency of the mock provider.
    pub latency: Duration,
}

impl Default for SuggestionTiming {
    fn default() -> Self {
        Self {
            debounce: SUGGESTION_DEBOUNCE,
            latency: SUGGESTION_LATENCY,
        }
    }
}

/// Errors produced while computing suggestions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestionError {
    /// The provider could not produce suggestions.
    #[error("suggestion provider failed: {0}")]
    Provider(String),
}

/// A task surfaced in the "similar tasks" group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarTask {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl From<&Task> for SimilarTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}

/// Kind of a suggestion, used for icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Similar,
    Category,
    Reminder,
    Delegate,
}

/// A suggestion that is confirmed rather than copied into the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Category,
    Reminder,
    Delegate,
}

impl ActionKind {
    /// Message shown after the user picks a suggestion of this kind.
    ///
    /// `text` is the trimmed input at the time of selection.
    #[must_use]
    pub fn confirmation(&self, text: &str) -> String {
        match self {
            Self::Category => format!("Task \"{text}\" is now categorized."),
            Self::Reminder => format!("Reminder set for task \"{text}\"!"),
            Self::Delegate => format!("Task \"{text}\" has been delegated."),
        }
    }
}

/// A single suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// Existing tasks whose text contains the input. Never empty.
    Similar(Vec<SimilarTask>),
    /// File the task under the category named by the first input token.
    Category(String),
    /// Set a reminder for the task.
    Reminder,
    /// Hand the task to someone else.
    Delegate(String),
}

impl Suggestion {
    #[must_use]
    pub const fn kind(&self) -> SuggestionKind {
        match self {
            Self::Similar(_) => SuggestionKind::Similar,
            Self::Category(_) => SuggestionKind::Category,
            Self::Reminder => SuggestionKind::Reminder,
            Self::Delegate(_) => SuggestionKind::Delegate,
        }
    }

    /// The action behind a single-line suggestion, `None` for the
    /// similar-tasks group.
    #[must_use]
    pub const fn action_kind(&self) -> Option<ActionKind> {
        match self {
            Self::Similar(_) => None,
            Self::Category(_) => Some(ActionKind::Category),
            Self::Reminder => Some(ActionKind::Reminder),
            Self::Delegate(_) => Some(ActionKind::Delegate),
        }
    }

    /// Display text for single-line suggestions.
    ///
    /// The similar-tasks group renders its entries individually and only
    /// uses this as its heading.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Similar(_) => "Similar tasks:".to_string(),
            Self::Category(category) => format!("Add to \"{category}\" category"),
            Self::Reminder => "Set reminder for this task".to_string(),
            Self::Delegate(text) => format!("Delegate \"{text}\" to someone"),
        }
    }
}

/// Returns whether `text` is long enough to request suggestions.
#[must_use]
pub fn should_suggest(text: &str) -> bool {
    text.trim().chars().count() >= MIN_QUERY_CHARS
}

/// Derives suggestions for `text` from the current tasks.
///
/// The similar-tasks group holds up to [`MAX_SIMILAR_TASKS`] tasks whose text
/// contains the input case-insensitively, in store order, and is omitted when
/// nothing matches.
#[must_use]
pub fn generate_suggestions(text: &str, tasks: &[Task]) -> Vec<Suggestion> {
    let text = text.trim();
    let needle = text.to_lowercase();

    let similar: Vec<SimilarTask> = tasks
        .iter()
        .filter(|task| task.text.to_lowercase().contains(&needle))
        .take(MAX_SIMILAR_TASKS)
        .map(SimilarTask::from)
        .collect();

    let category = text.split_whitespace().next().unwrap_or_default();

    let mut suggestions = Vec::with_capacity(4);
    if !similar.is_empty() {
        suggestions.push(Suggestion::Similar(similar));
    }
    suggestions.push(Suggestion::Category(category.to_string()));
    suggestions.push(Suggestion::Reminder);
    suggestions.push(Suggestion::Delegate(text.to_string()));
    suggestions
}

/// Source of suggestions.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Computes suggestions for `text` against a snapshot of the tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot produce suggestions.
    async fn suggest(
        &self,
        text: &str,
        tasks: &[Task],
    ) -> Result<Vec<Suggestion>, SuggestionError>;

    /// Returns the display name for this provider.
    fn name(&self) -> &'static str;
}

/// Provider that simulates network latency and computes suggestions locally.
#[derive(Debug, Clone)]
pub struct MockSuggestionProvider {
    latency: Duration,
}

impl MockSuggestionProvider {
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockSuggestionProvider {
    fn default() -> Self {
        Self::new(SUGGESTION_LATENCY)
    }
}

#[async_trait]
impl SuggestionProvider for MockSuggestionProvider {
    async fn suggest(
        &self,
        text: &str,
        tasks: &[Task],
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        tokio::time::sleep(self.latency).await;
        Ok(generate_suggestions(text, tasks))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
