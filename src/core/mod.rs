//! Task-list domain logic.
//!
//! - `task` - task records and id issuance
//! - `store` - ordered in-memory task collection
//! - `filter` - filter modes and the filtered view
//! - `stats` - remaining count and empty-state checks
//! - `session` - store + filter + theme with write-through persistence
//! - `suggest` - suggestion generation and providers

pub mod filter;
pub mod session;
pub mod stats;
pub mod store;
pub mod suggest;
pub mod task;

pub use filter::{FilterMode, filtered_view};
pub use session::{Session, ThemeMode};
pub use stats::{is_empty_view, remaining_count, remaining_label};
pub use store::TaskStore;
pub use suggest::{
    ActionKind, MockSuggestionProvider, SimilarTask, Suggestion, SuggestionError,
    SuggestionKind, SuggestionProvider, SuggestionTiming, generate_suggestions, should_suggest,
};
pub use task::{IdIssuer, Task, TaskId};
