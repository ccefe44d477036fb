//! Custom TUI widgets.

pub mod suggestion_panel;
pub mod task_list;

pub use suggestion_panel::{
    NO_SUGGESTIONS, SUGGESTION_LOADING, SUGGESTION_PLACEHOLDER, SuggestionEntry, SuggestionPanel,
    SuggestionPanelWidget, suggestion_entries,
};
pub use task_list::{TaskListWidget, TaskRow, empty_state_text, scroll_offset, truncate_to_width};
