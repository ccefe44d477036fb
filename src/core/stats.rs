//! Remaining-count and empty-state reporting.

use super::filter::{FilterMode, filtered_view};
use super::task::Task;

/// Number of tasks not yet completed.
#[must_use]
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// Formats the remaining count as shown in the stats line.
#[must_use]
pub fn remaining_label(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{count} {noun} remaining")
}

/// Returns true when the filtered view for `mode` has no tasks.
#[must_use]
pub fn is_empty_view(tasks: &[Task], mode: FilterMode) -> bool {
    filtered_view(tasks, mode).is_empty()
}
