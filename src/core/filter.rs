//! Filter modes and the filtered view.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Subset of tasks shown in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
    /// Starred tasks.
    Priority,
}

impl FilterMode {
    /// Returns all modes in tab order.
    #[must_use]
    pub fn all() -> &'static [FilterMode] {
        &[
            FilterMode::All,
            FilterMode::Active,
            FilterMode::Completed,
            FilterMode::Priority,
        ]
    }

    /// Returns whether `task` belongs to this mode's view.
    #[must_use]
    pub const fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
            Self::Priority => task.priority,
        }
    }

    /// Cycles to the next mode.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::Priority,
            Self::Priority => Self::All,
        }
    }

    /// Cycles to the previous mode.
    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::All => Self::Priority,
            Self::Active => Self::All,
            Self::Completed => Self::Active,
            Self::Priority => Self::Completed,
        }
    }

    /// Returns the display name for this mode.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Priority => "Priority",
        }
    }
}

/// Returns the tasks visible under `mode`, in store order.
#[must_use]
pub fn filtered_view(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|task| mode.matches(task)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::core::TaskStore;

    fn sample() -> TaskStore {
        let mut store = TaskStore::new();
        let a = store.add("A").unwrap().id;
        let b = store.add("B").unwrap().id;
        store.add("C");
        let d = store.add("D").unwrap().id;
        store.toggle_complete(a);
        store.toggle_complete(d);
        store.toggle_priority(b);
        store.toggle_priority(d);
        store
    }

    fn view_texts(store: &TaskStore, mode: FilterMode) -> Vec<&str> {
        filtered_view(store.tasks(), mode)
            .into_iter()
            .map(|t| t.text.as_str())
            .collect()
    }

    #[test]
    fn each_mode_selects_its_subset() {
        let store = sample();

        assert_eq!(view_texts(&store, FilterMode::All), vec!["A", "B", "C", "D"]);
        assert_eq!(view_texts(&store, FilterMode::Active), vec!["B", "C"]);
        assert_eq!(view_texts(&store, FilterMode::Completed), vec!["A", "D"]);
        assert_eq!(view_texts(&store, FilterMode::Priority), vec!["B", "D"]);
    }

    #[test]
    fn views_preserve_store_order() {
        let store = sample();
        for mode in FilterMode::all() {
            let ids: Vec<_> = filtered_view(store.tasks(), *mode)
                .iter()
                .map(|t| t.id)
                .collect();
            assert!(ids.windows(2).all(|w| w[0] < w[1]), "{mode:?} reordered");
        }
    }

    #[test]
    fn active_filter_hides_completed_task() {
        let mut store = TaskStore::new();
        let a = store.add("A").unwrap().id;
        store.add("B");
        store.toggle_complete(a);

        assert_eq!(view_texts(&store, FilterMode::Active), vec!["B"]);
    }

    #[test]
    fn next_and_prev_cycle_through_every_mode() {
        let mut mode = FilterMode::All;
        for expected in [
            FilterMode::Active,
            FilterMode::Completed,
            FilterMode::Priority,
            FilterMode::All,
        ] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
        for mode in FilterMode::all() {
            assert_eq!(mode.next().prev(), *mode);
        }
    }

    #[test]
    fn serializes_as_lowercase() {
        assert_eq!(
            serde_json::to_string(&FilterMode::Priority).unwrap(),
            "\"priority\""
        );
    }
}
