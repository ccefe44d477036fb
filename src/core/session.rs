//! Application session: the task store plus the process-wide UI selections.
//!
//! All mutations go through [`Session`], which writes the full task list back
//! to storage after every change. The in-memory store always reflects the
//! mutation before the write is attempted; a failed write is reported to the
//! caller but never rolls the store back.

use tracing::debug;

use super::filter::{FilterMode, filtered_view};
use super::stats::{is_empty_view, remaining_count};
use super::store::TaskStore;
use super::task::{Task, TaskId};
use crate::fs::{Storage, StorageError};

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parses a stored theme name. Anything other than `dark` is light.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Returns the stored name for this theme.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Toggles between the two themes.
    #[must_use]
    pub const fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Explicit owner of the task store, filter mode and theme.
pub struct Session {
    store: TaskStore,
    filter: FilterMode,
    theme: ThemeMode,
    storage: Storage,
}

impl Session {
    /// Loads tasks and theme from `storage`.
    ///
    /// Missing or malformed data yields an empty store and the light theme.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let store = TaskStore::from_tasks(storage.load_tasks());
        let theme = storage.load_theme();
        Self {
            store,
            filter: FilterMode::default(),
            theme,
            storage,
        }
    }

    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// All tasks in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    #[must_use]
    pub const fn filter(&self) -> FilterMode {
        self.filter
    }

    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Selects the filter mode. Filter changes are not persisted.
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// Tasks visible under the current filter.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filtered_view(self.store.tasks(), self.filter)
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        remaining_count(self.store.tasks())
    }

    /// Whether the current filter shows no tasks.
    #[must_use]
    pub fn is_empty_view(&self) -> bool {
        is_empty_view(self.store.tasks(), self.filter)
    }

    /// Adds a task. Blank text is ignored and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the task was added but could not be saved.
    pub fn add_task(&mut self, text: &str) -> Result<Option<Task>, StorageError> {
        let Some(task) = self.store.add(text).cloned() else {
            return Ok(None);
        };
        debug!(id = %task.id, "added task");
        self.persist_tasks()?;
        Ok(Some(task))
    }

    /// Flips a task's completed flag. Returns `Ok(false)` for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the change could not be saved.
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<bool, StorageError> {
        if !self.store.toggle_complete(id) {
            return Ok(false);
        }
        debug!(%id, "toggled completion");
        self.persist_tasks()?;
        Ok(true)
    }

    /// Flips a task's priority flag. Returns `Ok(false)` for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the change could not be saved.
    pub fn toggle_priority(&mut self, id: TaskId) -> Result<bool, StorageError> {
        if !self.store.toggle_priority(id) {
            return Ok(false);
        }
        debug!(%id, "toggled priority");
        self.persist_tasks()?;
        Ok(true)
    }

    /// Deletes a task. Returns `Ok(false)` for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the change could not be saved.
    pub fn delete_task(&mut self, id: TaskId) -> Result<bool, StorageError> {
        if !self.store.delete(id) {
            return Ok(false);
        }
        debug!(%id, "deleted task");
        self.persist_tasks()?;
        Ok(true)
    }

    /// Removes all completed tasks and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the change could not be saved.
    pub fn clear_completed(&mut self) -> Result<usize, StorageError> {
        let removed = self.store.clear_completed();
        debug!(removed, "cleared completed tasks");
        self.persist_tasks()?;
        Ok(removed)
    }

    /// Switches theme and persists the choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme could not be saved. The in-memory theme
    /// is switched regardless.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode, StorageError> {
        self.theme = self.theme.toggle();
        self.storage.save_theme(self.theme)?;
        Ok(self.theme)
    }

    fn persist_tasks(&mut self) -> Result<(), StorageError> {
        self.storage.save_tasks(self.store.tasks())
    }
}
