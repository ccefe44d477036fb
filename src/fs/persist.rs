//! Typed persistence of the task list and theme.
//!
//! Loading never fails: absent, unreadable, or malformed values fall back to
//! an empty task list and the light theme, with a warning in the log.

use tracing::{debug, warn};

use super::kv::{KeyValueStore, StorageError};
use crate::core::{Task, ThemeMode};

/// Key holding the serialized task array.
pub const TASKS_KEY: &str = "tasks";

/// Key holding the theme name.
pub const THEME_KEY: &str = "theme";

/// Decodes the stored task array.
///
/// # Errors
///
/// Returns an error if `raw` is not a JSON array of task records.
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Encodes tasks as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Typed wrapper around a [`KeyValueStore`].
pub struct Storage {
    kv: Box<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Loads the persisted tasks, or an empty list if none can be read.
    #[must_use]
    pub fn load_tasks(&self) -> Vec<Task> {
        let raw = match self.kv.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read stored tasks, starting empty");
                return Vec::new();
            }
        };

        match decode_tasks(&raw) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(error = %e, "stored tasks are malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Writes the full task list.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the underlying write fails.
    pub fn save_tasks(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = encode_tasks(tasks).map_err(|source| StorageError::Encode {
            key: TASKS_KEY.to_string(),
            source,
        })?;
        self.kv.set(TASKS_KEY, &raw)
    }

    /// Loads the persisted theme, defaulting to light.
    #[must_use]
    pub fn load_theme(&self) -> ThemeMode {
        match self.kv.get(THEME_KEY) {
            Ok(Some(raw)) => ThemeMode::parse(raw.trim()),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                warn!(error = %e, "could not read stored theme, using light");
                ThemeMode::default()
            }
        }
    }

    /// Writes the theme name.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn save_theme(&mut self, theme: ThemeMode) -> Result<(), StorageError> {
        self.kv.set(THEME_KEY, theme.name())
    }
}
