//! File system operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod kv;
pub mod persist;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use persist::{Storage, TASKS_KEY, THEME_KEY, decode_tasks, encode_tasks};

/// Default data directory, relative to the working directory.
pub const DATA_DIR: &str = ".taskpad";

/// Holds all taskpad-related paths derived from a data directory.
///
/// This struct enables dependency injection of filesystem paths, allowing
/// tests to use isolated temporary directories instead of the actual
/// working directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use taskpad::fs::DataPaths;
///
/// let paths = DataPaths::new(Path::new("/tmp/test"));
/// assert_eq!(paths.key_file("tasks"), Path::new("/tmp/test/tasks"));
/// ```
#[derive(Debug, Clone)]
pub struct DataPaths {
    base: PathBuf,
}

impl DataPaths {
    /// Creates paths rooted at the given data directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at `.taskpad` under the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::new(&cwd.join(DATA_DIR)))
    }

    /// Returns the data directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the file backing the value stored under `key`.
    #[must_use]
    pub fn key_file(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }

    /// Ensures the data directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if !self.base.exists() {
            std::fs::create_dir_all(&self.base)?;
        }
        Ok(())
    }
}
