//! In-memory ordered task collection.
//!
//! The store is the source of truth for the task list. It only knows about
//! ordering and the per-task flags; writing the result back to storage is the
//! job of [`Session`](super::Session), which wraps every mutation here with a
//! persistence write.
//!
//! Every operation either applies fully or not at all. Lookups by unknown id
//! are silent no-ops and report `false`.

use std::collections::HashSet;

use chrono::{DateTime, SubsecRound, Utc};
use tracing::warn;

use super::task::{IdIssuer, Task, TaskId};

/// Ordered collection of tasks in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdIssuer,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from previously persisted tasks, keeping their order.
    ///
    /// Records with blank text are dropped. The id issuer is seeded so that
    /// new ids never collide with loaded ones. A record whose id was already
    /// seen gets a fresh id, so every id in the store stays unique.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut tasks: Vec<Task> = tasks
            .into_iter()
            .filter(|task| !task.text.trim().is_empty())
            .collect();
        let mut ids = IdIssuer::seeded(tasks.iter().map(|task| task.id));

        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &mut tasks {
            if !seen.insert(task.id) {
                let old = task.id;
                task.id = ids.issue(task.created_at);
                warn!(%old, new = %task.id, "re-issued duplicate task id");
                seen.insert(task.id);
            }
        }
        Self { tasks, ids }
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Appends a new task created now.
    ///
    /// Returns `None` without touching the store when `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        self.add_at(text, Utc::now())
    }

    /// Appends a new task with an explicit creation time.
    ///
    /// The timestamp is truncated to milliseconds, the precision it is
    /// stored with.
    pub fn add_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let now = now.trunc_subsecs(3);
        let id = self.ids.issue(now);
        self.tasks.push(Task::new(id, text, now));
        self.tasks.last()
    }

    /// Flips the completed flag. Returns `false` if the id is unknown.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        self.get_mut(id).is_some_and(|task| {
            task.completed = !task.completed;
            true
        })
    }

    /// Flips the priority flag. Returns `false` if the id is unknown.
    pub fn toggle_priority(&mut self, id: TaskId) -> bool {
        self.get_mut(id).is_some_and(|task| {
            task.priority = !task.priority;
            true
        })
    }

    /// Removes the task with `id`. Returns `false` if the id is unknown.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }
}
