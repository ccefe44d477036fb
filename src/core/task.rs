//! Task records and id issuance.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier of a task.
///
/// Ids are integers so they serialize the same way as the stored `tasks`
/// array expects. See [`IdIssuer`] for how they are handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier, unique for the lifetime of the store.
    pub id: TaskId,
    /// Trimmed, non-empty task text.
    pub text: String,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
    /// Whether the task is starred.
    #[serde(default)]
    pub priority: bool,
    /// Creation time, serialized as an ISO-8601 string with millisecond precision.
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open, non-priority task.
    ///
    /// The caller is responsible for passing already-trimmed text.
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority: false,
            created_at,
        }
    }
}

/// Hands out task ids.
///
/// Ids are wall-clock milliseconds, bumped past the last issued id when the
/// clock has not advanced (or went backwards). This keeps ids strictly
/// increasing within a session and, because the issuer is seeded with the
/// largest id loaded from storage, never collides with a persisted task.
#[derive(Debug, Clone, Default)]
pub struct IdIssuer {
    last: u64,
}

impl IdIssuer {
    /// Creates an issuer that will only hand out ids above every id in `ids`.
    pub fn seeded<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = TaskId>,
    {
        Self {
            last: ids.into_iter().map(|id| id.0).max().unwrap_or(0),
        }
    }

    /// Issues the next id for a task created at `now`.
    pub fn issue(&mut self, now: DateTime<Utc>) -> TaskId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let next = millis.max(self.last.saturating_add(1));
        self.last = next;
        TaskId(next)
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
