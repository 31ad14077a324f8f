// src/types.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Ids loaded from a task file are kept verbatim; ids minted by the store
/// are the simple (hyphen-less) form of a random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        TaskId(id.into())
    }

    /// Mint a new random id. Uniqueness against a particular collection is
    /// checked by the caller.
    pub fn generate() -> Self {
        TaskId(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        TaskId(s)
    }
}

/// Display status of a task, derived from its completion flag and the
/// completion of its dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Completed,
    Available,
    Blocked,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::Available => "Available",
            TaskStatus::Blocked => "Blocked",
        };
        f.write_str(s)
    }
}

/// What to do with a dependency id that names no task in the collection.
///
/// - `Tolerate`: accept it; the dependent task stays blocked for as long as
///   the id does not resolve (default).
/// - `Reject`: refuse to create the task (or load the file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    #[default]
    Tolerate,
    Reject,
}
