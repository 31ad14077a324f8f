// src/dag/task.rs

//! Task nodes and the inputs used to create them.

use chrono::{DateTime, Utc};

use crate::config::model::TaskRecord;
use crate::types::TaskId;

/// A unit of work with a fixed set of prerequisites.
///
/// `completed` and `completed_at` change only through the store's toggle
/// operation, so they are not public fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Direct prerequisites, deduplicated, in the order first given.
    pub dependencies: Vec<TaskId>,
    pub estimated_hours: u32,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// A fresh, incomplete task.
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        dependencies: impl IntoIterator<Item = TaskId>,
        estimated_hours: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            dependencies: dedup_in_order(dependencies),
            estimated_hours,
            completed: false,
            completed_at: None,
        }
    }

    /// Rebuild a task from its persisted record.
    pub fn from_record(record: &TaskRecord, default_estimated_hours: u32) -> Self {
        let mut task = Task::new(
            record.id.clone(),
            record.title.trim(),
            record.dependencies.iter().cloned(),
            record.estimated_hours.unwrap_or(default_estimated_hours),
        );
        task.completed = record.completed;
        task.completed_at = if record.completed {
            record.completed_at
        } else {
            None
        };
        task
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            completed: self.completed,
            dependencies: self.dependencies.clone(),
            estimated_hours: Some(self.estimated_hours),
            completed_at: self.completed_at,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub(crate) fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(at);
    }

    pub(crate) fn reopen(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }
}

/// Description of a task to be added with a store-generated id.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub dependencies: Vec<TaskId>,
    /// `None` falls back to the store's default estimate.
    pub estimated_hours: Option<u32>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn depends_on(mut self, id: impl Into<TaskId>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    pub fn estimated_hours(mut self, hours: u32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }
}

fn dedup_in_order(ids: impl IntoIterator<Item = TaskId>) -> Vec<TaskId> {
    let mut out: Vec<TaskId> = Vec::new();
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
