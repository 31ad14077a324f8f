// src/store/summary.rs

//! Read-only aggregates computed by the store for progress views.

use crate::types::TaskId;

/// Task counts per status and remaining effort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub available: usize,
    pub blocked: usize,
    /// Sum of `estimated_hours` over incomplete tasks.
    pub remaining_hours: u64,
}

impl ProgressSummary {
    /// Share of completed tasks in percent; 0 for an empty collection.
    pub fn percent_complete(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 * 100.0 / self.total as f64
        }
    }
}

/// A dependency as shown next to the task that waits on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLabel {
    pub id: TaskId,
    /// `None` when the id does not resolve to a task.
    pub title: Option<String>,
    pub completed: bool,
}

impl DependencyLabel {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown")
    }

    pub fn is_dangling(&self) -> bool {
        self.title.is_none()
    }
}
