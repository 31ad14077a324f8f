// src/config/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DanglingPolicy, TaskId};

/// Task file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// dangling_dependencies = "tolerate"
/// next_actions_limit = 3
///
/// [[task]]
/// id = "1"
/// title = "Read Chapter 1"
/// completed = true
///
/// [[task]]
/// id = "2"
/// title = "Take Notes"
/// dependencies = ["1"]
/// estimated_hours = 2
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTaskFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// Tasks in display (insertion) order, from `[[task]]` tables.
    #[serde(default)]
    pub task: Vec<TaskRecord>,
}

/// `[config]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSection {
    /// `"tolerate"` (default) or `"reject"`.
    #[serde(default)]
    pub dangling_dependencies: DanglingPolicy,

    /// How many available tasks `next` lists.
    #[serde(default = "default_next_actions_limit")]
    pub next_actions_limit: usize,

    /// Estimate given to tasks that do not state their own.
    #[serde(default = "default_estimated_hours")]
    pub default_estimated_hours: u32,
}

fn default_next_actions_limit() -> usize {
    3
}

fn default_estimated_hours() -> u32 {
    1
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            dangling_dependencies: DanglingPolicy::default(),
            next_actions_limit: default_next_actions_limit(),
            default_estimated_hours: default_estimated_hours(),
        }
    }
}

/// One `[[task]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,

    pub title: String,

    #[serde(default)]
    pub completed: bool,

    /// Ids of tasks that must be completed first.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// A task file that passed validation.
///
/// Only constructible through `TryFrom<RawTaskFile>` (see `validate.rs`)
/// or from a store, which upholds the same invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFile {
    config: ConfigSection,
    tasks: Vec<TaskRecord>,
}

impl TaskFile {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: Vec<TaskRecord>) -> Self {
        Self { config, tasks }
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn into_raw(self) -> RawTaskFile {
        RawTaskFile {
            config: self.config,
            task: self.tasks,
        }
    }

    /// Starter study plan written by `deptree init`.
    pub fn sample() -> Self {
        let record = |id: &str, title: &str, completed: bool, deps: &[&str], hours: u32| {
            TaskRecord {
                id: TaskId::from(id),
                title: title.to_string(),
                completed,
                dependencies: deps.iter().map(|d| TaskId::from(*d)).collect(),
                estimated_hours: Some(hours),
                completed_at: None,
            }
        };

        Self::new_unchecked(
            ConfigSection::default(),
            vec![
                record("1", "Read Chapter 1", true, &[], 2),
                record("2", "Complete Practice Problems", true, &["1"], 3),
                record("3", "Write Summary", false, &["1", "2"], 1),
                record("4", "Review with Peers", false, &["3"], 2),
                record("5", "Final Review", false, &["4"], 1),
            ],
        )
    }
}
