#![allow(dead_code)]

use chrono::{DateTime, Utc};
use deptree::config::{ConfigSection, RawTaskFile, TaskFile, TaskRecord};
use deptree::store::TaskStore;
use deptree::types::{DanglingPolicy, TaskId};

/// Builder for `TaskFile` to simplify test setup.
pub struct TaskFileBuilder {
    file: RawTaskFile,
}

impl TaskFileBuilder {
    pub fn new() -> Self {
        Self {
            file: RawTaskFile {
                config: ConfigSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn with_task(mut self, task: TaskRecord) -> Self {
        self.file.task.push(task);
        self
    }

    pub fn dangling(mut self, policy: DanglingPolicy) -> Self {
        self.file.config.dangling_dependencies = policy;
        self
    }

    pub fn next_actions_limit(mut self, limit: usize) -> Self {
        self.file.config.next_actions_limit = limit;
        self
    }

    pub fn default_estimated_hours(mut self, hours: u32) -> Self {
        self.file.config.default_estimated_hours = hours;
        self
    }

    /// The unvalidated file, for tests that expect validation to fail.
    pub fn raw(self) -> RawTaskFile {
        self.file
    }

    pub fn build(self) -> TaskFile {
        TaskFile::try_from(self.file).expect("Failed to build valid task file from builder")
    }

    pub fn build_store(self) -> TaskStore {
        TaskStore::from_task_file(&self.build())
    }
}

impl Default for TaskFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskRecord`.
pub struct TaskRecordBuilder {
    task: TaskRecord,
}

impl TaskRecordBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            task: TaskRecord {
                id: TaskId::from(id),
                title: title.to_string(),
                completed: false,
                dependencies: vec![],
                estimated_hours: None,
                completed_at: None,
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(TaskId::from(dep));
        self
    }

    pub fn completed(mut self, val: bool) -> Self {
        self.task.completed = val;
        self
    }

    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.task.completed = true;
        self.task.completed_at = Some(at);
        self
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.task.estimated_hours = Some(hours);
        self
    }

    pub fn build(self) -> TaskRecord {
        self.task
    }
}
