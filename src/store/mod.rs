// src/store/mod.rs

//! The task store: the ordered task collection plus every query and
//! mutation the views need.
//!
//! Derived state (levels, availability, status, counts) is recomputed from
//! the collection on each call; nothing derived is cached between
//! mutations.

pub mod summary;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::model::{ConfigSection, TaskFile};
use crate::dag::{DagGraph, LevelMap, LevelResolver, NewTask, Task, compute_levels};
use crate::errors::{DeptreeError, Result};
use crate::types::{DanglingPolicy, TaskId, TaskStatus};

pub use summary::{DependencyLabel, ProgressSummary};

/// Result of a completion toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The task was available and is now completed.
    Completed,
    /// The task was completed and is now incomplete again.
    Reopened,
    /// The task is incomplete and some dependency is not completed (or does
    /// not exist); nothing changed.
    Blocked,
    /// No task has this id; nothing changed.
    UnknownId,
}

/// Ordered task collection with its dependency graph.
///
/// Invariants upheld by every mutation:
/// - ids are unique,
/// - the dependency relation is acyclic,
/// - a task only becomes completed while all of its dependencies are.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    /// Insertion order is display order.
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
    graph: DagGraph,
    config: ConfigSection,
}

impl TaskStore {
    pub fn new(config: ConfigSection) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a store from a validated task file.
    pub fn from_task_file(file: &TaskFile) -> Self {
        let config = file.config().clone();
        let default_hours = config.default_estimated_hours;
        let mut store = TaskStore::new(config);

        for record in file.tasks() {
            store.push(Task::from_record(record, default_hours));
        }

        debug!(tasks = store.len(), "task store loaded");
        store
    }

    /// Snapshot the store in its persisted form.
    pub fn to_task_file(&self) -> TaskFile {
        TaskFile::new_unchecked(
            self.config.clone(),
            self.tasks.iter().map(Task::to_record).collect(),
        )
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.index.get(id).map(|&idx| &self.tasks[idx])
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.index.contains_key(id)
    }

    /// Add a task with a fresh id.
    ///
    /// Returns `None` without touching the collection when the title is
    /// blank, or when a dependency does not resolve and the store rejects
    /// dangling dependencies. Under the default policy dangling ids are
    /// accepted and keep the task blocked.
    pub fn add_task(
        &mut self,
        title: &str,
        dependencies: impl IntoIterator<Item = TaskId>,
    ) -> Option<&Task> {
        let mut new = NewTask::new(title);
        new.dependencies.extend(dependencies);
        self.add(new)
    }

    /// Like [`TaskStore::add_task`], with an explicit estimate.
    pub fn add(&mut self, new: NewTask) -> Option<&Task> {
        let title = new.title.trim();
        if title.is_empty() {
            debug!("add with blank title; ignoring");
            return None;
        }

        if let Some(dep) = new.dependencies.iter().find(|d| !self.contains(d)) {
            match self.config.dangling_dependencies {
                DanglingPolicy::Reject => {
                    warn!(title = %title, dep = %dep, "add refused: unknown dependency");
                    return None;
                }
                DanglingPolicy::Tolerate => {
                    debug!(title = %title, dep = %dep, "adding task with unknown dependency; it stays blocked");
                }
            }
        }

        let id = self.fresh_id();
        let hours = new
            .estimated_hours
            .unwrap_or(self.config.default_estimated_hours);
        let task = Task::new(id, title, new.dependencies, hours);

        debug!(task = %task.id, title = %task.title, deps = ?task.dependencies, "task added");
        Some(self.push(task))
    }

    /// Insert a task that carries its own id.
    ///
    /// The id must not already be named as a dependency: a dangling
    /// reference stays unresolved for the life of the collection, so the
    /// tasks holding it stay blocked. Nothing is modified on error.
    pub fn insert_task(&mut self, mut task: Task) -> Result<&Task> {
        task.title = task.title.trim().to_string();
        if task.title.is_empty() {
            return Err(DeptreeError::InvalidTitle);
        }

        if self.contains(&task.id) {
            return Err(DeptreeError::DuplicateId(task.id));
        }
        if task.dependencies.contains(&task.id) {
            return Err(DeptreeError::SelfDependency(task.id));
        }
        if self.config.dangling_dependencies == DanglingPolicy::Reject {
            if let Some(dep) = task.dependencies.iter().find(|d| !self.contains(d)) {
                return Err(DeptreeError::DanglingDependency {
                    task: task.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }
        if let Some(dep) = self.graph.would_create_cycle(&task.id, &task.dependencies) {
            warn!(task = %task.id, dep = %dep, "insert refused: dependency would close a cycle");
            return Err(DeptreeError::DependencyCycle(format!(
                "task '{}' depending on '{}' would close a cycle",
                task.id, dep
            )));
        }
        if let Some(dependent) = self.graph.dependents_of(&task.id).first() {
            warn!(task = %task.id, dependent = %dependent, "insert refused: id is a dangling dependency");
            return Err(DeptreeError::ReferencedId {
                id: task.id.clone(),
                dependent: dependent.clone(),
            });
        }

        debug!(task = %task.id, title = %task.title, deps = ?task.dependencies, "task inserted");
        Ok(self.push(task))
    }

    /// Flip completion of `id`, stamping completion with the current time.
    ///
    /// Unknown ids are tolerated: the call is a no-op reported as
    /// [`ToggleOutcome::UnknownId`], never an error.
    pub fn toggle_complete(&mut self, id: &TaskId) -> ToggleOutcome {
        self.toggle_complete_at(id, Utc::now())
    }

    /// [`TaskStore::toggle_complete`] with an explicit completion time.
    pub fn toggle_complete_at(&mut self, id: &TaskId, at: DateTime<Utc>) -> ToggleOutcome {
        let Some(&idx) = self.index.get(id) else {
            debug!(task = %id, "toggle for unknown task; ignoring");
            return ToggleOutcome::UnknownId;
        };

        if self.tasks[idx].is_completed() {
            self.tasks[idx].reopen();
            debug!(task = %id, "task reopened");
            return ToggleOutcome::Reopened;
        }

        if !self.is_available(&self.tasks[idx]) {
            warn!(task = %id, "toggle refused: dependencies not completed");
            return ToggleOutcome::Blocked;
        }

        self.tasks[idx].mark_completed(at);
        debug!(task = %id, "task completed");
        ToggleOutcome::Completed
    }

    /// Change a task's title. Returns `false` for unknown ids and blank
    /// titles, leaving the task unchanged.
    pub fn rename_task(&mut self, id: &TaskId, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        match self.index.get(id) {
            Some(&idx) => {
                debug!(task = %id, title = %title, "task renamed");
                self.tasks[idx].title = title.to_string();
                true
            }
            None => false,
        }
    }

    /// All dependencies resolve to completed tasks. True for a task without
    /// dependencies; false while any dependency id is dangling.
    pub fn is_available(&self, task: &Task) -> bool {
        task.dependencies
            .iter()
            .all(|dep| self.get(dep).is_some_and(Task::is_completed))
    }

    pub fn status_of(&self, task: &Task) -> TaskStatus {
        if task.is_completed() {
            TaskStatus::Completed
        } else if self.is_available(task) {
            TaskStatus::Available
        } else {
            TaskStatus::Blocked
        }
    }

    /// Longest chain of resolvable dependencies below `task`.
    ///
    /// Read from `task.dependencies`, so a task that is not (yet) in the
    /// store gets the level it would have once inserted.
    pub fn level(&self, task: &Task) -> usize {
        let mut resolver = LevelResolver::new(&self.graph);
        task.dependencies
            .iter()
            .filter(|dep| self.contains(dep))
            .map(|dep| resolver.level_of(dep) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Level of every task in one pass.
    pub fn levels(&self) -> LevelMap {
        compute_levels(&self.graph)
    }

    /// Tasks ordered by ascending level; equal levels keep insertion order.
    ///
    /// This is a display grouping, not an execution order: within a level,
    /// nothing orders a task after the tasks it waits on.
    pub fn sorted_by_level(&self) -> Vec<&Task> {
        let levels = self.levels();
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by_key(|t| levels.get(&t.id).unwrap_or(0));
        sorted
    }

    /// Tasks grouped by level, index = level. Levels are contiguous, so no
    /// group is empty.
    pub fn level_groups(&self) -> Vec<Vec<&Task>> {
        let levels = self.levels();
        let Some(max) = levels.max_level() else {
            return Vec::new();
        };

        let mut groups: Vec<Vec<&Task>> = vec![Vec::new(); max + 1];
        for task in &self.tasks {
            let level = levels.get(&task.id).unwrap_or(0);
            groups[level].push(task);
        }
        groups
    }

    pub fn tasks_at_level(&self, level: usize) -> Vec<&Task> {
        let levels = self.levels();
        self.tasks
            .iter()
            .filter(|t| levels.get(&t.id) == Some(level))
            .collect()
    }

    /// Tasks that list `task` as a dependency, in insertion order.
    pub fn dependents(&self, task: &Task) -> Vec<&Task> {
        let mut out: Vec<&Task> = self
            .graph
            .dependents_of(&task.id)
            .iter()
            .filter_map(|id| self.get(id))
            .collect();
        out.sort_by_key(|t| self.index.get(&t.id).copied().unwrap_or(usize::MAX));
        out
    }

    /// Counts per status plus remaining effort.
    pub fn summary(&self) -> ProgressSummary {
        let mut summary = ProgressSummary {
            total: self.tasks.len(),
            ..ProgressSummary::default()
        };

        for task in &self.tasks {
            match self.status_of(task) {
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::Available => summary.available += 1,
                TaskStatus::Blocked => summary.blocked += 1,
            }
            if !task.is_completed() {
                summary.remaining_hours += u64::from(task.estimated_hours);
            }
        }

        summary
    }

    /// The first few available tasks, in insertion order.
    pub fn next_actions(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.status_of(t) == TaskStatus::Available)
            .take(self.config.next_actions_limit)
            .collect()
    }

    /// One label per dependency of `task`, for display.
    pub fn dependency_labels(&self, task: &Task) -> Vec<DependencyLabel> {
        task.dependencies
            .iter()
            .map(|dep| match self.get(dep) {
                Some(found) => DependencyLabel {
                    id: dep.clone(),
                    title: Some(found.title.clone()),
                    completed: found.is_completed(),
                },
                None => DependencyLabel {
                    id: dep.clone(),
                    title: None,
                    completed: false,
                },
            })
            .collect()
    }

    /// Mint an id that is neither a task nor named by any dependency, so a
    /// new task can never close a cycle through an old dangling reference.
    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if !self.contains(&id) && !self.graph.is_referenced(&id) {
                return id;
            }
        }
    }

    fn push(&mut self, task: Task) -> &Task {
        let idx = self.tasks.len();
        self.graph.add_task(&task.id, &task.dependencies);
        self.index.insert(task.id.clone(), idx);
        self.tasks.push(task);
        &self.tasks[idx]
    }
}
