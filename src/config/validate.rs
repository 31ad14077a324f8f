// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{RawTaskFile, TaskFile};
use crate::dag::DagGraph;
use crate::errors::{DeptreeError, Result};
use crate::types::{DanglingPolicy, TaskId};

impl TryFrom<RawTaskFile> for TaskFile {
    type Error = DeptreeError;

    fn try_from(raw: RawTaskFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_task_file(&raw)?;
        Ok(TaskFile::new_unchecked(raw.config, raw.task))
    }
}

fn validate_raw_task_file(file: &RawTaskFile) -> Result<()> {
    validate_global_config(file)?;
    validate_tasks(file)?;
    validate_dependencies(file)?;
    validate_dag(file)?;
    Ok(())
}

fn validate_global_config(file: &RawTaskFile) -> Result<()> {
    // dangling_dependencies is strongly typed and checked by serde.

    if file.config.next_actions_limit == 0 {
        return Err(DeptreeError::ConfigError(
            "[config].next_actions_limit must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_tasks(file: &RawTaskFile) -> Result<()> {
    let mut seen: HashSet<&TaskId> = HashSet::new();
    for task in file.task.iter() {
        if task.title.trim().is_empty() {
            return Err(DeptreeError::ConfigError(format!(
                "task '{}' has a blank title",
                task.id
            )));
        }
        if !seen.insert(&task.id) {
            return Err(DeptreeError::DuplicateId(task.id.clone()));
        }
    }
    Ok(())
}

fn validate_dependencies(file: &RawTaskFile) -> Result<()> {
    let known: HashSet<&TaskId> = file.task.iter().map(|t| &t.id).collect();
    let reject_dangling = file.config.dangling_dependencies == DanglingPolicy::Reject;

    for task in file.task.iter() {
        for dep in task.dependencies.iter() {
            if dep == &task.id {
                return Err(DeptreeError::SelfDependency(task.id.clone()));
            }
            if reject_dangling && !known.contains(dep) {
                return Err(DeptreeError::DanglingDependency {
                    task: task.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

fn validate_dag(file: &RawTaskFile) -> Result<()> {
    let mut graph = DagGraph::new();
    for task in file.task.iter() {
        graph.add_task(&task.id, &task.dependencies);
    }

    match graph.find_cycle() {
        None => Ok(()),
        Some(id) => Err(DeptreeError::DependencyCycle(format!(
            "cycle detected in task dependencies involving task '{}'",
            id
        ))),
    }
}
