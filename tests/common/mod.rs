#![allow(dead_code)]

use deptree::store::TaskStore;
use deptree::types::{TaskId, TaskStatus};

pub use deptree_test_utils::init_tracing;

pub fn id(s: &str) -> TaskId {
    TaskId::from(s)
}

/// Status of each task, in insertion order.
pub fn statuses(store: &TaskStore) -> Vec<TaskStatus> {
    store.tasks().iter().map(|t| store.status_of(t)).collect()
}

/// Titles of the given tasks, for order assertions.
pub fn titles(tasks: &[&deptree::dag::Task]) -> Vec<String> {
    tasks.iter().map(|t| t.title.clone()).collect()
}

/// Add a task and return its generated id.
pub fn add(store: &mut TaskStore, title: &str, deps: &[&TaskId]) -> TaskId {
    store
        .add_task(title, deps.iter().map(|d| (*d).clone()))
        .expect("task should be added")
        .id
        .clone()
}
