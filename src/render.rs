// src/render.rs

//! Plain-text views of a task store, as printed by the CLI.

use std::fmt::Write;

use crate::dag::Task;
use crate::store::TaskStore;
use crate::types::TaskStatus;

/// Tasks grouped by level, one line per task with its status and what it
/// waits on.
///
/// ```text
/// Level 1
///   [x] Read Chapter 1 (1) - Completed, 2h
/// Level 2
///   [ ] Take Notes (2) - Available, 1h
///       depends on: Read Chapter 1 (done)
/// ```
pub fn render_tree(store: &TaskStore) -> String {
    let mut out = String::new();

    if store.is_empty() {
        out.push_str("no tasks\n");
        return out;
    }

    for (level, tasks) in store.level_groups().iter().enumerate() {
        let _ = writeln!(out, "Level {}", level + 1);
        for task in tasks {
            render_task_line(&mut out, store, task);
        }
    }

    out
}

fn render_task_line(out: &mut String, store: &TaskStore, task: &Task) {
    let status = store.status_of(task);
    let marker = match status {
        TaskStatus::Completed => "[x]",
        TaskStatus::Available => "[ ]",
        TaskStatus::Blocked => "[-]",
    };
    let _ = writeln!(
        out,
        "  {marker} {} ({}) - {status}, {}h",
        task.title, task.id, task.estimated_hours
    );

    let labels = store.dependency_labels(task);
    if !labels.is_empty() {
        let deps: Vec<String> = labels
            .iter()
            .map(|l| {
                let state = if l.is_dangling() {
                    "missing"
                } else if l.completed {
                    "done"
                } else {
                    "pending"
                };
                format!("{} ({state})", l.display_title())
            })
            .collect();
        let _ = writeln!(out, "      depends on: {}", deps.join(", "));
    }
}

/// Counts per status, percentage and remaining hours.
pub fn render_summary(store: &TaskStore) -> String {
    let s = store.summary();
    format!(
        "{}/{} completed ({:.0}%), {} available, {} blocked, {}h remaining\n",
        s.completed,
        s.total,
        s.percent_complete(),
        s.available,
        s.blocked,
        s.remaining_hours
    )
}

/// The next few actionable tasks.
pub fn render_next_actions(store: &TaskStore) -> String {
    let next = store.next_actions();
    if next.is_empty() {
        return "nothing available\n".to_string();
    }

    let mut out = String::new();
    for task in next {
        let _ = writeln!(
            out,
            "- {} ({}) - {}h estimated",
            task.title, task.id, task.estimated_hours
        );
    }
    out
}
