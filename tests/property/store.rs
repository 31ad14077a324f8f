use proptest::prelude::*;
use deptree::store::{TaskStore, ToggleOutcome};
use deptree::types::{TaskId, TaskStatus};

/// One step of a random editing session.
#[derive(Debug, Clone)]
enum Op {
    /// Add a task depending on earlier tasks (indices are reduced modulo
    /// the current length) and optionally on a dangling id.
    Add { title: String, deps: Vec<usize>, dangling: bool },
    /// Toggle the task at this index (modulo length).
    Toggle(usize),
    /// Toggle an id that is never a task.
    ToggleUnknown,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => ("[a-z ]{0,8}", proptest::collection::vec(any::<usize>(), 0..4), any::<bool>())
            .prop_map(|(title, deps, dangling)| Op::Add { title, deps, dangling }),
        3 => any::<usize>().prop_map(Op::Toggle),
        1 => Just(Op::ToggleUnknown),
    ]
}

/// Apply `ops` to a fresh store, checking the per-step properties.
fn run_session(ops: &[Op]) -> Result<TaskStore, TestCaseError> {
    let mut store = TaskStore::default();

    for op in ops {
        match op {
            Op::Add { title, deps, dangling } => {
                let before = store.len();
                let mut dep_ids: Vec<TaskId> = Vec::new();
                if before > 0 {
                    for d in deps {
                        dep_ids.push(store.tasks()[d % before].id.clone());
                    }
                }
                if *dangling {
                    dep_ids.push(TaskId::from("dangling"));
                }

                let added = store.add_task(title, dep_ids).map(|t| t.clone());
                if title.trim().is_empty() {
                    prop_assert!(added.is_none());
                    prop_assert_eq!(store.len(), before);
                } else {
                    let added = added.expect("non-blank title is added");
                    prop_assert_eq!(store.len(), before + 1);
                    prop_assert!(!added.is_completed());
                }
            }
            Op::Toggle(i) => {
                if store.is_empty() {
                    continue;
                }
                let task = store.tasks()[i % store.len()].clone();
                let status = store.status_of(&task);
                let outcome = store.toggle_complete(&task.id);
                let expected = match status {
                    TaskStatus::Completed => ToggleOutcome::Reopened,
                    TaskStatus::Available => ToggleOutcome::Completed,
                    TaskStatus::Blocked => ToggleOutcome::Blocked,
                };
                prop_assert_eq!(outcome, expected);
            }
            Op::ToggleUnknown => {
                let before = store.to_task_file();
                prop_assert_eq!(
                    store.toggle_complete(&TaskId::from("never-a-task")),
                    ToggleOutcome::UnknownId
                );
                prop_assert_eq!(store.to_task_file(), before);
            }
        }
    }

    Ok(store)
}

proptest! {
    #[test]
    fn mutations_keep_invariants(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let store = run_session(&ops)?;
        let levels = store.levels();

        for task in store.tasks() {
            // Every level exceeds the level of each resolvable dependency.
            let level = levels.get(&task.id).unwrap();
            prop_assert_eq!(level, store.level(task));
            for dep in &task.dependencies {
                if let Some(dep_level) = levels.get(dep) {
                    prop_assert!(level > dep_level);
                }
            }

            // Dangling ids never resolve, so tasks naming one stay blocked.
            if task.dependencies.iter().any(|d| d.as_str() == "dangling") {
                prop_assert!(!store.is_available(task));
                prop_assert!(!task.is_completed());
            }

            if task.dependencies.is_empty() {
                prop_assert!(store.is_available(task));
            }
        }

        let summary = store.summary();
        prop_assert_eq!(summary.total, store.len());
        prop_assert_eq!(summary.completed + summary.available + summary.blocked, summary.total);
    }

    #[test]
    fn sorted_by_level_is_monotone_and_stable(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let store = run_session(&ops)?;
        let levels = store.levels();
        let position = |id: &TaskId| store.tasks().iter().position(|t| &t.id == id).unwrap();

        let sorted = store.sorted_by_level();
        prop_assert_eq!(sorted.len(), store.len());

        for pair in sorted.windows(2) {
            let (l0, l1) = (levels.get(&pair[0].id).unwrap(), levels.get(&pair[1].id).unwrap());
            prop_assert!(l0 <= l1);
            if l0 == l1 {
                prop_assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
    }
}
