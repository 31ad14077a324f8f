// tests/integration/persistence.rs

use chrono::{TimeZone, Utc};
use deptree::errors::DeptreeError;
use deptree::fs::RealFileSystem;
use deptree::fs::mock::MockFileSystem;
use deptree::persist::{FileRepository, StoreHandle, TaskRepository};
use deptree::store::TaskStore;
use deptree::types::{DanglingPolicy, TaskId, TaskStatus};
use deptree_test_utils::builders::{TaskFileBuilder, TaskRecordBuilder};
use deptree_test_utils::init_tracing;

#[test]
fn store_survives_save_and_load_on_mock_fs() {
    init_tracing();
    let fs = MockFileSystem::new();
    let repo = FileRepository::new(fs.clone(), "tasks/plan.toml");

    let mut store = TaskStore::default();
    let a = store.add_task("Read", []).unwrap().id.clone();
    let b = store.add_task("Notes", [a.clone()]).unwrap().id.clone();
    store.add_task("Orphan", [TaskId::from("missing")]);
    let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    store.toggle_complete_at(&a, at);

    let handle = store.save_to(&repo).unwrap();
    assert_eq!(handle, repo.handle());
    assert!(fs.contents("tasks/plan.toml").is_some());

    let loaded = TaskStore::load_from(&repo, &handle).unwrap();
    assert_eq!(loaded.to_task_file(), store.to_task_file());

    let order: Vec<&str> = loaded.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(order, vec!["Read", "Notes", "Orphan"]);
    assert_eq!(loaded.get(&a).unwrap().completed_at(), Some(at));
    assert_eq!(
        loaded.status_of(loaded.get(&b).unwrap()),
        TaskStatus::Available
    );
}

#[test]
fn store_survives_save_and_load_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deptree.toml");
    let repo = FileRepository::new(RealFileSystem, &path);

    let store = TaskFileBuilder::new()
        .default_estimated_hours(2)
        .with_task(TaskRecordBuilder::new("1", "Outline").completed(true).build())
        .with_task(TaskRecordBuilder::new("2", "Draft").after("1").hours(5).build())
        .build_store();

    let handle = store.save_to(&repo).unwrap();
    assert_eq!(handle.location(), path.as_path());

    let loaded = TaskStore::load_from(&repo, &handle).unwrap();
    assert_eq!(loaded.get(&TaskId::from("1")).unwrap().estimated_hours, 2);
    assert_eq!(loaded.get(&TaskId::from("2")).unwrap().estimated_hours, 5);
    assert_eq!(loaded.config().default_estimated_hours, 2);
}

#[test]
fn config_section_round_trips() {
    let fs = MockFileSystem::new();
    let repo = FileRepository::new(fs, "plan.toml");

    let file = TaskFileBuilder::new()
        .dangling(DanglingPolicy::Reject)
        .next_actions_limit(5)
        .with_task(TaskRecordBuilder::new("1", "Only").build())
        .build();

    let handle = repo.save(&file).unwrap();
    let loaded = repo.load(&handle).unwrap();
    assert_eq!(loaded.config().dangling_dependencies, DanglingPolicy::Reject);
    assert_eq!(loaded.config().next_actions_limit, 5);
}

#[test]
fn write_failure_is_reported_and_store_is_untouched() {
    let fs = MockFileSystem::new();
    fs.fail_writes(true);
    let repo = FileRepository::new(fs.clone(), "plan.toml");

    let mut store = TaskStore::default();
    store.add_task("Read", []);
    let before = store.to_task_file();

    let err = store.save_to(&repo).unwrap_err();
    assert!(matches!(err, DeptreeError::Other(_)));
    assert!(fs.contents("plan.toml").is_none());
    assert_eq!(store.to_task_file(), before);
}

#[test]
fn loading_missing_file_fails() {
    let repo = FileRepository::new(MockFileSystem::new(), "plan.toml");
    let result = TaskStore::load_from(&repo, &StoreHandle::new("nowhere.toml"));
    assert!(result.is_err());
}

#[test]
fn loading_invalid_toml_fails() {
    let fs = MockFileSystem::new();
    fs.add_file("plan.toml", "[[task]]\nid = \"1\"\ntitle = \n");
    let repo = FileRepository::new(fs, "plan.toml");

    let result = repo.load(&repo.handle());
    assert!(matches!(result, Err(DeptreeError::TomlError(_))));
}

#[test]
fn completed_at_is_dropped_for_incomplete_records() {
    let fs = MockFileSystem::new();
    fs.add_file(
        "plan.toml",
        r#"
[[task]]
id = "1"
title = "Read"
completed = false
completed_at = "2026-10-01T09:00:00Z"
"#,
    );
    let repo = FileRepository::new(fs, "plan.toml");

    let store = TaskStore::load_from(&repo, &repo.handle()).unwrap();
    assert_eq!(store.get(&TaskId::from("1")).unwrap().completed_at(), None);
}
