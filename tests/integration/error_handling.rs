// tests/integration/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;
use deptree::config::{load_and_validate, parse_and_validate};
use deptree::errors::DeptreeError;
use deptree_test_utils::builders::{TaskFileBuilder, TaskRecordBuilder};

#[test]
fn test_dependency_cycle_returns_structured_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[task]]
id = "A"
title = "A"
dependencies = ["B"]

[[task]]
id = "B"
title = "B"
dependencies = ["A"]
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(DeptreeError::DependencyCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("A") || msg.contains("B"));
        }
        Err(e) => panic!("Expected DependencyCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_dangling_dependency_tolerated_by_default() {
    let file = parse_and_validate(
        r#"
[[task]]
id = "A"
title = "A"
dependencies = ["NonExistent"]
"#,
    )
    .unwrap();

    assert_eq!(file.tasks().len(), 1);
}

#[test]
fn test_dangling_dependency_rejected_when_configured() {
    let result = parse_and_validate(
        r#"
[config]
dangling_dependencies = "reject"

[[task]]
id = "A"
title = "A"
dependencies = ["NonExistent"]
"#,
    );

    match result {
        Err(DeptreeError::DanglingDependency { task, dependency }) => {
            assert_eq!(task.as_str(), "A");
            assert_eq!(dependency.as_str(), "NonExistent");
        }
        Err(e) => panic!("Expected DanglingDependency, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_dangling_policy_is_a_parse_error() {
    let result = parse_and_validate(
        r#"
[config]
dangling_dependencies = "ignore"
"#,
    );
    assert!(matches!(result, Err(DeptreeError::TomlError(_))));
}

#[test]
fn test_duplicate_ids_rejected() {
    let raw = TaskFileBuilder::new()
        .with_task(TaskRecordBuilder::new("1", "First").build())
        .with_task(TaskRecordBuilder::new("1", "Second").build())
        .raw();

    let result = deptree::config::TaskFile::try_from(raw);
    assert!(matches!(result, Err(DeptreeError::DuplicateId(ref id)) if id.as_str() == "1"));
}

#[test]
fn test_self_dependency_rejected() {
    let raw = TaskFileBuilder::new()
        .with_task(TaskRecordBuilder::new("1", "Loop").after("1").build())
        .raw();

    let result = deptree::config::TaskFile::try_from(raw);
    assert!(matches!(result, Err(DeptreeError::SelfDependency(_))));
}

#[test]
fn test_blank_title_and_zero_limit_are_config_errors() {
    let raw = TaskFileBuilder::new()
        .with_task(TaskRecordBuilder::new("1", "   ").build())
        .raw();
    match deptree::config::TaskFile::try_from(raw) {
        Err(DeptreeError::ConfigError(msg)) => assert!(msg.contains("blank title")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    let raw = TaskFileBuilder::new().next_actions_limit(0).raw();
    match deptree::config::TaskFile::try_from(raw) {
        Err(DeptreeError::ConfigError(msg)) => assert!(msg.contains("next_actions_limit")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}
