// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::types::TaskId;

#[derive(Error, Debug)]
pub enum DeptreeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Task title must not be blank")]
    InvalidTitle,

    #[error("Duplicate task id: {0}")]
    DuplicateId(TaskId),

    #[error("Task '{0}' cannot depend on itself")]
    SelfDependency(TaskId),

    #[error("Cycle detected in task dependencies: {0}")]
    DependencyCycle(String),

    #[error("Task '{task}' depends on unknown task '{dependency}'")]
    DanglingDependency { task: TaskId, dependency: TaskId },

    #[error("Task id '{id}' is already a dependency of '{dependent}' and cannot be reused")]
    ReferencedId { id: TaskId, dependent: TaskId },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DeptreeError>;
