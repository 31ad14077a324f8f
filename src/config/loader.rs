// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{RawTaskFile, TaskFile};
use crate::errors::Result;

/// Deserialize a task file from TOML text without semantic validation.
pub fn parse_str(contents: &str) -> Result<RawTaskFile> {
    let raw: RawTaskFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Deserialize and validate a task file from TOML text.
pub fn parse_and_validate(contents: &str) -> Result<TaskFile> {
    let raw = parse_str(contents)?;
    TaskFile::try_from(raw)
}

/// Load a task file from a given path and return the raw `RawTaskFile`.
///
/// This only performs TOML deserialization; it does **not** check ids or
/// dependencies. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_str(&contents)
}

/// Load a task file from path and validate it:
///
/// - TOML shape and `[config]` defaults (handled by `serde`).
/// - Non-blank titles, unique ids, no self-dependency.
/// - Dangling dependencies, if the file's policy rejects them.
/// - No dependency cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskFile> {
    let raw = load_from_path(&path)?;
    TaskFile::try_from(raw)
}
