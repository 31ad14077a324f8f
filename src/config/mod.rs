// src/config/mod.rs

//! Task file model, loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Read a task file from disk or a string (`loader.rs`).
//! - Validate invariants like id uniqueness and acyclicity (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_and_validate};
pub use model::{ConfigSection, RawTaskFile, TaskFile, TaskRecord};
