// src/persist/mod.rs

//! Save/load boundary for the task collection.
//!
//! The store does not interpret persistence failures; they are passed
//! back to the caller as [`DeptreeError`](crate::errors::DeptreeError).

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::loader::parse_and_validate;
use crate::config::model::TaskFile;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::store::TaskStore;

/// Opaque reference to a saved collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreHandle {
    location: PathBuf,
}

impl StoreHandle {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }
}

impl fmt::Display for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location.display())
    }
}

/// Where task collections are saved to and loaded from.
pub trait TaskRepository {
    fn save(&self, file: &TaskFile) -> Result<StoreHandle>;
    fn load(&self, handle: &StoreHandle) -> Result<TaskFile>;
}

/// Task files stored as TOML on a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct FileRepository<F: FileSystem> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> FileRepository<F> {
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Handle for this repository's own file.
    pub fn handle(&self) -> StoreHandle {
        StoreHandle::new(&self.path)
    }

    pub fn exists(&self) -> bool {
        self.fs.exists(&self.path)
    }
}

impl<F: FileSystem> TaskRepository for FileRepository<F> {
    fn save(&self, file: &TaskFile) -> Result<StoreHandle> {
        let raw = file.clone().into_raw();
        let contents = toml::to_string_pretty(&raw)?;
        self.fs.write(&self.path, contents.as_bytes())?;
        info!(path = ?self.path, tasks = file.tasks().len(), "task file saved");
        Ok(self.handle())
    }

    fn load(&self, handle: &StoreHandle) -> Result<TaskFile> {
        debug!(path = ?handle.location(), "loading task file");
        let contents = self.fs.read_to_string(handle.location())?;
        parse_and_validate(&contents)
    }
}

impl TaskStore {
    /// Persist the current collection through `repo`.
    pub fn save_to(&self, repo: &impl TaskRepository) -> Result<StoreHandle> {
        repo.save(&self.to_task_file())
    }

    /// Rebuild a store from a previously saved collection.
    pub fn load_from(repo: &impl TaskRepository, handle: &StoreHandle) -> Result<Self> {
        let file = repo.load(handle)?;
        Ok(TaskStore::from_task_file(&file))
    }
}
