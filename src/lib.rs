// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod persist;
pub mod render;
pub mod store;
pub mod types;

use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::model::TaskFile;
use crate::dag::NewTask;
use crate::fs::{FileSystem, RealFileSystem};
use crate::persist::{FileRepository, TaskRepository};
use crate::render::{render_next_actions, render_summary, render_tree};
use crate::store::{TaskStore, ToggleOutcome};
use crate::types::{TaskId, TaskStatus};

/// High-level entry point used by `main.rs`: run one command against the
/// task file on the real filesystem, printing to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&args, RealFileSystem, &mut out)
}

/// Run one command against the task file on `fs`, writing views to `out`.
///
/// Mutating commands load the file, apply the change to a [`TaskStore`]
/// and save the file back.
pub fn execute<F: FileSystem>(args: &CliArgs, fs: F, out: &mut impl Write) -> Result<()> {
    let repo = FileRepository::new(fs, &args.file);

    match &args.command {
        Command::Init { force } => {
            if repo.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", args.file);
            }
            let handle = repo.save(&TaskFile::sample())?;
            writeln!(out, "wrote {handle}")?;
        }
        Command::List => {
            let store = load_store(&repo)?;
            write!(out, "{}", render_tree(&store))?;
            writeln!(out)?;
            write!(out, "{}", render_summary(&store))?;
        }
        Command::Next => {
            let store = load_store(&repo)?;
            write!(out, "{}", render_next_actions(&store))?;
        }
        Command::Check => {
            let store = load_store(&repo)?;
            let levels = store.levels();
            writeln!(
                out,
                "{} ok: {} tasks, {} levels",
                args.file,
                store.len(),
                levels.max_level().map_or(0, |l| l + 1)
            )?;
        }
        Command::Add { title, after, hours } => {
            let mut store = load_store(&repo)?;

            let mut new = NewTask::new(title.as_str());
            for dep in after {
                new = new.depends_on(dep.as_str());
            }
            if let Some(h) = hours {
                new = new.estimated_hours(*h);
            }

            let added = match store.add(new) {
                Some(task) => task.clone(),
                None => bail!("task not added: the title is blank or a dependency is unknown"),
            };
            store.save_to(&repo)?;
            writeln!(
                out,
                "added {} ({}) - {}",
                added.title,
                added.id,
                store.status_of(&added)
            )?;
        }
        Command::Toggle { id } => {
            let mut store = load_store(&repo)?;
            let id = TaskId::from(id.as_str());

            match store.toggle_complete(&id) {
                ToggleOutcome::Completed => {
                    store.save_to(&repo)?;
                    writeln!(out, "completed {id}")?;
                    if let Some(task) = store.get(&id) {
                        for unlocked in store.dependents(task) {
                            if store.status_of(unlocked) == TaskStatus::Available {
                                writeln!(out, "now available: {} ({})", unlocked.title, unlocked.id)?;
                            }
                        }
                    }
                }
                ToggleOutcome::Reopened => {
                    store.save_to(&repo)?;
                    writeln!(out, "reopened {id}")?;
                }
                ToggleOutcome::Blocked => {
                    bail!("task {id} is blocked: complete its dependencies first")
                }
                ToggleOutcome::UnknownId => bail!("no task with id {id}"),
            }
        }
        Command::Rename { id, title } => {
            let mut store = load_store(&repo)?;
            let id = TaskId::from(id.as_str());
            if !store.rename_task(&id, title) {
                bail!("task {id} not renamed: unknown id or blank title");
            }
            store.save_to(&repo)?;
            writeln!(out, "renamed {id}")?;
        }
    }

    debug!(command = ?args.command, "command complete");
    Ok(())
}

fn load_store<F: FileSystem>(repo: &FileRepository<F>) -> Result<TaskStore> {
    let handle = repo.handle();
    let store = TaskStore::load_from(repo, &handle)
        .with_context(|| format!("loading task file {handle}"))?;
    info!(tasks = store.len(), "task file loaded");
    Ok(store)
}
