// src/dag/mod.rs

//! Dependency graph representation.
//!
//! - [`graph`] holds the adjacency of tasks and cycle checks.
//! - [`levels`] derives each task's display level from the graph.
//! - [`task`] defines the task node itself.

pub mod graph;
pub mod levels;
pub mod task;

pub use graph::DagGraph;
pub use levels::{LevelMap, LevelResolver, compute_levels};
pub use task::{NewTask, Task};
