// src/dag/levels.rs

//! Level computation: the length of the longest dependency chain below a
//! task, counting only dependencies that resolve to a task.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::dag::graph::DagGraph;
use crate::types::TaskId;

/// Computed level for every task in a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    levels: HashMap<TaskId, usize>,
}

impl LevelMap {
    /// Level of `id`, or `None` if it is not a task.
    pub fn get(&self, id: &TaskId) -> Option<usize> {
        self.levels.get(id).copied()
    }

    /// Highest level present, or `None` for an empty graph.
    pub fn max_level(&self) -> Option<usize> {
        self.levels.values().copied().max()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Memoizing level calculator over a [`DagGraph`].
///
/// Traversal is iterative and keeps the current path, so a back edge is
/// skipped instead of recursing forever. The store never admits cycles;
/// the guard only has to keep the resolver total.
pub struct LevelResolver<'a> {
    graph: &'a DagGraph,
    memo: HashMap<TaskId, usize>,
}

impl<'a> LevelResolver<'a> {
    pub fn new(graph: &'a DagGraph) -> Self {
        Self {
            graph,
            memo: HashMap::new(),
        }
    }

    /// Level of a single task. Ids with no node are level 0.
    pub fn level_of(&mut self, start: &TaskId) -> usize {
        if !self.graph.contains(start) {
            return 0;
        }
        if let Some(level) = self.memo.get(start) {
            return *level;
        }

        let mut on_path: HashSet<TaskId> = HashSet::new();
        // (id, expanded): an expanded entry is finalised once all of its
        // dependencies above it on the stack have been resolved.
        let mut stack: Vec<(TaskId, bool)> = vec![(start.clone(), false)];

        while let Some((id, expanded)) = stack.pop() {
            if self.memo.contains_key(&id) {
                continue;
            }

            if expanded {
                let level = self
                    .graph
                    .dependencies_of(&id)
                    .iter()
                    .filter_map(|dep| self.memo.get(dep))
                    .map(|l| l + 1)
                    .max()
                    .unwrap_or(0);
                on_path.remove(&id);
                self.memo.insert(id, level);
                continue;
            }

            on_path.insert(id.clone());
            stack.push((id.clone(), true));

            for dep in self.graph.dependencies_of(&id) {
                if !self.graph.contains(dep) || self.memo.contains_key(dep) {
                    continue;
                }
                if on_path.contains(dep) {
                    warn!(task = %id, dep = %dep, "dependency cycle while computing level; ignoring back edge");
                    continue;
                }
                stack.push((dep.clone(), false));
            }
        }

        self.memo.get(start).copied().unwrap_or(0)
    }

    /// Resolve every task in the graph.
    pub fn resolve_all(mut self) -> LevelMap {
        let ids: Vec<TaskId> = self.graph.tasks().cloned().collect();
        for id in &ids {
            self.level_of(id);
        }
        LevelMap { levels: self.memo }
    }
}

/// Convenience: levels for every task in `graph`.
pub fn compute_levels(graph: &DagGraph) -> LevelMap {
    LevelResolver::new(graph).resolve_all()
}
