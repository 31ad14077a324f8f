// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graphmap::DiGraphMap;

use crate::types::TaskId;

/// In-memory dependency graph keyed by task id.
///
/// `nodes` holds the tasks that exist and their direct dependencies.
/// `dependents` is keyed by every id that is *named* as a dependency, which
/// includes dangling ids that have no node (yet).
#[derive(Debug, Clone, Default)]
pub struct DagGraph {
    nodes: HashMap<TaskId, Vec<TaskId>>,
    dependents: HashMap<TaskId, Vec<TaskId>>,
}

impl DagGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task and its dependency edges.
    ///
    /// Callers are expected to have checked for duplicates and cycles.
    pub fn add_task(&mut self, id: &TaskId, deps: &[TaskId]) {
        self.nodes.insert(id.clone(), deps.to_vec());
        for dep in deps {
            self.dependents
                .entry(dep.clone())
                .or_default()
                .push(id.clone());
        }
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether any task names `id` as a dependency.
    pub fn is_referenced(&self, id: &TaskId) -> bool {
        self.dependents.contains_key(id)
    }

    /// All task ids with a node (unordered).
    pub fn tasks(&self) -> impl Iterator<Item = &TaskId> {
        self.nodes.keys()
    }

    /// Direct dependencies of a task, including dangling ids.
    pub fn dependencies_of(&self, id: &TaskId) -> &[TaskId] {
        self.nodes.get(id).map(|d| d.as_slice()).unwrap_or(&[])
    }

    /// Direct dependents of an id (tasks that list it as a dependency).
    pub fn dependents_of(&self, id: &TaskId) -> &[TaskId] {
        self.dependents
            .get(id)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// If registering `id` with `deps` would close a cycle, return the
    /// dependency through which it would.
    ///
    /// Edge direction is dep -> task, so a cycle appears exactly when `id`
    /// already reaches one of its new dependencies.
    pub fn would_create_cycle(&self, id: &TaskId, deps: &[TaskId]) -> Option<TaskId> {
        if deps.contains(id) {
            return Some(id.clone());
        }
        if !self.is_referenced(id) {
            // Nothing points away from `id`, so no path can start there.
            return None;
        }

        let graph = self.to_digraph();
        deps.iter()
            .find(|dep| {
                graph.contains_node(dep.as_str())
                    && has_path_connecting(&graph, id.as_str(), dep.as_str(), None)
            })
            .cloned()
    }

    /// Return an id that lies on a cycle, if the graph has one.
    pub fn find_cycle(&self) -> Option<TaskId> {
        match toposort(&self.to_digraph(), None) {
            Ok(_order) => None,
            Err(cycle) => Some(TaskId::from(cycle.node_id())),
        }
    }

    /// Build a petgraph view with one edge per dependency (dep -> task).
    /// Dangling ids appear as nodes without incoming edges.
    fn to_digraph(&self) -> DiGraphMap<&str, ()> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for id in self.nodes.keys() {
            graph.add_node(id.as_str());
        }
        for (id, deps) in self.nodes.iter() {
            for dep in deps {
                graph.add_edge(dep.as_str(), id.as_str(), ());
            }
        }

        graph
    }
}
