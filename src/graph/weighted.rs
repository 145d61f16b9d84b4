// Weighted directed graph used for shortest-path queries.
//
// Built fresh for every recommendation request from the friendship graph
// and an affinity scorer; never persisted.

use std::collections::BTreeMap;

/// Directed graph with non-negative `f64` edge weights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    adjacency: BTreeMap<String, Vec<(String, f64)>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: &str) {
        self.adjacency.entry(id.to_string()).or_default();
    }

    /// Add a directed edge. Both endpoints become nodes.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) {
        self.add_node(to);
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), weight));
    }

    /// Outgoing edges of `id` as `(target, weight)`.
    pub fn edges<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(|(to, weight)| (to.as_str(), *weight))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
