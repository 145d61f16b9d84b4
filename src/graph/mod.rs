// Friendship graph: who is connected to whom.
//
// Adjacency lists keyed by user id. Neighbor lists keep insertion order,
// which the backtracking path search depends on for its tie-breaking.
// Edges are always added on both endpoints.

pub mod weighted;

use std::collections::BTreeMap;

use crate::model::User;

pub use weighted::WeightedGraph;

/// Undirected friendship graph stored as symmetric adjacency lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FriendGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from user records. Each user becomes a node even
    /// without friends; friend lists are taken as given.
    pub fn from_users<'a>(users: impl IntoIterator<Item = &'a User>) -> Self {
        let mut graph = Self::new();
        for user in users {
            graph.add_node(&user.id);
            for friend in &user.friends {
                graph.add_edge(&user.id, friend);
            }
        }
        graph
    }

    /// Build a graph from a list of undirected edges.
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    pub fn add_node(&mut self, id: &str) {
        self.adjacency.entry(id.to_string()).or_default();
    }

    /// Connect `a` and `b` in both directions. Returns false for self-loops
    /// and for edges that already exist.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let added_ab = push_unique(self.adjacency.entry(a.to_string()).or_default(), b);
        let added_ba = push_unique(self.adjacency.entry(b.to_string()).or_default(), a);
        added_ab || added_ba
    }

    /// Neighbors of `id` in insertion order. Empty for unknown ids.
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Out-degree of `id` (0 for unknown ids).
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn are_friends(&self, a: &str, b: &str) -> bool {
        self.neighbors(a).iter().any(|n| n == b)
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Every directed adjacency `(node, neighbors)`.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.adjacency
            .iter()
            .map(|(id, friends)| (id.as_str(), friends.as_slice()))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

fn push_unique(list: &mut Vec<String>, id: &str) -> bool {
    if list.iter().any(|n| n == id) {
        return false;
    }
    list.push(id.to_string());
    true
}
