// Influence pathfinder: pruned backtracking over simple paths.
//
// Every completed origin -> destination path is scored:
//
//   effectiveness = 100 / path_length + 0.5 * sum(out-degree of intermediates)
//
// where path_length counts nodes, endpoints included. Shorter chains and
// well-connected intermediaries both score higher. Ties keep the path found
// first, so neighbor insertion order decides between equal scores.
//
// Pruning is a heuristic, not an admissible bound: a branch is abandoned
// once it is longer than 1.5x the current best path, or when its head has no
// neighbors. It can discard the true optimum; that is accepted behavior.
// The search is exponential in the worst case, so it also stops after a
// fixed number of node expansions and reports the result as truncated.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::graph::FriendGraph;

/// Default cap on node expansions for one search.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// A branch longer than this multiple of the best path is abandoned.
const PRUNE_FACTOR: f64 = 1.5;

const LENGTH_SCORE: f64 = 100.0;
const DEGREE_WEIGHT: f64 = 0.5;

/// The chosen chain of users from origin to destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfluencePath {
    /// User ids, origin first, destination last
    pub nodes: Vec<String>,
    pub effectiveness: f64,
    /// True when the expansion budget ran out before the search finished
    pub truncated: bool,
}

impl InfluencePath {
    /// Number of edges in the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSearch {
    pub max_expansions: usize,
}

impl Default for PathSearch {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl PathSearch {
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }

    /// Find the most effective simple path from `origin` to `destination`.
    ///
    /// Returns `None` when either endpoint is unknown or no path was found.
    pub fn run(
        &self,
        graph: &FriendGraph,
        origin: &str,
        destination: &str,
    ) -> Option<InfluencePath> {
        if !graph.contains(origin) || !graph.contains(destination) {
            debug!(origin, destination, "Unknown endpoint, no influence path");
            return None;
        }

        let mut search = Backtracker {
            graph,
            destination,
            path: vec![origin],
            visited: HashSet::from([origin]),
            best: None,
            expansions: 0,
            max_expansions: self.max_expansions,
            exhausted: false,
        };
        search.explore(origin);

        debug!(
            origin,
            destination,
            expansions = search.expansions,
            exhausted = search.exhausted,
            found = search.best.is_some(),
            "Influence search finished"
        );

        let truncated = search.exhausted;
        search.best.map(|(nodes, effectiveness)| InfluencePath {
            nodes: nodes.into_iter().map(str::to_string).collect(),
            effectiveness,
            truncated,
        })
    }
}

/// Find the most effective path with the default expansion budget.
pub fn find_influence_path(
    graph: &FriendGraph,
    origin: &str,
    destination: &str,
) -> Option<InfluencePath> {
    PathSearch::default().run(graph, origin, destination)
}

/// Score a path: `100 / len + 0.5 * sum of intermediate out-degrees`.
/// An empty path scores 0.
pub fn effectiveness<S: AsRef<str>>(graph: &FriendGraph, path: &[S]) -> f64 {
    if path.is_empty() {
        return 0.0;
    }
    let intermediates: &[S] = if path.len() > 2 {
        &path[1..path.len() - 1]
    } else {
        &[]
    };
    let degree_sum: usize = intermediates
        .iter()
        .map(|node| graph.degree(node.as_ref()))
        .sum();

    LENGTH_SCORE / path.len() as f64 + DEGREE_WEIGHT * degree_sum as f64
}

struct Backtracker<'a> {
    graph: &'a FriendGraph,
    destination: &'a str,
    /// Current branch; its last element is the node being explored
    path: Vec<&'a str>,
    visited: HashSet<&'a str>,
    best: Option<(Vec<&'a str>, f64)>,
    expansions: usize,
    max_expansions: usize,
    exhausted: bool,
}

impl<'a> Backtracker<'a> {
    fn explore(&mut self, current: &'a str) {
        if self.expansions >= self.max_expansions {
            self.exhausted = true;
            return;
        }
        self.expansions += 1;

        if let Some((best, _)) = &self.best {
            if self.path.len() as f64 > PRUNE_FACTOR * best.len() as f64 {
                return;
            }
        }

        if current == self.destination {
            let score = effectiveness(self.graph, &self.path);
            if self.best.as_ref().map_or(true, |(_, best)| score > *best) {
                self.best = Some((self.path.clone(), score));
            }
            return;
        }

        let neighbors = self.graph.neighbors(current);
        if neighbors.is_empty() {
            return;
        }

        for next in neighbors {
            let next = next.as_str();
            if self.visited.contains(next) {
                continue;
            }

            self.path.push(next);
            self.visited.insert(next);
            self.explore(next);
            self.path.pop();
            self.visited.remove(next);

            if self.exhausted {
                return;
            }
        }
    }
}
