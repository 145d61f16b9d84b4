// Affinity recommender: suggest new connections.
//
// Given a user, this module:
// 1. Weights every friendship edge by affinity (closer friends = cheaper edge)
// 2. Runs Dijkstra from the user over the weighted graph
// 3. Drops the user and their direct friends, keeps 0 < distance <= 4.0
// 4. Returns the five closest candidates, nearest first

pub mod dijkstra;
pub mod hops;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::affinity::AffinityScorer;
use crate::graph::{FriendGraph, WeightedGraph};

pub use dijkstra::shortest_distances;
pub use hops::{friends_of_friends, hop_distances};

/// Tunable constants for edge weighting and candidate filtering.
///
/// Edge weight = `max(base_weight - affinity * affinity_reduction, min_weight)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendWeights {
    /// Weight of an edge between users with no affinity (default 1.0)
    pub base_weight: f64,
    /// Weight removed per point of affinity (default 0.3)
    pub affinity_reduction: f64,
    /// Floor so that no edge becomes free (default 0.1)
    pub min_weight: f64,
    /// Candidates further than this are dropped (default 4.0)
    pub max_distance: f64,
    /// Maximum number of recommendations (default 5)
    pub limit: usize,
}

impl Default for RecommendWeights {
    fn default() -> Self {
        Self {
            base_weight: 1.0,
            affinity_reduction: 0.3,
            min_weight: 0.1,
            max_distance: 4.0,
            limit: 5,
        }
    }
}

impl RecommendWeights {
    /// Edge weight for a given affinity.
    pub fn edge_weight(&self, affinity: f64) -> f64 {
        (self.base_weight - affinity * self.affinity_reduction).max(self.min_weight)
    }
}

/// A suggested connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub user_id: String,
    /// Weighted distance from the source (lower = closer)
    pub distance: f64,
    /// Affinity between the source and this candidate
    pub affinity: f64,
}

/// Weight every directed friendship `u -> v` by the affinity of `u` and `v`.
pub fn weighted_graph(
    graph: &FriendGraph,
    scorer: &dyn AffinityScorer,
    weights: &RecommendWeights,
) -> WeightedGraph {
    let mut weighted = WeightedGraph::new();
    for (user, friends) in graph.adjacency() {
        weighted.add_node(user);
        for friend in friends {
            let weight = weights.edge_weight(scorer.affinity(user, friend));
            weighted.add_edge(user, friend, weight);
        }
    }
    weighted
}

/// Recommend up to five new connections for `user_id` with default weights.
pub fn recommend_friends(
    graph: &FriendGraph,
    user_id: &str,
    scorer: &dyn AffinityScorer,
) -> Vec<Recommendation> {
    recommend_friends_with(graph, user_id, scorer, &RecommendWeights::default())
}

/// Recommend new connections for `user_id` using explicit weights.
///
/// Candidates are never the user themself nor one of their direct friends.
/// Ties on distance are broken by user id.
pub fn recommend_friends_with(
    graph: &FriendGraph,
    user_id: &str,
    scorer: &dyn AffinityScorer,
    weights: &RecommendWeights,
) -> Vec<Recommendation> {
    if graph.neighbors(user_id).is_empty() {
        debug!(user = user_id, "No friends to start from, nothing to recommend");
        return Vec::new();
    }

    let weighted = weighted_graph(graph, scorer, weights);
    let distances = shortest_distances(&weighted, user_id);
    let reachable = reachable_count(&distances);

    let mut candidates: Vec<(String, f64)> = distances
        .into_iter()
        .filter(|(id, distance)| {
            id != user_id
                && !graph.are_friends(user_id, id)
                && *distance > 0.0
                && *distance <= weights.max_distance
        })
        .collect();

    candidates.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    candidates.truncate(weights.limit);

    info!(
        user = user_id,
        nodes = weighted.node_count(),
        reachable,
        recommended = candidates.len(),
        "Computed recommendations"
    );

    candidates
        .into_iter()
        .map(|(id, distance)| Recommendation {
            affinity: scorer.affinity(user_id, &id),
            user_id: id,
            distance,
        })
        .collect()
}

/// Nodes with a finite distance, the source included.
fn reachable_count(distances: &HashMap<String, f64>) -> usize {
    distances.values().filter(|d| d.is_finite()).count()
}
