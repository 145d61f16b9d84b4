// Single-source shortest paths over a weighted graph (Dijkstra).
//
// Weights must be non-negative. A node is settled the first time it is
// popped from the frontier; stale heap entries are skipped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::WeightedGraph;

/// Heap entry ordered so the smallest distance pops first.
#[derive(Debug, PartialEq)]
struct Frontier<'a> {
    distance: f64,
    node: &'a str,
}

impl Eq for Frontier<'_> {}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distance from `source` to every node of `graph`.
///
/// Unreachable nodes map to `f64::INFINITY`. The source maps to 0.0 even if
/// it is not a node of the graph.
pub fn shortest_distances(graph: &WeightedGraph, source: &str) -> HashMap<String, f64> {
    let mut distances: HashMap<&str, f64> =
        graph.nodes().map(|node| (node, f64::INFINITY)).collect();
    distances.insert(source, 0.0);

    let mut settled: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        distance: 0.0,
        node: source,
    });

    while let Some(Frontier { distance, node }) = frontier.pop() {
        if !settled.insert(node) {
            continue;
        }
        for (next, weight) in graph.edges(node) {
            let candidate = distance + weight;
            let best = distances.entry(next).or_insert(f64::INFINITY);
            if candidate < *best {
                *best = candidate;
                frontier.push(Frontier {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    distances
        .into_iter()
        .map(|(node, distance)| (node.to_string(), distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_cheaper_detour() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 5.0);
        graph.add_edge("A", "C", 1.0);
        graph.add_edge("C", "B", 1.5);
        let d = shortest_distances(&graph, "A");
        assert!((d["B"] - 2.5).abs() < 1e-9);
        assert!((d["C"] - 1.0).abs() < 1e-9);
        assert_eq!(d["A"], 0.0);
    }

    #[test]
    fn test_unreachable_is_infinite() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_node("Z");
        let d = shortest_distances(&graph, "A");
        assert!(d["Z"].is_infinite());
    }

    #[test]
    fn test_direction_matters() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        let d = shortest_distances(&graph, "B");
        assert!(d["A"].is_infinite());
    }

    #[test]
    fn test_unknown_source() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        let d = shortest_distances(&graph, "Q");
        assert_eq!(d["Q"], 0.0);
        assert!(d["A"].is_infinite());
        assert_eq!(d.len(), 3);
    }
}
