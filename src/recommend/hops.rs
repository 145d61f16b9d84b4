// Unweighted hop distances: the plain "degrees of separation" view.

use std::collections::{BTreeMap, VecDeque};

use crate::graph::FriendGraph;

/// Breadth-first hop count from `source` to every reachable user.
///
/// The source itself is at 0. Unreachable users are absent. An unknown
/// source yields just `{source: 0}`.
pub fn hop_distances(graph: &FriendGraph, source: &str) -> BTreeMap<String, usize> {
    let mut distances = BTreeMap::new();
    let mut queue = VecDeque::new();

    distances.insert(source.to_string(), 0);
    queue.push_back((source, 0));

    while let Some((current, hops)) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if !distances.contains_key(next) {
                distances.insert(next.clone(), hops + 1);
                queue.push_back((next.as_str(), hops + 1));
            }
        }
    }

    distances
}

/// Users exactly two hops away ("friends of friends"), sorted by id.
pub fn friends_of_friends(graph: &FriendGraph, source: &str) -> Vec<String> {
    hop_distances(graph, source)
        .into_iter()
        .filter(|(_, hops)| *hops == 2)
        .map(|(id, _)| id)
        .collect()
}
