// Breadth-first shortest path and bounded simple-path enumeration.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::FriendGraph;

/// Fewest-hops path from `origin` to `destination`, or `None` if they are
/// not connected (or either is unknown).
pub fn shortest_path(graph: &FriendGraph, origin: &str, destination: &str) -> Option<Vec<String>> {
    if !graph.contains(origin) || !graph.contains(destination) {
        return None;
    }

    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut seen: HashSet<&str> = HashSet::from([origin]);
    let mut queue = VecDeque::from([origin]);

    while let Some(current) = queue.pop_front() {
        if current == destination {
            let mut path = vec![current.to_string()];
            let mut node = current;
            while let Some(&parent) = parents.get(node) {
                path.push(parent.to_string());
                node = parent;
            }
            path.reverse();
            return Some(path);
        }

        for next in graph.neighbors(current) {
            let next = next.as_str();
            if seen.insert(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Every simple path from `origin` to `destination` with at most
/// `max_nodes` nodes, in depth-first discovery order.
pub fn all_paths(
    graph: &FriendGraph,
    origin: &str,
    destination: &str,
    max_nodes: usize,
) -> Vec<Vec<String>> {
    let mut found = Vec::new();
    if max_nodes == 0 || !graph.contains(origin) {
        return found;
    }

    let mut path = vec![origin];
    let mut visited = HashSet::from([origin]);
    collect_paths(graph, destination, max_nodes, &mut path, &mut visited, &mut found);
    found
}

fn collect_paths<'a>(
    graph: &'a FriendGraph,
    destination: &str,
    max_nodes: usize,
    path: &mut Vec<&'a str>,
    visited: &mut HashSet<&'a str>,
    found: &mut Vec<Vec<String>>,
) {
    let Some(&current) = path.last() else {
        return;
    };
    if current == destination {
        found.push(path.iter().map(|n| n.to_string()).collect());
        return;
    }
    if path.len() >= max_nodes {
        return;
    }

    for next in graph.neighbors(current) {
        let next = next.as_str();
        if visited.insert(next) {
            path.push(next);
            collect_paths(graph, destination, max_nodes, path, visited, found);
            path.pop();
            visited.remove(next);
        }
    }
}
