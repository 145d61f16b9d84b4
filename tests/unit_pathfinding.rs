// Pathfinding tests: path validity, the no-path sentinel, budgets.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reachgraph::graph::FriendGraph;
use reachgraph::pathfinding::{
    all_paths, effectiveness, find_influence_path, shortest_path, PathSearch,
};
use reachgraph::recommend::hop_distances;

/// Six users with two routes between A and F:
/// A-B, B-D, D-F, A-C, C-E, E-F, C-D
fn six_users() -> FriendGraph {
    FriendGraph::from_edges([
        ("A", "B"),
        ("B", "D"),
        ("D", "F"),
        ("A", "C"),
        ("C", "E"),
        ("E", "F"),
        ("C", "D"),
    ])
}

fn random_graph(rng: &mut StdRng) -> FriendGraph {
    let n = rng.random_range(2..=8);
    let mut graph = FriendGraph::new();
    for i in 0..n {
        graph.add_node(&format!("N{i}"));
    }
    for _ in 0..rng.random_range(0..=n * 2) {
        let a = format!("N{}", rng.random_range(0..n));
        let b = format!("N{}", rng.random_range(0..n));
        graph.add_edge(&a, &b);
    }
    graph
}

/// Simple, made of real edges, and running from `origin` to `destination`.
fn assert_valid_path(graph: &FriendGraph, path: &[String], origin: &str, destination: &str) {
    assert_eq!(path.first().map(String::as_str), Some(origin));
    assert_eq!(path.last().map(String::as_str), Some(destination));

    let distinct: HashSet<&String> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path {path:?} repeats a node");

    for pair in path.windows(2) {
        assert!(
            graph.are_friends(&pair[0], &pair[1]),
            "{} - {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

// ============================================================
// Six-user scenario
// ============================================================

#[test]
fn six_user_influence_path() {
    let graph = six_users();
    let path = find_influence_path(&graph, "A", "F").expect("A and F are connected");

    assert_valid_path(&graph, &path.nodes, "A", "F");
    // 100/4 + 0.5 * (deg C + deg D) = 25 + 0.5 * 6
    assert_eq!(path.nodes, vec!["A", "C", "D", "F"]);
    assert!((path.effectiveness - 28.0).abs() < 1e-9);
    assert!(!path.truncated);
}

#[test]
fn six_user_shortest_path_has_three_hops() {
    let graph = six_users();
    let path = shortest_path(&graph, "A", "F").expect("A and F are connected");
    assert_valid_path(&graph, &path, "A", "F");
    assert_eq!(path.len(), 4);
}

#[test]
fn six_user_enumeration_finds_every_simple_path() {
    let graph = six_users();
    let paths = all_paths(&graph, "A", "F", 6);
    for path in &paths {
        assert_valid_path(&graph, path, "A", "F");
    }
    let distinct: HashSet<&Vec<String>> = paths.iter().collect();
    assert_eq!(distinct.len(), paths.len());
    assert!(paths.contains(&vec!["A".to_string(), "B".into(), "D".into(), "F".into()]));
    assert!(paths.contains(&vec!["A".to_string(), "C".into(), "E".into(), "F".into()]));

    // Nothing longer than the cap
    assert!(all_paths(&graph, "A", "F", 3).is_empty());
}

// ============================================================
// Random graphs
// ============================================================

#[test]
fn returned_paths_are_valid_and_agree_on_connectivity() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..80 {
        let graph = random_graph(&mut rng);
        let nodes: Vec<String> = graph.nodes().map(str::to_string).collect();

        for origin in &nodes {
            let reachable = hop_distances(&graph, origin);
            for destination in &nodes {
                let influence = find_influence_path(&graph, origin, destination);
                let shortest = shortest_path(&graph, origin, destination);

                let connected = reachable.contains_key(destination);
                assert_eq!(influence.is_some(), connected);
                assert_eq!(shortest.is_some(), connected);

                if let Some(path) = influence {
                    assert_valid_path(&graph, &path.nodes, origin, destination);
                    let score = effectiveness(&graph, &path.nodes);
                    assert!((score - path.effectiveness).abs() < 1e-9);
                }
                if let Some(path) = shortest {
                    assert_valid_path(&graph, &path, origin, destination);
                    assert_eq!(path.len() - 1, reachable[destination]);
                }
            }
        }
    }
}

#[test]
fn influence_never_beats_the_exhaustive_optimum() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..40 {
        let graph = random_graph(&mut rng);
        let origin = "N0";
        let destination = "N1";
        let Some(found) = find_influence_path(&graph, origin, destination) else {
            continue;
        };
        let best = all_paths(&graph, origin, destination, graph.node_count())
            .iter()
            .map(|p| effectiveness(&graph, p))
            .fold(f64::MIN, f64::max);
        assert!(found.effectiveness <= best + 1e-9);
    }
}

// ============================================================
// Length pruning and ties
// ============================================================

#[test]
fn long_detours_are_pruned_even_when_they_score_higher() {
    // A - D directly; A - X - Y - D through two hubs with 40 leaves each
    let leaves: Vec<String> = (0..40).map(|i| format!("L{i}")).collect();
    let mut edges = vec![("A", "D"), ("A", "X"), ("X", "Y"), ("Y", "D")];
    for leaf in &leaves {
        edges.push(("X", leaf.as_str()));
    }
    for leaf in &leaves {
        edges.push(("Y", leaf.as_str()));
    }
    let graph = FriendGraph::from_edges(edges);

    let found = find_influence_path(&graph, "A", "D").expect("A and D are friends");
    // [A, D] is found first; 4 nodes exceeds 1.5 * 2, so the detour is cut
    assert_eq!(found.nodes, vec!["A", "D"]);
    assert!((found.effectiveness - 50.0).abs() < 1e-9);

    let detour = ["A", "X", "Y", "D"].map(String::from);
    assert!(all_paths(&graph, "A", "D", 4).contains(&detour.to_vec()));
    // 100/4 + 0.5 * (42 + 42)
    let detour_score = effectiveness(&graph, &detour);
    assert!((detour_score - 67.0).abs() < 1e-9);
    assert!(detour_score > found.effectiveness);
}

#[test]
fn paths_within_the_length_bound_are_still_explored() {
    // Same hubs, but the detour is only one node longer: 3 <= 1.5 * 2
    let leaves: Vec<String> = (0..40).map(|i| format!("L{i}")).collect();
    let mut edges = vec![("A", "D"), ("A", "X"), ("X", "D")];
    for leaf in &leaves {
        edges.push(("X", leaf.as_str()));
    }
    let graph = FriendGraph::from_edges(edges);

    let found = find_influence_path(&graph, "A", "D").expect("A and D are friends");
    // 100/3 + 0.5 * 42 = 54.3 beats the direct 50
    assert_eq!(found.nodes, vec!["A", "X", "D"]);
}

#[test]
fn equal_scores_keep_the_first_path_found() {
    // A square: A-B-D and A-C-D score the same
    let graph = FriendGraph::from_edges([("A", "B"), ("B", "D"), ("A", "C"), ("C", "D")]);
    let found = find_influence_path(&graph, "A", "D").expect("connected");
    assert_eq!(found.nodes, vec!["A", "B", "D"]);
    assert_eq!(
        effectiveness(&graph, &["A", "B", "D"]),
        effectiveness(&graph, &["A", "C", "D"])
    );
}

// ============================================================
// No-path sentinel
// ============================================================

#[test]
fn disconnected_endpoints_yield_none() {
    let graph = FriendGraph::from_edges([("A", "B"), ("C", "D")]);
    assert!(find_influence_path(&graph, "A", "D").is_none());
    assert!(shortest_path(&graph, "A", "D").is_none());
    assert!(all_paths(&graph, "A", "D", 4).is_empty());
}

#[test]
fn tiny_budget_reports_truncation() {
    let graph = six_users();
    let path = PathSearch::new(1).run(&graph, "A", "F");
    // One expansion only looks at A itself
    assert!(path.is_none());

    let path = PathSearch::default()
        .run(&graph, "A", "F")
        .expect("default budget is enough");
    assert!(!path.truncated);
}
