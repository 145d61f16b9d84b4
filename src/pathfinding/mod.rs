// Path search between two users.
//
// influence.rs is the backtracking search for the most *effective* chain
// of intermediaries; shortest.rs holds the breadth-first baseline and a
// bounded path enumeration.

pub mod influence;
pub mod shortest;

pub use influence::{effectiveness, find_influence_path, InfluencePath, PathSearch};
pub use shortest::{all_paths, shortest_path};
