// reachgraph: reach, cover, recommendation and influence analysis for a
// small social graph.
//
// This is the library root. The algorithmic core (selection, recommend,
// pathfinding, ranking) works on plain in-memory values; model, store and
// output are the collaborators that feed it and display its results.

pub mod affinity;
pub mod config;
pub mod graph;
pub mod model;
pub mod output;
pub mod pathfinding;
pub mod ranking;
pub mod recommend;
pub mod selection;
pub mod status;
pub mod store;
