// Affinity scoring: how much two users care about each other's content.
//
// The trait lives in traits.rs so the recommender can be driven by any
// scorer; likes.rs holds the like-history store that backs the real one.

pub mod likes;
pub mod traits;

pub use likes::LikeHistory;
pub use traits::{AffinityScorer, NoAffinity};
