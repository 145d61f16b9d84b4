// Affinity scorer trait: the seam between like history and graph weights.
//
// The recommender only needs a number per pair of users. LikeHistory is the
// production implementation; tests plug in fixed tables.

/// Trait for scoring the mutual interest between two users.
pub trait AffinityScorer {
    /// Non-negative affinity between `user_a` and `user_b`. 0.0 means no
    /// known interest.
    fn affinity(&self, user_a: &str, user_b: &str) -> f64;
}

/// Scorer that knows nothing: every pair scores 0.0, which makes every
/// friendship edge cost the base weight.
pub struct NoAffinity;

impl AffinityScorer for NoAffinity {
    fn affinity(&self, _user_a: &str, _user_b: &str) -> f64 {
        0.0
    }
}
