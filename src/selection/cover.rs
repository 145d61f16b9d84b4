// Cover optimization: fill the front page with the posts that bring the
// most benefit without exceeding the available space.

use serde::Serialize;
use tracing::info;

use super::knapsack;
use crate::model::Post;

/// Posts chosen for the cover and the benefit they add up to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverPlan {
    pub max_space: i64,
    pub max_benefit: i64,
    /// Chosen posts in input order
    pub posts: Vec<Post>,
}

impl CoverPlan {
    pub fn space_used(&self) -> u64 {
        self.posts.iter().map(|p| u64::from(p.size())).sum()
    }

    pub fn remaining(&self) -> i64 {
        self.max_space.max(0) - self.space_used() as i64
    }
}

/// Choose the posts that maximize total benefit within `max_space` units.
pub fn optimize_cover(posts: &[Post], max_space: i64) -> CoverPlan {
    let selection = knapsack::select(posts, max_space, |p| u64::from(p.size()), Post::benefit);

    info!(
        max_space,
        candidates = posts.len(),
        chosen = selection.indices.len(),
        benefit = selection.value,
        "Optimized cover"
    );

    CoverPlan {
        max_space,
        max_benefit: selection.value,
        posts: selection.items(posts).into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(id: &str, size: u32, benefit: i64) -> Post {
        Post::with_metrics(id, "U1", "content", Utc::now(), 0, size, benefit)
    }

    #[test]
    fn test_fills_space_with_best_pair() {
        let posts = vec![post("P1", 3, 150), post("P2", 4, 300), post("P3", 2, 100)];
        let plan = optimize_cover(&posts, 6);
        // P2 + P3 (size 6, benefit 400)
        assert_eq!(plan.max_benefit, 400);
        let ids: Vec<&str> = plan.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P2", "P3"]);
        assert_eq!(plan.space_used(), 6);
        assert_eq!(plan.remaining(), 0);
    }

    #[test]
    fn test_nothing_fits() {
        let posts = vec![post("P1", 3, 150)];
        let plan = optimize_cover(&posts, 2);
        assert_eq!(plan.max_benefit, 0);
        assert!(plan.posts.is_empty());
        assert_eq!(plan.remaining(), 2);
    }
}
