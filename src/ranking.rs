// Relevance ranker: top-k posts by freshness-decayed popularity.
//
// relevance = likes - 0.5 * age_in_days. The posts are heapified once
// (O(n)) and popped k times (O(k log n)). Because age grows with the clock,
// the same posts can reorder between calls with no new likes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};

use crate::model::Post;

/// Heap entry: highest relevance first, earlier input position on ties.
struct Ranked<'a> {
    relevance: f64,
    position: usize,
    post: &'a Post,
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.relevance
            .total_cmp(&other.relevance)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The `k` most relevant posts right now, most relevant first.
pub fn top_by_relevance(posts: &[Post], k: usize) -> Vec<&Post> {
    top_by_relevance_at(posts, k, Utc::now())
}

/// The `k` most relevant posts as of `now`, most relevant first.
///
/// Returns `min(k, posts.len())` posts; `k == 0` returns nothing.
pub fn top_by_relevance_at(posts: &[Post], k: usize, now: DateTime<Utc>) -> Vec<&Post> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Ranked<'_>> = posts
        .iter()
        .enumerate()
        .map(|(position, post)| Ranked {
            relevance: post.relevance_at(now),
            position,
            post,
        })
        .collect();

    let mut top = Vec::with_capacity(k.min(posts.len()));
    while top.len() < k {
        match heap.pop() {
            Some(ranked) => top.push(ranked.post),
            None => break,
        }
    }
    top
}

/// All posts, newest first.
pub fn chronological(posts: &[Post]) -> Vec<&Post> {
    let mut ordered: Vec<&Post> = posts.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered
}
