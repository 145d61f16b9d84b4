// LikeHistory: the store of every like, and the affinity scorer built on it.
//
// Affinity between two users is
//
//   2 * (likes a gave to b's posts) + 2 * (likes b gave to a's posts)
//     + 1 * (distinct authors both of them liked)
//
// Summing both directions is what makes the score symmetric. It is not a
// metric: nothing like a triangle inequality holds.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::traits::AffinityScorer;
use crate::model::Interaction;

const DIRECT_LIKE_WEIGHT: f64 = 2.0;
const SHARED_AUTHOR_WEIGHT: f64 = 1.0;

/// Every like in the network, at most one per (user, post) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Interaction>", into = "Vec<Interaction>")]
pub struct LikeHistory {
    interactions: Vec<Interaction>,
}

impl LikeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a like. Returns false (and stores nothing) if this user has
    /// already liked this post.
    pub fn record(&mut self, interaction: Interaction) -> bool {
        if self.has_liked(&interaction.user_id, &interaction.post_id) {
            return false;
        }
        self.interactions.push(interaction);
        true
    }

    pub fn has_liked(&self, user_id: &str, post_id: &str) -> bool {
        self.interactions
            .iter()
            .any(|i| i.user_id == user_id && i.post_id == post_id)
    }

    /// All likes given by `user_id`, oldest first.
    pub fn by_user<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Interaction> {
        self.interactions.iter().filter(move |i| i.user_id == user_id)
    }

    /// How many likes each user gave to posts written by `author_id`.
    pub fn received_by_author(&self, author_id: &str) -> BTreeMap<String, usize> {
        let mut received = BTreeMap::new();
        for interaction in self.interactions.iter().filter(|i| i.author_id == author_id) {
            *received.entry(interaction.user_id.clone()).or_insert(0) += 1;
        }
        received
    }

    /// Number of likes `from` gave to posts written by `to`.
    pub fn direct_likes(&self, from: &str, to: &str) -> usize {
        self.interactions
            .iter()
            .filter(|i| i.user_id == from && i.author_id == to)
            .count()
    }

    /// Distinct authors whose posts `user_id` liked.
    pub fn liked_authors(&self, user_id: &str) -> HashSet<&str> {
        self.interactions
            .iter()
            .filter(|i| i.user_id == user_id)
            .map(|i| i.author_id.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }
}

impl AffinityScorer for LikeHistory {
    fn affinity(&self, user_a: &str, user_b: &str) -> f64 {
        let a_to_b = self.direct_likes(user_a, user_b);
        let b_to_a = self.direct_likes(user_b, user_a);

        let authors_a = self.liked_authors(user_a);
        let authors_b = self.liked_authors(user_b);
        let shared = authors_a.intersection(&authors_b).count();

        (a_to_b + b_to_a) as f64 * DIRECT_LIKE_WEIGHT + shared as f64 * SHARED_AUTHOR_WEIGHT
    }
}

/// Loading a snapshot goes through `record`, so duplicate pairs in the file
/// collapse to the first occurrence.
impl From<Vec<Interaction>> for LikeHistory {
    fn from(interactions: Vec<Interaction>) -> Self {
        let mut history = Self::new();
        for interaction in interactions {
            history.record(interaction);
        }
        history
    }
}

impl From<LikeHistory> for Vec<Interaction> {
    fn from(history: LikeHistory) -> Self {
        history.interactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn like(user: &str, post: &str, author: &str) -> Interaction {
        Interaction::new(user, post, author, Utc::now())
    }

    fn history(likes: &[(&str, &str, &str)]) -> LikeHistory {
        likes
            .iter()
            .map(|(u, p, a)| like(u, p, a))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_duplicate_like_rejected() {
        let mut h = LikeHistory::new();
        assert!(h.record(like("U1", "P1", "U2")));
        assert!(!h.record(like("U1", "P1", "U2")));
        assert!(h.record(like("U3", "P1", "U2")));
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_from_vec_drops_duplicates() {
        let h = history(&[("U1", "P1", "U2"), ("U1", "P1", "U2")]);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_affinity_formula() {
        // U1 liked two of U2's posts, U2 liked one of U1's posts,
        // and both liked something by U3.
        let h = history(&[
            ("U1", "P1", "U2"),
            ("U1", "P2", "U2"),
            ("U2", "P3", "U1"),
            ("U1", "P4", "U3"),
            ("U2", "P4", "U3"),
        ]);
        // 2*2 + 2*1 + shared authors {U3} = 7
        assert!((h.affinity("U1", "U2") - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_affinity_is_symmetric() {
        let h = history(&[
            ("U1", "P1", "U2"),
            ("U3", "P1", "U2"),
            ("U3", "P5", "U4"),
            ("U1", "P5", "U4"),
        ]);
        assert_eq!(h.affinity("U1", "U3"), h.affinity("U3", "U1"));
        // Shared authors U2 and U4, no direct likes
        assert!((h.affinity("U1", "U3") - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_history_means_zero_affinity() {
        let h = LikeHistory::new();
        assert_eq!(h.affinity("U1", "U2"), 0.0);
    }

    #[test]
    fn test_liked_authors_outlive_the_query_id() {
        let h = history(&[("U1", "P1", "U2"), ("U1", "P2", "U2"), ("U1", "P3", "U3")]);
        let authors = {
            let id = String::from("U1");
            h.liked_authors(&id)
        };
        assert_eq!(authors, HashSet::from(["U2", "U3"]));
        assert!(h.liked_authors("U9").is_empty());
    }

    #[test]
    fn test_received_by_author() {
        let h = history(&[
            ("U1", "P1", "U2"),
            ("U1", "P2", "U2"),
            ("U3", "P1", "U2"),
            ("U3", "P9", "U4"),
        ]);
        let received = h.received_by_author("U2");
        assert_eq!(received.get("U1"), Some(&2));
        assert_eq!(received.get("U3"), Some(&1));
        assert_eq!(received.len(), 2);
    }
}
