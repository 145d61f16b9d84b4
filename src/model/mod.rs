// Data models: the entities that flow through the application.
//
// These are plain serde types. The `Network` context in network.rs owns
// collections of them; the algorithm modules only ever borrow them.

pub mod network;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub use network::{FriendshipOutcome, LikeOutcome, Network};

/// Content characters per unit of cover space.
const CHARS_PER_SIZE_UNIT: usize = 50;

/// Relevance lost per whole day of post age.
const RELEVANCE_DECAY_PER_DAY: f64 = 0.5;

/// Share of relevance folded into a post's benefit.
const BENEFIT_RELEVANCE_SHARE: f64 = 0.5;

/// A member of the network and the ids of their friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Friend ids in the order the friendships were made, without duplicates
    pub friends: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            friends: Vec::new(),
        }
    }

    /// Add a friend id. Returns false if already present or if it is our own id.
    pub fn add_friend(&mut self, friend_id: &str) -> bool {
        if friend_id == self.id || self.friends.iter().any(|f| f == friend_id) {
            return false;
        }
        self.friends.push(friend_id.to_string());
        true
    }
}

/// A post with its derived cover metrics.
///
/// `likes`, `size` and `benefit` are private: the only way to change the
/// like count is `set_likes` / `add_like`, which recompute the benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    likes: u32,
    #[serde(deserialize_with = "deserialize_size")]
    size: u32,
    benefit: i64,
}

impl Post {
    /// Create a post whose size and benefit are derived from its content,
    /// likes and age.
    pub fn new(
        id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        likes: u32,
    ) -> Self {
        let content = content.into();
        let mut post = Self {
            id: id.into(),
            author_id: author_id.into(),
            size: size_for_content(&content),
            content,
            created_at,
            likes,
            benefit: 0,
        };
        post.benefit = post.derived_benefit(Utc::now());
        post
    }

    /// Create a post with curated size and benefit (seed data).
    /// A size of 0 is raised to 1.
    pub fn with_metrics(
        id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        likes: u32,
        size: u32,
        benefit: i64,
    ) -> Self {
        Self {
            id: id.into(),
            author_id: author_id.into(),
            content: content.into(),
            created_at,
            likes,
            size: size.max(1),
            benefit,
        }
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    /// Cover space this post occupies. Always at least 1.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn benefit(&self) -> i64 {
        self.benefit
    }

    /// Set the like count and recompute the benefit.
    pub fn set_likes(&mut self, likes: u32) {
        self.likes = likes;
        self.benefit = self.derived_benefit(Utc::now());
    }

    /// Register one more like. Returns the new like count.
    pub fn add_like(&mut self) -> u32 {
        self.set_likes(self.likes.saturating_add(1));
        self.likes
    }

    /// Whole days between creation and `now`, truncated toward zero.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }

    /// `likes - 0.5 * age_in_days`, measured at `now`.
    pub fn relevance_at(&self, now: DateTime<Utc>) -> f64 {
        f64::from(self.likes) - self.age_in_days(now) as f64 * RELEVANCE_DECAY_PER_DAY
    }

    fn derived_benefit(&self, now: DateTime<Utc>) -> i64 {
        (f64::from(self.likes) + self.relevance_at(now) * BENEFIT_RELEVANCE_SHARE) as i64
    }
}

/// Cover space for a piece of content: one unit per 50 characters, minimum 1.
pub fn size_for_content(content: &str) -> u32 {
    let units = content.chars().count() / CHARS_PER_SIZE_UNIT;
    u32::try_from(units).unwrap_or(u32::MAX).max(1)
}

/// Snapshots are hand-editable; a stored size of 0 loads as 1.
fn deserialize_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(u32::deserialize(deserializer)?.max(1))
}

/// An advertisement that can be bought for the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub name: String,
    pub cost: u32,
    /// Estimated number of users the ad reaches
    pub reach: u32,
}

impl Ad {
    pub fn new(name: impl Into<String>, cost: u32, reach: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            reach,
        }
    }
}

/// A like: `user_id` liked `post_id`, written by `author_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: String,
    pub post_id: String,
    pub author_id: String,
    pub liked_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(
        user_id: impl Into<String>,
        post_id: impl Into<String>,
        author_id: impl Into<String>,
        liked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            post_id: post_id.into(),
            author_id: author_id.into(),
            liked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_size_is_at_least_one() {
        assert_eq!(size_for_content(""), 1);
        assert_eq!(size_for_content("short"), 1);
        assert_eq!(size_for_content(&"x".repeat(149)), 2);
        assert_eq!(size_for_content(&"x".repeat(150)), 3);
    }

    #[test]
    fn test_size_counts_chars_not_bytes() {
        // 50 two-byte characters are one unit, not two
        assert_eq!(size_for_content(&"é".repeat(99)), 1);
    }

    #[test]
    fn test_curated_size_zero_is_raised() {
        let post = Post::with_metrics("P1", "U1", "hi", Utc::now(), 3, 0, 10);
        assert_eq!(post.size(), 1);
    }

    #[test]
    fn test_stored_size_zero_is_raised_on_load() {
        let json = r#"{
            "id": "P1",
            "author_id": "U1",
            "content": "hi",
            "created_at": "2024-05-01T12:00:00Z",
            "likes": 3,
            "size": 0,
            "benefit": 10
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.size(), 1);
        assert_eq!(post.benefit(), 10);
    }

    #[test]
    fn test_relevance_decays_by_whole_days() {
        let now = Utc::now();
        let post = Post::new("P1", "U1", "hello", now - Duration::hours(60), 10);
        // 60 hours is 2 whole days
        assert_eq!(post.age_in_days(now), 2);
        assert!((post.relevance_at(now) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_fresh_post_benefit() {
        let post = Post::new("P1", "U1", "hello", Utc::now(), 10);
        // 10 + 0.5 * 10
        assert_eq!(post.benefit(), 15);
    }

    #[test]
    fn test_set_likes_recomputes_benefit() {
        let mut post = Post::with_metrics("P1", "U1", "hello", Utc::now(), 3, 2, 999);
        post.set_likes(20);
        assert_eq!(post.likes(), 20);
        assert_eq!(post.benefit(), 30);
        assert_eq!(post.add_like(), 21);
        assert_eq!(post.benefit(), 31);
    }

    #[test]
    fn test_add_friend_rejects_self_and_duplicates() {
        let mut user = User::new("U1", "Ana");
        assert!(user.add_friend("U2"));
        assert!(!user.add_friend("U2"));
        assert!(!user.add_friend("U1"));
        assert_eq!(user.friends, vec!["U2".to_string()]);
    }
}
