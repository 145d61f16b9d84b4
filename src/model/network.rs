// Network: the explicit context owning every entity.
//
// Users, posts, ads and the like history all live here and are passed by
// reference into the algorithms. Nothing is global: a test can build as
// many independent networks as it wants.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Ad, Interaction, Post, User};
use crate::affinity::likes::LikeHistory;
use crate::graph::FriendGraph;

/// Result of asking for a new friendship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendshipOutcome {
    Created,
    AlreadyFriends,
    /// One of the ids is not a registered user
    UnknownUser(String),
    SelfFriendship,
}

/// Result of registering a like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The like was stored; carries the post's new like count
    Recorded { likes: u32 },
    /// This user already liked this post; nothing changed
    Duplicate,
    UnknownUser,
    UnknownPost,
}

/// Everything the analyses need, loaded in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    users: BTreeMap<String, User>,
    posts: Vec<Post>,
    ads: Vec<Ad>,
    likes: LikeHistory,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. Returns false if the id is already taken.
    pub fn add_user(&mut self, id: &str, name: &str) -> bool {
        if self.users.contains_key(id) {
            return false;
        }
        self.users.insert(id.to_string(), User::new(id, name));
        true
    }

    /// Befriend two users. Both sides are updated.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> FriendshipOutcome {
        if a == b {
            return FriendshipOutcome::SelfFriendship;
        }
        for id in [a, b] {
            if !self.users.contains_key(id) {
                return FriendshipOutcome::UnknownUser(id.to_string());
            }
        }

        let added_a = self.users.get_mut(a).is_some_and(|u| u.add_friend(b));
        let added_b = self.users.get_mut(b).is_some_and(|u| u.add_friend(a));

        if added_a || added_b {
            FriendshipOutcome::Created
        } else {
            FriendshipOutcome::AlreadyFriends
        }
    }

    /// Add a post. Returns false if a post with the same id exists.
    pub fn add_post(&mut self, post: Post) -> bool {
        if self.post(&post.id).is_some() {
            return false;
        }
        self.posts.push(post);
        true
    }

    pub fn add_ad(&mut self, ad: Ad) {
        self.ads.push(ad);
    }

    /// Record that `user_id` liked `post_id` at `at`.
    ///
    /// The post's like count (and with it its benefit) only changes when the
    /// interaction is new.
    pub fn like_post(&mut self, user_id: &str, post_id: &str, at: DateTime<Utc>) -> LikeOutcome {
        if !self.users.contains_key(user_id) {
            return LikeOutcome::UnknownUser;
        }
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return LikeOutcome::UnknownPost;
        };

        let interaction = Interaction::new(user_id, post_id, post.author_id.clone(), at);
        if !self.likes.record(interaction) {
            debug!(user = user_id, post = post_id, "Duplicate like ignored");
            return LikeOutcome::Duplicate;
        }

        LikeOutcome::Recorded {
            likes: post.add_like(),
        }
    }

    /// Import historical likes whose counts are already part of the posts'
    /// like totals. Likes from unknown users or on unknown posts are skipped,
    /// as are duplicates. The author id is taken from the post.
    /// Returns how many likes were imported.
    pub fn import_likes<'a>(
        &mut self,
        likes: impl IntoIterator<Item = (&'a str, &'a str, DateTime<Utc>)>,
    ) -> usize {
        let mut imported = 0;
        for (user_id, post_id, at) in likes {
            if !self.users.contains_key(user_id) {
                continue;
            }
            let Some(post) = self.posts.iter().find(|p| p.id == post_id) else {
                continue;
            };
            let interaction = Interaction::new(user_id, post_id, post.author_id.clone(), at);
            if self.likes.record(interaction) {
                imported += 1;
            }
        }
        imported
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// All users, ordered by id.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn ads(&self) -> &[Ad] {
        &self.ads
    }

    pub fn likes(&self) -> &LikeHistory {
        &self.likes
    }

    /// Build the friendship graph from the current user records.
    pub fn friend_graph(&self) -> FriendGraph {
        FriendGraph::from_users(self.users.values())
    }

    /// User id → display name, for presentation only.
    pub fn display_names(&self) -> HashMap<String, String> {
        self.users
            .values()
            .map(|u| (u.id.clone(), u.name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_users() -> Network {
        let mut network = Network::new();
        network.add_user("U1", "Ana");
        network.add_user("U2", "Beto");
        network
    }

    #[test]
    fn test_duplicate_user_id_rejected() {
        let mut network = two_users();
        assert!(!network.add_user("U1", "Someone else"));
        assert_eq!(network.user("U1").map(|u| u.name.as_str()), Some("Ana"));
    }

    #[test]
    fn test_friendship_is_symmetric() {
        let mut network = two_users();
        assert_eq!(network.add_friendship("U1", "U2"), FriendshipOutcome::Created);
        assert_eq!(network.user("U1").unwrap().friends, vec!["U2"]);
        assert_eq!(network.user("U2").unwrap().friends, vec!["U1"]);
        assert_eq!(
            network.add_friendship("U2", "U1"),
            FriendshipOutcome::AlreadyFriends
        );
    }

    #[test]
    fn test_friendship_with_unknown_user() {
        let mut network = two_users();
        assert_eq!(
            network.add_friendship("U1", "U9"),
            FriendshipOutcome::UnknownUser("U9".to_string())
        );
        assert!(network.user("U1").unwrap().friends.is_empty());
        assert_eq!(
            network.add_friendship("U1", "U1"),
            FriendshipOutcome::SelfFriendship
        );
    }

    #[test]
    fn test_like_updates_post_once() {
        let mut network = two_users();
        network.add_post(Post::new("P1", "U2", "hello", Utc::now(), 4));

        let now = Utc::now();
        assert_eq!(
            network.like_post("U1", "P1", now),
            LikeOutcome::Recorded { likes: 5 }
        );
        assert_eq!(network.like_post("U1", "P1", now), LikeOutcome::Duplicate);
        assert_eq!(network.post("P1").unwrap().likes(), 5);
        assert_eq!(network.likes().len(), 1);
        assert_eq!(network.likes().iter().next().unwrap().author_id, "U2");
    }

    #[test]
    fn test_like_unknown_entities() {
        let mut network = two_users();
        network.add_post(Post::new("P1", "U2", "hello", Utc::now(), 0));
        assert_eq!(
            network.like_post("U9", "P1", Utc::now()),
            LikeOutcome::UnknownUser
        );
        assert_eq!(
            network.like_post("U1", "P9", Utc::now()),
            LikeOutcome::UnknownPost
        );
        assert!(network.likes().is_empty());
    }

    #[test]
    fn test_import_likes_leaves_counts_alone() {
        let mut network = two_users();
        network.add_post(Post::with_metrics("P1", "U2", "hello", Utc::now(), 40, 2, 55));
        let now = Utc::now();
        let imported = network.import_likes([
            ("U1", "P1", now),
            ("U1", "P1", now),
            ("U9", "P1", now),
            ("U1", "P9", now),
        ]);
        assert_eq!(imported, 1);
        assert_eq!(network.post("P1").unwrap().likes(), 40);
        assert_eq!(network.post("P1").unwrap().benefit(), 55);
        assert!(network.likes().has_liked("U1", "P1"));
    }

    #[test]
    fn test_duplicate_post_id_rejected() {
        let mut network = two_users();
        assert!(network.add_post(Post::new("P1", "U1", "a", Utc::now(), 0)));
        assert!(!network.add_post(Post::new("P1", "U2", "b", Utc::now(), 0)));
        assert_eq!(network.posts().len(), 1);
    }
}
