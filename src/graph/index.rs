// src/graph/index.rs
//! Adjacency lookups precomputed from a cleaned graph.

use std::collections::{HashMap, HashSet};

use crate::types::{PageId, SocialGraph, UserId};

/// Per-user friend and like sets, built once and shared by every query.
///
/// If the snapshot repeats a user id, the later record's edges win.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    friends: HashMap<UserId, HashSet<UserId>>,
    likes: HashMap<UserId, HashSet<PageId>>,
}

impl GraphIndex {
    #[must_use]
    pub fn build(graph: &SocialGraph) -> Self {
        let mut friends: HashMap<UserId, HashSet<UserId>> = HashMap::with_capacity(graph.users.len());
        let mut likes: HashMap<UserId, HashSet<PageId>> = HashMap::with_capacity(graph.users.len());

        for user in &graph.users {
            friends.insert(user.id, user.friends.iter().copied().collect());
            likes.insert(user.id, user.liked_pages.iter().copied().collect());
        }

        Self { friends, likes }
    }

    #[must_use]
    pub fn contains_user(&self, id: UserId) -> bool {
        self.friends.contains_key(&id)
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.friends.len()
    }

    /// Direct friends of `id`, or `None` if the user is not in the graph.
    #[must_use]
    pub fn friends_of(&self, id: UserId) -> Option<&HashSet<UserId>> {
        self.friends.get(&id)
    }

    /// Liked pages of `id`, or `None` if the user is not in the graph.
    #[must_use]
    pub fn likes_of(&self, id: UserId) -> Option<&HashSet<PageId>> {
        self.likes.get(&id)
    }

    /// Every user with their liked-page set, in no particular order.
    pub fn all_likes(&self) -> impl Iterator<Item = (UserId, &HashSet<PageId>)> {
        self.likes.iter().map(|(id, pages)| (*id, pages))
    }
}
