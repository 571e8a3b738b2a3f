// src/types.rs
use serde::{Deserialize, Serialize};

/// Identifier of a user within a graph snapshot.
pub type UserId = u64;

/// Identifier of a page within a graph snapshot.
pub type PageId = u64;

/// Raw count produced by the scorers.
pub type Score = usize;

/// A member of the social graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub friends: Vec<UserId>,
    pub liked_pages: Vec<PageId>,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            friends: Vec::new(),
            liked_pages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_friends(mut self, friends: impl IntoIterator<Item = UserId>) -> Self {
        self.friends = friends.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_likes(mut self, pages: impl IntoIterator<Item = PageId>) -> Self {
        self.liked_pages = pages.into_iter().collect();
        self
    }

    /// Returns true if the display name is empty after trimming.
    #[must_use]
    pub fn has_blank_name(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Returns true if the user has at least one friend or one liked page.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.friends.is_empty() || !self.liked_pages.is_empty()
    }
}

/// A likeable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
}

impl Page {
    #[must_use]
    pub fn new(id: PageId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// A snapshot of users, pages and the edges between them.
///
/// Friendship edges are stored per user and are not assumed to be symmetric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialGraph {
    pub users: Vec<User>,
    pub pages: Vec<Page>,
}

impl SocialGraph {
    #[must_use]
    pub fn new(users: Vec<User>, pages: Vec<Page>) -> Self {
        Self { users, pages }
    }

    /// Linear lookup of a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Linear lookup of a page by id.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }
}

/// A scored recommendation decorated with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: u64,
    pub name: String,
    pub score: Score,
}

/// Friend and page suggestions for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionReport {
    pub user_id: UserId,
    pub friends: Vec<Suggestion>,
    pub pages: Vec<Suggestion>,
}

impl SuggestionReport {
    /// Returns true if neither list has any entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty() && self.pages.is_empty()
    }

    /// Keeps at most `limit` entries per list. A limit of zero keeps everything.
    pub fn truncate(&mut self, limit: usize) {
        if limit > 0 {
            self.friends.truncate(limit);
            self.pages.truncate(limit);
        }
    }
}
