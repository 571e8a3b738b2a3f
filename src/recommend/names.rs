// src/recommend/names.rs
//! Id to display-name lookup used to decorate ranked results.

use std::collections::HashMap;

use crate::types::{PageId, SocialGraph, UserId};

pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN_PAGE: &str = "Unknown Page";

/// Linear scan for a user's display name. First match wins.
#[must_use]
pub fn resolve_user_name(id: UserId, graph: &SocialGraph) -> &str {
    graph.user(id).map_or(UNKNOWN_USER, |u| u.name.as_str())
}

/// Linear scan for a page's display name. First match wins.
#[must_use]
pub fn resolve_page_name(id: PageId, graph: &SocialGraph) -> &str {
    graph.page(id).map_or(UNKNOWN_PAGE, |p| p.name.as_str())
}

/// Map-backed name lookup, built once per batch of queries.
///
/// Agrees with the linear resolvers, including on repeated ids.
#[derive(Debug, Clone, Default)]
pub struct NameIndex<'g> {
    users: HashMap<UserId, &'g str>,
    pages: HashMap<PageId, &'g str>,
}

impl<'g> NameIndex<'g> {
    #[must_use]
    pub fn build(graph: &'g SocialGraph) -> Self {
        let mut users = HashMap::with_capacity(graph.users.len());
        for user in &graph.users {
            users.entry(user.id).or_insert(user.name.as_str());
        }

        let mut pages = HashMap::with_capacity(graph.pages.len());
        for page in &graph.pages {
            pages.entry(page.id).or_insert(page.name.as_str());
        }

        Self { users, pages }
    }

    #[must_use]
    pub fn user(&self, id: UserId) -> &'g str {
        self.users.get(&id).copied().unwrap_or(UNKNOWN_USER)
    }

    #[must_use]
    pub fn page(&self, id: PageId) -> &'g str {
        self.pages.get(&id).copied().unwrap_or(UNKNOWN_PAGE)
    }
}
