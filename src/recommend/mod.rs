// src/recommend/mod.rs
//! Friend and page recommendations over a cleaned graph.

pub mod friends;
pub mod names;
pub mod pages;
pub mod ranking;

pub use friends::{score_friends, suggest_friends};
pub use names::{resolve_page_name, resolve_user_name, NameIndex, UNKNOWN_PAGE, UNKNOWN_USER};
pub use pages::{score_pages, suggest_pages};

use rayon::prelude::*;
use tracing::debug;

use crate::graph::GraphIndex;
use crate::types::{Score, SocialGraph, Suggestion, SuggestionReport, UserId};

/// Friend suggestions for `user_id`, each decorated with the candidate's name.
#[must_use]
pub fn friend_suggestions_with_names(user_id: UserId, graph: &SocialGraph) -> Vec<Suggestion> {
    decorate(suggest_friends(user_id, graph), |id| resolve_user_name(id, graph))
}

/// Page suggestions for `user_id`, each decorated with the page's name.
#[must_use]
pub fn page_suggestions_with_names(user_id: UserId, graph: &SocialGraph) -> Vec<Suggestion> {
    decorate(suggest_pages(user_id, graph), |id| resolve_page_name(id, graph))
}

fn decorate<'a>(ranked: Vec<(u64, Score)>, name_of: impl Fn(u64) -> &'a str) -> Vec<Suggestion> {
    ranked
        .into_iter()
        .map(|(id, score)| Suggestion {
            id,
            name: name_of(id).to_string(),
            score,
        })
        .collect()
}

/// Answers repeated queries against one cleaned graph.
///
/// Lookup maps are built once in [`Recommender::new`]; the graph is only
/// borrowed, so any number of queries may run concurrently.
pub struct Recommender<'g> {
    index: GraphIndex,
    names: NameIndex<'g>,
}

impl<'g> Recommender<'g> {
    #[must_use]
    pub fn new(graph: &'g SocialGraph) -> Self {
        let index = GraphIndex::build(graph);
        let names = NameIndex::build(graph);
        debug!(users = index.user_count(), "recommender index built");
        Self { index, names }
    }

    #[must_use]
    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.index.contains_user(user_id)
    }

    #[must_use]
    pub fn friend_suggestions(&self, user_id: UserId) -> Vec<Suggestion> {
        decorate(score_friends(user_id, &self.index), |id| self.names.user(id))
    }

    #[must_use]
    pub fn page_suggestions(&self, user_id: UserId) -> Vec<Suggestion> {
        decorate(score_pages(user_id, &self.index), |id| self.names.page(id))
    }

    /// Both suggestion lists for one user.
    #[must_use]
    pub fn suggest(&self, user_id: UserId) -> SuggestionReport {
        SuggestionReport {
            user_id,
            friends: self.friend_suggestions(user_id),
            pages: self.page_suggestions(user_id),
        }
    }

    /// Runs [`Recommender::suggest`] for every id in parallel. Output follows input order.
    #[must_use]
    pub fn suggest_many(&self, user_ids: &[UserId]) -> Vec<SuggestionReport> {
        user_ids.par_iter().map(|&id| self.suggest(id)).collect()
    }
}
