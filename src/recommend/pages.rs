// src/recommend/pages.rs
//! "Pages you might like": shared-interest overlap scoring.

use std::collections::HashMap;

use super::ranking;
use crate::graph::GraphIndex;
use crate::types::{PageId, Score, SocialGraph, UserId};

/// Ranks page candidates for `user_id` by shared-interest score.
///
/// Returns an empty list if the user is not in the graph.
#[must_use]
pub fn suggest_pages(user_id: UserId, graph: &SocialGraph) -> Vec<(PageId, Score)> {
    score_pages(user_id, &GraphIndex::build(graph))
}

/// Index-backed form of [`suggest_pages`].
///
/// Every other user who shares `n >= 1` liked pages with `user_id` adds `n`
/// to each of their liked pages that `user_id` does not already like.
#[must_use]
pub fn score_pages(user_id: UserId, index: &GraphIndex) -> Vec<(PageId, Score)> {
    let Some(liked) = index.likes_of(user_id) else {
        return Vec::new();
    };

    let mut scores: HashMap<PageId, Score> = HashMap::new();
    for (other, pages) in index.all_likes() {
        if other == user_id {
            continue;
        }

        let shared = liked.intersection(pages).count();
        if shared == 0 {
            continue;
        }

        for page in pages.difference(liked) {
            *scores.entry(*page).or_default() += shared;
        }
    }

    ranking::rank(scores)
}
