// src/recommend/friends.rs
//! "People you may know": mutual-friend counting.

use std::collections::HashMap;

use super::ranking;
use crate::graph::GraphIndex;
use crate::types::{Score, SocialGraph, UserId};

/// Ranks friend candidates for `user_id` by number of mutual friends.
///
/// Returns an empty list if the user is not in the graph.
#[must_use]
pub fn suggest_friends(user_id: UserId, graph: &SocialGraph) -> Vec<(UserId, Score)> {
    score_friends(user_id, &GraphIndex::build(graph))
}

/// Index-backed form of [`suggest_friends`].
///
/// A candidate's score is the number of `user_id`'s direct friends that list
/// the candidate as a friend. Friends with no entry in the index contribute
/// nothing.
#[must_use]
pub fn score_friends(user_id: UserId, index: &GraphIndex) -> Vec<(UserId, Score)> {
    let Some(direct) = index.friends_of(user_id) else {
        return Vec::new();
    };

    let mut scores: HashMap<UserId, Score> = HashMap::new();
    for friend in direct {
        let Some(second) = index.friends_of(*friend) else {
            continue;
        };
        for &candidate in second {
            if candidate != user_id && !direct.contains(&candidate) {
                *scores.entry(candidate).or_default() += 1;
            }
        }
    }

    ranking::rank(scores)
}
