// src/recommend/ranking.rs
//! Ordering shared by both recommenders.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::Score;

/// Candidates scoring below this are discarded.
pub const MIN_SCORE: Score = 1;

/// Turns accumulated scores into a ranked list: score descending, then id ascending.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn rank(scores: HashMap<u64, Score>) -> Vec<(u64, Score)> {
    let mut ranked: Vec<(u64, Score)> = scores
        .into_iter()
        .filter(|(_, score)| *score >= MIN_SCORE)
        .collect();
    ranked.sort_by(by_score_then_id);
    ranked
}

fn by_score_then_id(a: &(u64, Score), b: &(u64, Score)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_by_ascending_id() {
        let scores: HashMap<u64, Score> = [(9, 2), (4, 1), (7, 2), (1, 1)].into_iter().collect();
        assert_eq!(rank(scores), vec![(7, 2), (9, 2), (1, 1), (4, 1)]);
    }

    #[test]
    fn zero_scores_are_dropped() {
        let scores: HashMap<u64, Score> = [(1, 0), (2, 3)].into_iter().collect();
        assert_eq!(rank(scores), vec![(2, 3)]);
    }
}
