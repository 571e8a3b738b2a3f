// src/graph/sanitize.rs
//! Normalization pass that turns a raw snapshot into a well-formed graph.
//!
//! After cleaning, every user has a non-blank name, no duplicate friend or
//! like entries, and at least one friend or liked page; every page id
//! appears once. Cleaning a cleaned graph is a no-op.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::types::{Page, PageId, SocialGraph, User, UserId};

/// Knobs for the cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeOptions {
    /// Remove friend ids that do not belong to any retained user.
    #[serde(default)]
    pub prune_dangling_friends: bool,
}

/// What the cleaning pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub blank_names: usize,
    pub duplicate_friends: usize,
    pub duplicate_likes: usize,
    pub inactive_users: usize,
    pub dangling_friends: usize,
    pub collapsed_pages: usize,
    pub users_kept: usize,
    pub pages_kept: usize,
}

impl CleanReport {
    /// Total number of users dropped from the snapshot.
    #[must_use]
    pub fn users_removed(&self) -> usize {
        self.blank_names + self.inactive_users
    }

    /// Returns true if the input already satisfied every invariant.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.users_removed() == 0
            && self.duplicate_friends == 0
            && self.duplicate_likes == 0
            && self.dangling_friends == 0
            && self.collapsed_pages == 0
    }
}

/// Cleans a raw graph with default options.
#[must_use]
pub fn clean(raw: SocialGraph) -> SocialGraph {
    clean_with_report(raw, &SanitizeOptions::default()).0
}

/// Cleans a raw graph and reports what each step removed.
///
/// Steps run in a fixed order: blank-name filter, per-user dedup, inactive
/// filter, then page collapse. With `prune_dangling_friends`, dangling
/// references are pruned after the inactive filter and the two repeat until
/// neither changes anything, since pruning can leave a user with no edges.
#[must_use]
pub fn clean_with_report(
    raw: SocialGraph,
    options: &SanitizeOptions,
) -> (SocialGraph, CleanReport) {
    let SocialGraph { users, pages } = raw;
    let mut report = CleanReport::default();

    let (mut users, blank) = drop_blank_names(users);
    report.blank_names = blank;

    for user in &mut users {
        report.duplicate_friends += dedup_in_order(&mut user.friends);
        report.duplicate_likes += dedup_in_order(&mut user.liked_pages);
    }

    report.inactive_users = drop_inactive(&mut users);

    if options.prune_dangling_friends {
        loop {
            let pruned = prune_dangling(&mut users);
            if pruned == 0 {
                break;
            }
            report.dangling_friends += pruned;
            report.inactive_users += drop_inactive(&mut users);
        }
    }

    let (pages, collapsed) = collapse_pages(pages);
    report.collapsed_pages = collapsed;
    report.users_kept = users.len();
    report.pages_kept = pages.len();

    info!(
        users_kept = report.users_kept,
        pages_kept = report.pages_kept,
        blank_names = report.blank_names,
        inactive_users = report.inactive_users,
        collapsed_pages = report.collapsed_pages,
        "graph cleaned"
    );
    debug!(
        duplicate_friends = report.duplicate_friends,
        duplicate_likes = report.duplicate_likes,
        dangling_friends = report.dangling_friends,
        "duplicate and dangling edges removed"
    );

    (SocialGraph { users, pages }, report)
}

/// Returns true if the graph already satisfies every cleaning invariant.
#[must_use]
pub fn is_clean(graph: &SocialGraph) -> bool {
    let users_ok = graph.users.iter().all(|u| {
        !u.has_blank_name()
            && u.is_active()
            && all_unique(&u.friends)
            && all_unique(&u.liked_pages)
    });
    let page_ids: Vec<PageId> = graph.pages.iter().map(|p| p.id).collect();
    users_ok && all_unique(&page_ids)
}

/// Lists friend ids that no user in the graph owns, as `(owner, missing)`.
#[must_use]
pub fn dangling_friends(graph: &SocialGraph) -> Vec<(UserId, UserId)> {
    let known: HashSet<UserId> = graph.users.iter().map(|u| u.id).collect();
    let known = &known;
    graph
        .users
        .iter()
        .flat_map(|u| {
            u.friends
                .iter()
                .filter(move |f| !known.contains(*f))
                .map(move |f| (u.id, *f))
        })
        .collect()
}

fn drop_blank_names(users: Vec<User>) -> (Vec<User>, usize) {
    let before = users.len();
    let kept: Vec<User> = users.into_iter().filter(|u| !u.has_blank_name()).collect();
    let removed = before - kept.len();
    (kept, removed)
}

fn drop_inactive(users: &mut Vec<User>) -> usize {
    let before = users.len();
    users.retain(User::is_active);
    before - users.len()
}

fn prune_dangling(users: &mut [User]) -> usize {
    let known: HashSet<UserId> = users.iter().map(|u| u.id).collect();
    users
        .iter_mut()
        .map(|u| {
            let before = u.friends.len();
            u.friends.retain(|f| known.contains(f));
            before - u.friends.len()
        })
        .sum()
}

/// Collapses pages sharing an id. The last record wins, placed where the id
/// first appeared.
fn collapse_pages(pages: Vec<Page>) -> (Vec<Page>, usize) {
    let total = pages.len();
    let mut slots: HashMap<PageId, usize> = HashMap::with_capacity(total);
    let mut unique: Vec<Page> = Vec::with_capacity(total);

    for page in pages {
        if let Some(&slot) = slots.get(&page.id) {
            unique[slot] = page;
        } else {
            slots.insert(page.id, unique.len());
            unique.push(page);
        }
    }

    let collapsed = total - unique.len();
    (unique, collapsed)
}

/// Removes repeated entries, keeping first occurrences. Returns how many were removed.
fn dedup_in_order<T: Copy + Eq + Hash>(items: &mut Vec<T>) -> usize {
    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    items.retain(|item| seen.insert(*item));
    before - items.len()
}

fn all_unique<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let mut v = vec![3, 1, 3, 2, 1];
        assert_eq!(dedup_in_order(&mut v), 2);
        assert_eq!(v, vec![3, 1, 2]);
    }

    #[test]
    fn collapse_keeps_last_record_in_first_slot() {
        let pages = vec![
            Page::new(1, "Old"),
            Page::new(2, "Two"),
            Page::new(1, "New"),
        ];
        let (unique, collapsed) = collapse_pages(pages);
        assert_eq!(collapsed, 1);
        assert_eq!(unique, vec![Page::new(1, "New"), Page::new(2, "Two")]);
    }

    #[test]
    fn prune_reports_removed_edges() {
        let mut users = vec![User::new(1, "A").with_friends([2, 9, 8])];
        users.push(User::new(2, "B").with_friends([1]));
        assert_eq!(prune_dangling(&mut users), 2);
        assert_eq!(users[0].friends, vec![2]);
    }
}
