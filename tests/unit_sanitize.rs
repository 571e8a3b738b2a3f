// tests/unit_sanitize.rs
//! Cleaning pass: invariants, idempotence and dangling-edge handling.

use mutuals_core::graph::sanitize::{self, SanitizeOptions};
use mutuals_core::graph::{clean, clean_with_report};
use mutuals_core::types::{Page, SocialGraph, User};
use std::collections::HashSet;

fn messy_graph() -> SocialGraph {
    SocialGraph::new(
        vec![
            User::new(1, "Alice").with_friends([2, 2, 3, 3, 3]).with_likes([10, 10]),
            User::new(2, "Bob").with_friends([1]),
            User::new(3, "   ").with_friends([1, 2]),
            User::new(4, "").with_likes([10]),
            User::new(5, "Idle"),
            User::new(6, "  Eve  ").with_likes([11]),
            User::new(7, "Dup").with_friends([1, 7, 7]),
        ],
        vec![
            Page::new(10, "Rust"),
            Page::new(11, "Go"),
            Page::new(10, "Rust Lang"),
            Page::new(12, "Zig"),
            Page::new(11, "Golang"),
        ],
    )
}

#[test]
fn test_blank_names_removed() {
    let g = clean(messy_graph());
    assert!(g.users.iter().all(|u| !u.name.trim().is_empty()));
    assert!(g.user(3).is_none());
    assert!(g.user(4).is_none());
    assert_eq!(g.user(6).map(|u| u.name.as_str()), Some("  Eve  "));
}

#[test]
fn test_friend_and_like_lists_deduplicated() {
    let g = clean(messy_graph());
    let alice = g.user(1).expect("Alice kept");
    assert_eq!(alice.friends, vec![2, 3]);
    assert_eq!(alice.liked_pages, vec![10]);
    assert_eq!(g.user(7).map(|u| u.friends.clone()), Some(vec![1, 7]));

    for user in &g.users {
        let unique: HashSet<_> = user.friends.iter().collect();
        assert_eq!(unique.len(), user.friends.len(), "user {} has repeats", user.id);
    }
}

#[test]
fn test_inactive_users_removed() {
    let g = clean(messy_graph());
    assert!(g.user(5).is_none());
    assert!(g.users.iter().all(|u| !u.friends.is_empty() || !u.liked_pages.is_empty()));
}

#[test]
fn test_pages_collapse_last_wins() {
    let g = clean(messy_graph());
    assert_eq!(
        g.pages,
        vec![
            Page::new(10, "Rust Lang"),
            Page::new(11, "Golang"),
            Page::new(12, "Zig"),
        ]
    );
}

#[test]
fn test_user_order_preserved() {
    let g = clean(messy_graph());
    let ids: Vec<u64> = g.users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 6, 7]);
}

#[test]
fn test_clean_is_idempotent() {
    let once = clean(messy_graph());
    let (twice, report) = clean_with_report(once.clone(), &SanitizeOptions::default());
    assert_eq!(once, twice);
    assert!(report.is_noop());
    assert!(sanitize::is_clean(&twice));
}

#[test]
fn test_raw_graph_is_not_clean() {
    assert!(!sanitize::is_clean(&messy_graph()));
}

#[test]
fn test_report_counts() {
    let (_, report) = clean_with_report(messy_graph(), &SanitizeOptions::default());
    assert_eq!(report.blank_names, 2);
    assert_eq!(report.inactive_users, 1);
    assert_eq!(report.duplicate_friends, 4);
    assert_eq!(report.duplicate_likes, 1);
    assert_eq!(report.collapsed_pages, 2);
    assert_eq!(report.dangling_friends, 0);
    assert_eq!(report.users_kept, 4);
    assert_eq!(report.pages_kept, 3);
    assert_eq!(report.users_removed(), 3);
}

#[test]
fn test_empty_graph() {
    let (g, report) = clean_with_report(SocialGraph::default(), &SanitizeOptions::default());
    assert_eq!(g, SocialGraph::default());
    assert!(report.is_noop());
}

fn dangling_graph() -> SocialGraph {
    SocialGraph::new(
        vec![
            User::new(1, "A").with_friends([2]),
            User::new(2, " ").with_friends([1]),
            User::new(3, "C").with_likes([5]),
            User::new(4, "D").with_friends([1, 99]),
        ],
        vec![Page::new(5, "Five")],
    )
}

#[test]
fn test_dangling_friends_kept_by_default() {
    let g = clean(dangling_graph());
    assert_eq!(g.user(1).map(|u| u.friends.clone()), Some(vec![2]));
    assert_eq!(sanitize::dangling_friends(&g), vec![(1, 2), (4, 99)]);
}

#[test]
fn test_prune_dangling_reaches_fixed_point() {
    let options = SanitizeOptions {
        prune_dangling_friends: true,
    };
    let (g, report) = clean_with_report(dangling_graph(), &options);

    let ids: Vec<u64> = g.users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(report.dangling_friends, 3);
    assert_eq!(report.inactive_users, 2);
    assert!(sanitize::dangling_friends(&g).is_empty());

    let (again, second) = clean_with_report(g.clone(), &options);
    assert_eq!(again, g);
    assert!(second.is_noop());
}
