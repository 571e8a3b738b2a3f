// tests/unit_names.rs
//! Name resolution and decorated output.

use mutuals_core::recommend::{
    friend_suggestions_with_names, page_suggestions_with_names, resolve_page_name,
    resolve_user_name, NameIndex, UNKNOWN_PAGE, UNKNOWN_USER,
};
use mutuals_core::types::{Page, SocialGraph, Suggestion, User};

fn sample() -> SocialGraph {
    SocialGraph::new(
        vec![
            User::new(1, "Alice").with_friends([2, 3]).with_likes([10, 11]),
            User::new(2, "Bob").with_friends([1, 4]).with_likes([11, 50]),
            User::new(3, "Cara").with_friends([1, 4]).with_likes([11, 12]),
            User::new(4, "Dan").with_friends([2, 3]),
        ],
        vec![
            Page::new(10, "Rust"),
            Page::new(11, "Cooking"),
            Page::new(12, "Chess"),
        ],
    )
}

#[test]
fn test_resolve_known_ids() {
    let g = sample();
    assert_eq!(resolve_user_name(2, &g), "Bob");
    assert_eq!(resolve_page_name(12, &g), "Chess");
}

#[test]
fn test_resolve_unknown_ids() {
    let g = sample();
    assert_eq!(resolve_user_name(99, &g), UNKNOWN_USER);
    assert_eq!(resolve_page_name(99, &g), UNKNOWN_PAGE);
    assert_eq!(UNKNOWN_USER, "Unknown User");
    assert_eq!(UNKNOWN_PAGE, "Unknown Page");
}

#[test]
fn test_name_index_agrees_with_scan() {
    let mut g = sample();
    g.users.push(User::new(2, "Second Bob").with_friends([1]));
    let names = NameIndex::build(&g);
    for id in [1, 2, 3, 4, 99] {
        assert_eq!(names.user(id), resolve_user_name(id, &g));
    }
    for id in [10, 11, 12, 50] {
        assert_eq!(names.page(id), resolve_page_name(id, &g));
    }
}

#[test]
fn test_friend_suggestions_decorated() {
    let g = sample();
    assert_eq!(
        friend_suggestions_with_names(1, &g),
        vec![Suggestion {
            id: 4,
            name: "Dan".to_string(),
            score: 2,
        }]
    );
}

#[test]
fn test_page_suggestions_decorated_with_sentinel() {
    let g = sample();
    let pages = page_suggestions_with_names(1, &g);
    assert_eq!(
        pages,
        vec![
            Suggestion {
                id: 12,
                name: "Chess".to_string(),
                score: 1,
            },
            Suggestion {
                id: 50,
                name: UNKNOWN_PAGE.to_string(),
                score: 1,
            },
        ]
    );
}

#[test]
fn test_decorated_unknown_user_is_empty() {
    let g = sample();
    assert!(friend_suggestions_with_names(7, &g).is_empty());
    assert!(page_suggestions_with_names(7, &g).is_empty());
}
