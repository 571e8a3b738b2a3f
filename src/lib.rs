//! Friend and page recommendations over a social graph snapshot.
//!
//! Load a snapshot, [`graph::clean`] it once, then query it through
//! [`recommend::Recommender`] or the free functions in [`recommend`].

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod recommend;
pub mod reporting;
pub mod types;

pub use graph::{clean, clean_with_report};
pub use recommend::{friend_suggestions_with_names, page_suggestions_with_names, Recommender};
pub use types::{Page, SocialGraph, Suggestion, User};
