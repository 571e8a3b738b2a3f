// src/loader.rs
//! Reading and writing graph snapshots, and validating user-supplied ids.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{MutualsError, Result};
use crate::types::{SocialGraph, UserId};

/// Reads a JSON snapshot of the form `{ "users": [...], "pages": [...] }`.
///
/// # Errors
/// Returns an error if the file cannot be read or a required field is missing.
pub fn load_graph(path: &Path) -> Result<SocialGraph> {
    let content = fs::read_to_string(path).map_err(|source| MutualsError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let graph = parse_graph(&content)?;
    debug!(
        path = %path.display(),
        users = graph.users.len(),
        pages = graph.pages.len(),
        "graph snapshot loaded"
    );
    Ok(graph)
}

/// Parses a JSON snapshot from memory.
///
/// # Errors
/// Returns an error if the JSON is malformed or a required field is missing.
pub fn parse_graph(content: &str) -> Result<SocialGraph> {
    Ok(serde_json::from_str(content)?)
}

/// Writes a graph as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_graph(graph: &SocialGraph, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(graph)?;
    fs::write(path, json).map_err(|source| MutualsError::Io {
        source,
        path: path.to_path_buf(),
    })
}

/// Parses a user id typed by a person. Only plain ASCII digits are accepted:
/// no sign, no whitespace.
///
/// # Errors
/// Returns [`MutualsError::InvalidUserId`] for anything else, including values
/// that overflow.
pub fn parse_user_id(raw: &str) -> Result<UserId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MutualsError::InvalidUserId(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| MutualsError::InvalidUserId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_accepts_digits_only() {
        assert_eq!(parse_user_id("42").ok(), Some(42));
        assert_eq!(parse_user_id("007").ok(), Some(7));
        for bad in ["", " 4", "4 ", "-1", "+1", "1.5", "abc", "99999999999999999999999"] {
            assert!(parse_user_id(bad).is_err(), "accepted {bad:?}");
        }
    }
}
