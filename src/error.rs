// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MutualsError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed graph data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Invalid user id '{0}': expected a non-negative integer")]
    InvalidUserId(String),
}

pub type Result<T> = std::result::Result<T, MutualsError>;

// Allow `?` on std::io::Error by converting to MutualsError::Io with unknown path.
impl From<std::io::Error> for MutualsError {
    fn from(source: std::io::Error) -> Self {
        MutualsError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
