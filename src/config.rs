// src/config.rs
//! Settings loaded from `mutuals.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MutualsError, Result};
use crate::graph::SanitizeOptions;

pub const CONFIG_FILE: &str = "mutuals.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub sanitize: SanitizeOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Maximum entries per suggestion list; 0 means unlimited.
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub json: bool,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data").join("massive_data.json")
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `mutuals.toml` from the working directory, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads a config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(MutualsError::Io {
                source,
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parses TOML content. `path` is only used in error messages.
    ///
    /// # Errors
    /// Returns an error if the content is not valid config TOML.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| MutualsError::Config {
            source,
            path: path.to_path_buf(),
        })
    }
}
