use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "mutuals", version, about = "People you may know, pages you might like")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Graph snapshot to load (overrides `mutuals.toml`)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,
    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,
    /// Maximum entries per suggestion list (0 = unlimited)
    #[arg(long, global = true, value_name = "N")]
    pub limit: Option<usize>,
    /// Drop friend ids that point at removed users while cleaning
    #[arg(long, global = true)]
    pub prune_dangling: bool,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest people the user may know
    Friends { user_id: String },
    /// Suggest pages the user might like
    Pages { user_id: String },
    /// Suggest both people and pages
    Suggest { user_id: String },
    /// Suggest people and pages for several users at once
    Batch {
        #[arg(required = true)]
        user_ids: Vec<String>,
    },
    /// Clean the snapshot and report what was removed
    Clean {
        /// Write the cleaned graph to this file
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Layers command-line flags over file settings.
    #[must_use]
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(path) = &self.data {
            config.data.path.clone_from(path);
        }
        if let Some(limit) = self.limit {
            config.output.limit = limit;
        }
        config.output.json |= self.json;
        config.sanitize.prune_dangling_friends |= self.prune_dangling;
        config
    }
}
