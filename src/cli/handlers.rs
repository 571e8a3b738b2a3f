// src/cli/handlers.rs
use crate::config::Config;
use crate::error::MutualsError;
use crate::exit::MutualsExit;
use crate::graph::{self, CleanReport};
use crate::loader;
use crate::recommend::Recommender;
use crate::reporting::{self, Section};
use crate::types::{SocialGraph, SuggestionReport, UserId};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Handles `friends`, `pages` and `suggest`.
///
/// The id is validated before the snapshot is touched.
///
/// # Errors
/// Returns error if the snapshot cannot be loaded or output fails.
pub fn handle_query(config: &Config, raw_id: &str, section: Section) -> Result<MutualsExit> {
    let user_id = match loader::parse_user_id(raw_id) {
        Ok(id) => id,
        Err(e) => return Ok(reject(&e)),
    };

    let (graph, _) = load_clean(config)?;
    let recommender = Recommender::new(&graph);

    let mut report = SuggestionReport {
        user_id,
        ..SuggestionReport::default()
    };
    if section.includes_friends() {
        report.friends = recommender.friend_suggestions(user_id);
    }
    if section.includes_pages() {
        report.pages = recommender.page_suggestions(user_id);
    }
    report.truncate(config.output.limit);

    if !config.output.json && !recommender.contains_user(user_id) {
        eprintln!("{} user {user_id} is not in the graph", "note:".yellow());
    }
    reporting::print_report(&report, section, config.output.json)?;
    Ok(MutualsExit::Success)
}

/// Handles `batch`: every id must parse before any work starts.
///
/// # Errors
/// Returns error if the snapshot cannot be loaded or output fails.
pub fn handle_batch(config: &Config, raw_ids: &[String]) -> Result<MutualsExit> {
    let mut user_ids: Vec<UserId> = Vec::with_capacity(raw_ids.len());
    for raw in raw_ids {
        match loader::parse_user_id(raw) {
            Ok(id) => user_ids.push(id),
            Err(e) => return Ok(reject(&e)),
        }
    }

    let (graph, _) = load_clean(config)?;
    let recommender = Recommender::new(&graph);

    let mut reports = recommender.suggest_many(&user_ids);
    for report in &mut reports {
        report.truncate(config.output.limit);
    }

    reporting::print_batch(&reports, config.output.json)?;
    Ok(MutualsExit::Success)
}

/// Handles `clean`.
///
/// # Errors
/// Returns error if the snapshot cannot be loaded or the output file cannot be written.
pub fn handle_clean(config: &Config, output: Option<&Path>) -> Result<MutualsExit> {
    let (graph, report) = load_clean(config)?;

    if let Some(path) = output {
        loader::write_graph(&graph, path)
            .with_context(|| format!("Failed to write cleaned graph to {}", path.display()))?;
    }

    reporting::print_clean_report(&report, config.output.json)?;
    if let (Some(path), false) = (output, config.output.json) {
        println!("{} {}", "Wrote".green(), path.display());
    }
    Ok(MutualsExit::Success)
}

fn load_clean(config: &Config) -> Result<(SocialGraph, CleanReport)> {
    let raw = loader::load_graph(&config.data.path)
        .with_context(|| format!("Failed to load graph from {}", config.data.path.display()))?;
    Ok(graph::clean_with_report(raw, &config.sanitize))
}

fn reject(err: &MutualsError) -> MutualsExit {
    eprintln!("{} {err}", "Error:".red());
    MutualsExit::from(err)
}
