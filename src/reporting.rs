// src/reporting.rs
//! Terminal and JSON rendering of suggestions and cleaning reports.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::graph::CleanReport;
use crate::types::{Suggestion, SuggestionReport};

/// Which suggestion lists a command asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Friends,
    Pages,
    Both,
}

impl Section {
    #[must_use]
    pub fn includes_friends(self) -> bool {
        matches!(self, Self::Friends | Self::Both)
    }

    #[must_use]
    pub fn includes_pages(self) -> bool {
        matches!(self, Self::Pages | Self::Both)
    }
}

/// Renders one user's suggestions.
///
/// In JSON mode a single section prints as a bare array; both sections print
/// the whole report object.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_report(report: &SuggestionReport, section: Section, json: bool) -> Result<()> {
    if json {
        return match section {
            Section::Friends => print_json(&report.friends),
            Section::Pages => print_json(&report.pages),
            Section::Both => print_json(report),
        };
    }

    print_header(&format!(" SUGGESTIONS FOR USER {}", report.user_id));
    if section.includes_friends() {
        print_list("People You May Know", "mutual", &report.friends);
    }
    if section.includes_pages() {
        print_list("Pages You Might Like", "shared", &report.pages);
    }
    println!("{}", "─".repeat(60).dimmed());
    Ok(())
}

/// Renders suggestions for several users.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_batch(reports: &[SuggestionReport], json: bool) -> Result<()> {
    if json {
        return print_json(&reports);
    }
    for report in reports {
        print_report(report, Section::Both, false)?;
    }
    Ok(())
}

/// Renders the outcome of a cleaning pass.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_clean_report(report: &CleanReport, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }

    print_header(" CLEAN REPORT");
    println!("  {} {}", "Users Kept:".white(), report.users_kept);
    println!("  {} {}", "Pages Kept:".white(), report.pages_kept);
    println!();
    print_removed("Blank Names:", report.blank_names);
    print_removed("Inactive Users:", report.inactive_users);
    print_removed("Duplicate Friends:", report.duplicate_friends);
    print_removed("Duplicate Likes:", report.duplicate_likes);
    print_removed("Dangling Friends:", report.dangling_friends);
    print_removed("Collapsed Pages:", report.collapsed_pages);
    println!();

    let status = if report.is_noop() {
        "already clean".green().to_string()
    } else {
        format!("{} users removed", report.users_removed()).yellow().to_string()
    };
    println!("  {} {status}", "Status:".white());
    println!("{}", "─".repeat(60).dimmed());
    Ok(())
}

fn print_header(title: &str) {
    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", title.bold());
    println!("{}", "─".repeat(60).dimmed());
}

fn print_list(title: &str, unit: &str, items: &[Suggestion]) {
    println!();
    println!("  {}", title.cyan().bold());
    if items.is_empty() {
        println!("    {}", "no suggestions".dimmed());
        return;
    }
    for item in items {
        println!(
            "    {:>8}  {:<32} {}",
            item.id.to_string().dimmed(),
            item.name,
            format!("{} {unit}", item.score).green()
        );
    }
}

fn print_removed(label: &str, count: usize) {
    let value = if count == 0 {
        count.to_string().dimmed()
    } else {
        count.to_string().yellow()
    };
    println!("  {} {value}", label.white());
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
