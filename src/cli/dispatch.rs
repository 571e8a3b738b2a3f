//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{Cli, Commands},
    handlers::{handle_batch, handle_clean, handle_query},
};
use crate::config::Config;
use crate::exit::MutualsExit;
use crate::reporting::Section;
use anyhow::Result;
use clap::CommandFactory;

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if config loading or the command handler fails.
pub fn execute(cli: Cli) -> Result<MutualsExit> {
    let config = cli.apply_overrides(Config::load()?);

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return Ok(MutualsExit::Success);
    };

    match command {
        Commands::Friends { user_id } => handle_query(&config, &user_id, Section::Friends),
        Commands::Pages { user_id } => handle_query(&config, &user_id, Section::Pages),
        Commands::Suggest { user_id } => handle_query(&config, &user_id, Section::Both),
        Commands::Batch { user_ids } => handle_batch(&config, &user_ids),
        Commands::Clean { output } => handle_clean(&config, output.as_deref()),
    }
}
