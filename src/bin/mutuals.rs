use clap::Parser;
use colored::Colorize;
use mutuals_core::cli::{self, Cli};
use mutuals_core::exit::MutualsExit;
use mutuals_core::logging;

fn main() -> MutualsExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            MutualsExit::Error
        }
    }
}
