mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("polyarch CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Check(args) => {
            info!("Dispatching to 'check' command.");
            commands::check::run(args)
        }
        Commands::Enumerate(args) => {
            info!("Dispatching to 'enumerate' command.");
            commands::enumerate::run(args)
        }
        Commands::Unroll(args) => {
            info!("Dispatching to 'unroll' command.");
            commands::unroll::run(args)
        }
        Commands::Expand(args) => {
            info!("Dispatching to 'expand' command.");
            commands::expand::run(args)
        }
    };

    match &command_result {
        Ok(()) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
