//! conda-envs CLI
//!
//! Lists the Conda-managed Python interpreters installed on this machine.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use conda_discovery::CondaEnvService;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    let config = context::resolve_config(cli.config.as_deref(), cli.conda.as_deref())?;
    let service = CondaEnvService::new(&config);

    match cli.command.unwrap_or(Commands::List { json: false }) {
        Commands::List { json } => commands::run_list(&service, json).await,
        Commands::Locate => commands::run_locate(&service).await,
        Commands::Info { json } => commands::run_info(&service, json).await,
    }
}
