//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// List the Conda-managed Python interpreters installed on this machine
#[derive(Parser, Debug)]
#[command(name = "conda-envs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to <config dir>/conda-envs/config.toml)
    #[arg(long, global = true, env = "CONDA_ENVS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Conda binary to run instead of locating one
    #[arg(long, global = true)]
    pub conda: Option<PathBuf>,

    /// The command to run (defaults to `list`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List discovered Conda interpreters
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the conda binary that discovery would run
    Locate,

    /// Summarise `conda info --json`
    Info {
        /// Print the parsed descriptor as JSON
        #[arg(long)]
        json: bool,
    },
}
