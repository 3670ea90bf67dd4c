//! Command-line interface.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::load_settings;

#[derive(Parser)]
#[command(name = "linkbio")]
#[command(about = "Self-hosted link-in-bio profile page")]
#[command(version)]
pub struct Cli {
    /// Config file path (default: ./linkbio.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT
        bind: Option<String>,
    },

    /// Render the profile to the terminal
    Show,

    /// Validate the profile document and check configured links
    Check,
}

/// Parse CLI arguments and dispatch to the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => commands::cmd_serve(&settings, bind.as_deref()).await,
        Commands::Show => commands::cmd_show(&settings).await,
        Commands::Check => commands::cmd_check(&settings).await,
    }
}
