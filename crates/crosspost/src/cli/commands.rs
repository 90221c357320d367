//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Compose per-platform publish requests from one authoring intent.
#[derive(Parser, Debug)]
#[command(name = "crosspost")]
#[command(about = "Crosspost - Publish request composition")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "CROSSPOST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose one publish request per target platform
    Compose {
        /// Path to the publish request JSON
        #[arg(short, long)]
        request: PathBuf,

        /// Path to a stored post JSON with persisted variants
        #[arg(short, long)]
        stored: Option<PathBuf>,

        /// Profile key passed through to every request
        #[arg(short, long, env = "AYRSHARE_PROFILE_KEY")]
        profile_key: String,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Rewrite legacy option fields and print the normalized request
    Normalize {
        /// Path to the publish request JSON
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Print the option key for each platform
    Key {
        /// Platform names
        #[arg(required = true)]
        platforms: Vec<String>,
    },

    /// List registered platforms
    Platforms,
}
