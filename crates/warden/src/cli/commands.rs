//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Warden - Discord guild bot with per-guild configuration and member history
#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(about = "Discord guild bot with per-guild configuration and member history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to warden.toml (defaults to ./warden.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Discord and serve commands
    #[cfg(feature = "discord")]
    Run,

    /// Apply pending database migrations
    Migrate,

    /// Guild configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Guild configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print a guild's configuration, creating the default row if needed
    Show {
        /// Discord guild ID
        guild_id: i64,
    },

    /// Change one setting
    Set {
        /// Discord guild ID
        guild_id: i64,

        /// Setting name, e.g. `prefix` or `star_limit`
        field: String,

        /// New value; `none` clears an optional setting
        value: String,
    },
}
