//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the warden binary.

mod commands;
mod config_cmd;
mod run;

pub use commands::{Cli, Commands, ConfigCommands};
pub use config_cmd::handle_config_command;
#[cfg(feature = "discord")]
pub use run::run_bot;
pub use run::run_migrations;
