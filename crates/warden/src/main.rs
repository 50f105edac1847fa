//! Warden CLI binary.
//!
//! - Run the Discord bot
//! - Apply database migrations
//! - Inspect and change guild configuration without Discord

use clap::Parser;
use tracing_subscriber::EnvFilter;
use warden::WardenConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_config_command, run_migrations};
    #[cfg(feature = "discord")]
    use cli::run_bot;

    // A missing .env file is fine; variables may come from the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = WardenConfig::load(cli.config.as_deref())?;

    match cli.command {
        #[cfg(feature = "discord")]
        Commands::Run => {
            run_bot(&config).await?;
        }

        Commands::Migrate => {
            run_migrations().await?;
        }

        Commands::Config(config_cmd) => {
            handle_config_command(config_cmd, &config).await?;
        }
    }

    Ok(())
}
