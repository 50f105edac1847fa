//! Discord bot client setup and lifecycle management.

use std::sync::Arc;

use serenity::Client;
use tracing::{info, instrument};
use warden_cache::ConfigCache;

use super::{DiscordError, DiscordErrorKind, handler::WardenHandler};
use crate::Whois;

/// Main Discord bot client for Warden.
///
/// # Example
/// ```rust,ignore
/// use std::sync::Arc;
/// use warden_cache::ConfigCache;
/// use warden_database::{PgGuildConfigStore, PgWhoisStore, create_pool, database_url};
/// use warden_social::{WardenBot, Whois, WhoisConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(&database_url()?, 4)?;
///     let configs = Arc::new(ConfigCache::new(Arc::new(PgGuildConfigStore::new(pool.clone()))));
///     let whois = Arc::new(Whois::new(Arc::new(PgWhoisStore::new(pool)), WhoisConfig::default()));
///
///     let mut bot = WardenBot::new(std::env::var("DISCORD_TOKEN")?, configs, whois).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct WardenBot {
    client: Client,
}

impl WardenBot {
    /// Create a new WardenBot instance.
    ///
    /// # Errors
    /// Returns an error if the token is empty or the Serenity client fails to
    /// initialize.
    #[instrument(skip(token, configs, whois), fields(token_len = token.len()))]
    pub async fn new(
        token: String,
        configs: Arc<ConfigCache>,
        whois: Arc<Whois>,
    ) -> Result<Self, DiscordError> {
        info!("Initializing Warden Discord bot");

        if token.trim().is_empty() {
            return Err(DiscordError::new(DiscordErrorKind::ConfigurationError(
                "Discord token is empty".to_string(),
            )));
        }

        let handler = WardenHandler::new(configs, whois);
        let intents = WardenHandler::intents();

        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        Ok(Self { client })
    }

    /// Start the Discord bot.
    ///
    /// Blocks until the bot shuts down.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), DiscordError> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
