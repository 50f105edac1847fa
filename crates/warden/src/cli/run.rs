//! Bot startup and migration command handlers.

use warden_database::establish_connection;

/// Apply pending migrations and report what ran.
pub async fn run_migrations() -> Result<(), Box<dyn std::error::Error>> {
    let applied = tokio::task::spawn_blocking(|| {
        let mut conn = establish_connection()?;
        warden_database::run_migrations(&mut conn)
    })
    .await??;

    if applied.is_empty() {
        println!("Database is up to date");
    } else {
        for version in &applied {
            println!("Applied migration {}", version);
        }
    }
    Ok(())
}

/// Connect to the database and Discord and serve until shutdown.
///
/// Pending migrations are applied before the bot connects.
#[cfg(feature = "discord")]
pub async fn run_bot(config: &warden::WardenConfig) -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::Arc;
    use tracing::info;
    use warden::{ConfigCache, WardenBot, Whois, discord_token};
    use warden_database::{PgGuildConfigStore, PgWhoisStore, create_pool, database_url};

    let token = discord_token()?;
    run_migrations().await?;

    let pool = create_pool(&database_url()?, *config.database().pool_size())?;
    let configs = Arc::new(ConfigCache::new(Arc::new(PgGuildConfigStore::new(
        pool.clone(),
    ))));
    let whois = Arc::new(Whois::new(
        Arc::new(PgWhoisStore::new(pool)),
        config.whois().clone(),
    ));

    info!(
        tracked_guilds = config.whois().tracked_guilds().len(),
        "Starting Warden"
    );

    let mut bot = WardenBot::new(token, configs, whois).await?;
    bot.start().await?;
    Ok(())
}
