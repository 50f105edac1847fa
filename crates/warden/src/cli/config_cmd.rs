//! Guild configuration command handlers.

use std::sync::Arc;

use tracing::info;
use warden::{ConfigCache, GuildConfigField, GuildConfigRecord, SettingValue, WardenConfig, WardenResult};
use warden_database::{PgGuildConfigStore, create_pool, database_url};

use super::ConfigCommands;

fn print_record(record: &GuildConfigRecord) {
    fn show<T: std::fmt::Display>(value: Option<T>) -> String {
        value.map_or_else(|| "-".to_string(), |v| v.to_string())
    }

    println!("guild_id         {}", record.guild_id);
    println!("prefix           {}", record.prefix);
    println!("mod_role_id      {}", show(record.mod_role_id));
    println!("mute_role_id     {}", show(record.mute_role_id));
    println!("star_channel_id  {}", show(record.star_channel_id));
    println!("star_limit       {}", show(record.star_limit));
}

/// Handle `warden config ...`.
pub async fn handle_config_command(cmd: ConfigCommands, config: &WardenConfig) -> WardenResult<()> {
    let pool = create_pool(&database_url()?, *config.database().pool_size())?;
    let cache = ConfigCache::new(Arc::new(PgGuildConfigStore::new(pool)));

    match cmd {
        ConfigCommands::Show { guild_id } => {
            let guild = cache.get_or_create(guild_id).await?;
            print_record(&guild.snapshot());
        }

        ConfigCommands::Set {
            guild_id,
            field,
            value,
        } => {
            let parsed = GuildConfigField::parse(&field)?;
            let value = SettingValue::parse_for(parsed, &value)?;
            let guild = cache.get_or_create(guild_id).await?;
            guild.set(&field, value).await?;
            info!(guild_id, field = %parsed, "Guild setting changed");
            print_record(&guild.snapshot());
        }
    }

    Ok(())
}
