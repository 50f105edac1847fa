//! Guild configuration commands.

use strum::IntoEnumIterator;
use tracing::{info, instrument};
use warden_cache::GuildConfig;
use warden_core::{GuildConfigField, GuildConfigRecord, SettingValue};
use warden_error::WardenResult;

use crate::Card;

fn describe(record: &GuildConfigRecord, field: GuildConfigField) -> String {
    let not_set = || "Not set".to_string();
    match field {
        GuildConfigField::Prefix => format!("`{}`", record.prefix),
        GuildConfigField::ModRoleId => record.mod_role_id.map_or_else(not_set, |id| format!("<@&{}>", id)),
        GuildConfigField::MuteRoleId => record.mute_role_id.map_or_else(not_set, |id| format!("<@&{}>", id)),
        GuildConfigField::StarChannelId => {
            record.star_channel_id.map_or_else(not_set, |id| format!("<#{}>", id))
        }
        GuildConfigField::StarLimit => record.star_limit.map_or_else(not_set, |n| n.to_string()),
    }
}

/// Card listing every setting of a guild.
pub fn render_config(config: &GuildConfig) -> Card {
    let record = config.snapshot();
    GuildConfigField::iter()
        .fold(Card::default(), |card, field| {
            card.field(field.to_string(), describe(&record, field))
        })
        .with_footer(format!("Guild ID: {}", record.guild_id))
}

/// Parse `raw` for `field` and write it through `config`.
///
/// Returns a confirmation card showing the stored value.
#[instrument(skip(config), fields(guild_id = config.guild_id()))]
pub async fn set_config(config: &GuildConfig, field: &str, raw: &str) -> WardenResult<Card> {
    let parsed = GuildConfigField::parse(field)?;
    let value = SettingValue::parse_for(parsed, raw)?;
    config.set(field, value).await?;
    info!(field, "Guild setting changed");

    let shown = describe(&config.snapshot(), parsed);
    Ok(Card::default().with_description(format!("Set `{}` to {}", parsed, shown)))
}
