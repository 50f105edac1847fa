//! Conversions between Serenity types and the platform-free models.

use chrono::{DateTime, NaiveDateTime};
use serenity::all::{
    Cache, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, GuildId, Member, Timestamp, UserId,
};

use super::{DiscordError, DiscordErrorKind, DiscordResult};
use crate::{Card, MemberSnapshot, MemberSnapshotBuilder};

/// Convert Discord snowflake ID (u64) to database ID (i64).
///
/// Discord IDs are 64-bit unsigned integers, but PostgreSQL uses signed bigints.
pub(super) fn to_db_id(id: u64) -> i64 {
    id as i64
}

/// Convert a database ID back into a Discord user ID.
#[track_caller]
pub(super) fn to_user_id(id: i64) -> DiscordResult<UserId> {
    u64::try_from(id)
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)
        .ok_or_else(|| DiscordError::new(DiscordErrorKind::InvalidId(id.to_string())))
}

/// Convert a Discord timestamp to a naive UTC datetime.
#[track_caller]
pub(super) fn to_naive(ts: Timestamp) -> DiscordResult<NaiveDateTime> {
    DateTime::from_timestamp(ts.unix_timestamp(), 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| {
            DiscordError::new(DiscordErrorKind::Conversion(format!(
                "Timestamp out of range: {}",
                ts
            )))
        })
}

/// Status and first activity name of a member, from the gateway cache.
pub(super) fn presence_of(
    cache: &Cache,
    guild_id: GuildId,
    user_id: UserId,
) -> Option<(String, Option<String>)> {
    let guild = cache.guild(guild_id)?;
    let presence = guild.presences.get(&user_id)?;
    Some((
        presence.status.name().to_string(),
        presence.activities.first().map(|a| a.name.clone()),
    ))
}

/// Build the platform-free view of a member.
#[track_caller]
pub(super) fn member_snapshot(
    member: &Member,
    presence: Option<(String, Option<String>)>,
) -> DiscordResult<MemberSnapshot> {
    let (status, activity) = match presence {
        Some((status, activity)) => (Some(status), activity),
        None => (None, None),
    };
    let joined_at = member.joined_at.map(to_naive).transpose()?;

    MemberSnapshotBuilder::default()
        .user_id(to_db_id(member.user.id.get()))
        .username(member.user.name.clone())
        .display_name(member.display_name().to_string())
        .avatar_url(Some(member.face()))
        .bot(member.user.bot)
        .created_at(to_naive(member.user.id.created_at())?)
        .joined_at(joined_at)
        .role_ids(
            member
                .roles
                .iter()
                .map(|role| to_db_id(role.get()))
                .collect::<Vec<_>>(),
        )
        .status(status)
        .activity(activity)
        .build()
        .map_err(|e| DiscordError::new(DiscordErrorKind::Conversion(e.to_string())))
}

/// Render a card as a Discord embed.
pub(super) fn card_to_embed(card: &Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new();
    if let Some(description) = card.description() {
        embed = embed.description(description);
    }
    if let Some(author) = card.author() {
        let mut line = CreateEmbedAuthor::new(author.name());
        if let Some(url) = author.icon_url() {
            line = line.icon_url(url);
        }
        embed = embed.author(line);
    }
    for field in card.fields() {
        embed = embed.field(field.name(), field.value(), *field.inline());
    }
    if let Some(footer) = card.footer() {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    embed
}
