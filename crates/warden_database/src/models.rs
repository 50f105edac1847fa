//! Diesel row types.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use warden_core::{GuildConfigRecord, NewNick};

use crate::schema::{guildconfig, nicks};

/// Database row for the guildconfig table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = guildconfig)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GuildConfigRow {
    pub id: i32,
    pub guild_id: i64,
    pub prefix: String,
    pub mod_role_id: Option<i64>,
    pub mute_role_id: Option<i64>,
    pub star_channel_id: Option<i64>,
    pub star_limit: Option<i32>,
}

impl From<GuildConfigRow> for GuildConfigRecord {
    fn from(row: GuildConfigRow) -> Self {
        Self {
            id: row.id,
            guild_id: row.guild_id,
            prefix: row.prefix,
            mod_role_id: row.mod_role_id,
            mute_role_id: row.mute_role_id,
            star_channel_id: row.star_channel_id,
            star_limit: row.star_limit,
        }
    }
}

/// Insertable struct for the nicks table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = nicks)]
pub struct NewNickRow {
    pub guild_id: i64,
    pub user_id: i64,
    pub nick: String,
    pub stored_at: NaiveDateTime,
}

impl From<&NewNick> for NewNickRow {
    fn from(nick: &NewNick) -> Self {
        Self {
            guild_id: *nick.guild_id(),
            user_id: *nick.user_id(),
            nick: nick.nick().clone(),
            stored_at: *nick.stored_at(),
        }
    }
}
