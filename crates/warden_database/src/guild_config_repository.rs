//! GuildConfigStore implementation for PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::{debug, instrument};
use warden_core::{GuildConfigRecord, GuildSetting};
use warden_error::{StoreError, StoreErrorKind, StoreResult};
use warden_interface::GuildConfigStore;

use crate::connection::{PgPool, run_blocking};
use crate::models::GuildConfigRow;
use crate::schema::guildconfig;

/// Database-backed guild configuration store.
#[derive(Clone)]
pub struct PgGuildConfigStore {
    pool: PgPool,
}

impl PgGuildConfigStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildConfigStore for PgGuildConfigStore {
    #[instrument(skip(self))]
    async fn fetch_one(&self, guild_id: i64) -> StoreResult<Option<GuildConfigRecord>> {
        run_blocking(&self.pool, move |conn| {
            let row = guildconfig::table
                .filter(guildconfig::guild_id.eq(guild_id))
                .select(GuildConfigRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(GuildConfigRecord::from))
        })
        .await
    }

    #[instrument(skip(self))]
    async fn insert_default(&self, guild_id: i64) -> StoreResult<()> {
        run_blocking(&self.pool, move |conn| {
            let inserted = diesel::insert_into(guildconfig::table)
                .values(guildconfig::guild_id.eq(guild_id))
                .on_conflict(guildconfig::guild_id)
                .do_nothing()
                .execute(conn)?;
            debug!(inserted, "Inserted default guild config");
            Ok(())
        })
        .await
    }

    #[instrument(skip(self), fields(field = %setting.field()))]
    async fn update_field(&self, id: i32, setting: &GuildSetting) -> StoreResult<()> {
        let setting = setting.clone();
        run_blocking(&self.pool, move |conn| {
            let target = guildconfig::table.find(id);
            let updated = match setting {
                GuildSetting::Prefix(v) => diesel::update(target)
                    .set(guildconfig::prefix.eq(v))
                    .execute(conn),
                GuildSetting::ModRoleId(v) => diesel::update(target)
                    .set(guildconfig::mod_role_id.eq(v))
                    .execute(conn),
                GuildSetting::MuteRoleId(v) => diesel::update(target)
                    .set(guildconfig::mute_role_id.eq(v))
                    .execute(conn),
                GuildSetting::StarChannelId(v) => diesel::update(target)
                    .set(guildconfig::star_channel_id.eq(v))
                    .execute(conn),
                GuildSetting::StarLimit(v) => diesel::update(target)
                    .set(guildconfig::star_limit.eq(v))
                    .execute(conn),
            }?;

            if updated == 0 {
                return Err(StoreError::new(StoreErrorKind::NotFound));
            }
            Ok(())
        })
        .await
    }
}
