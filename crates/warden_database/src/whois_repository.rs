//! WhoisStore implementation for PostgreSQL.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::dsl::max;
use diesel::prelude::*;
use tracing::instrument;
use warden_core::NewNick;
use warden_error::StoreResult;
use warden_interface::WhoisStore;

use crate::connection::{PgPool, run_blocking};
use crate::models::NewNickRow;
use crate::schema::{nicks, seen};

/// Database-backed presence and nickname history store.
#[derive(Clone)]
pub struct PgWhoisStore {
    pool: PgPool,
}

impl PgWhoisStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WhoisStore for PgWhoisStore {
    #[instrument(skip(self))]
    async fn record_seen(&self, guild_id: i64, user_id: i64, at: NaiveDateTime) -> StoreResult<()> {
        run_blocking(&self.pool, move |conn| {
            diesel::insert_into(seen::table)
                .values((
                    seen::guild_id.eq(guild_id),
                    seen::user_id.eq(user_id),
                    seen::seen_at.eq(at),
                ))
                .on_conflict((seen::guild_id, seen::user_id))
                .do_update()
                .set(seen::seen_at.eq(at))
                .execute(conn)?;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn last_seen(&self, guild_id: i64, user_id: i64) -> StoreResult<Option<NaiveDateTime>> {
        run_blocking(&self.pool, move |conn| {
            Ok(seen::table
                .find((guild_id, user_id))
                .select(seen::seen_at)
                .first::<NaiveDateTime>(conn)
                .optional()?)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn last_nick(&self, guild_id: i64, user_id: i64) -> StoreResult<Option<String>> {
        run_blocking(&self.pool, move |conn| {
            Ok(nicks::table
                .filter(nicks::guild_id.eq(guild_id))
                .filter(nicks::user_id.eq(user_id))
                .order(nicks::id.desc())
                .select(nicks::nick)
                .first::<String>(conn)
                .optional()?)
        })
        .await
    }

    #[instrument(skip(self), fields(guild_id = nick.guild_id(), user_id = nick.user_id()))]
    async fn insert_nick(&self, nick: &NewNick) -> StoreResult<()> {
        let row = NewNickRow::from(nick);
        run_blocking(&self.pool, move |conn| {
            diesel::insert_into(nicks::table).values(&row).execute(conn)?;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn distinct_nicks(
        &self,
        guild_id: i64,
        user_id: i64,
        limit: Option<usize>,
    ) -> StoreResult<Vec<String>> {
        run_blocking(&self.pool, move |conn| {
            // newest first by each name's latest row
            Ok(nicks::table
                .filter(nicks::guild_id.eq(guild_id))
                .filter(nicks::user_id.eq(user_id))
                .group_by(nicks::nick)
                .select(nicks::nick)
                .order_by(max(nicks::id).desc())
                .limit(row_limit(limit))
                .load::<String>(conn)?)
        })
        .await
    }
}

/// SQL `LIMIT` for an optional row count; no limit reads every row.
fn row_limit(limit: Option<usize>) -> i64 {
    limit.map_or(i64::MAX, |n| i64::try_from(n).unwrap_or(i64::MAX))
}
