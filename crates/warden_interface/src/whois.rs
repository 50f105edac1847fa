//! Member presence and nickname history store.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use warden_core::NewNick;
use warden_error::StoreResult;

/// Persistence for last-seen timestamps and nickname history.
#[async_trait]
pub trait WhoisStore: Send + Sync {
    /// Record that a member was active at `at`, replacing any earlier value.
    async fn record_seen(&self, guild_id: i64, user_id: i64, at: NaiveDateTime) -> StoreResult<()>;

    /// When the member was last active.
    async fn last_seen(&self, guild_id: i64, user_id: i64) -> StoreResult<Option<NaiveDateTime>>;

    /// The most recently stored nickname.
    async fn last_nick(&self, guild_id: i64, user_id: i64) -> StoreResult<Option<String>>;

    /// Append a nickname to the member's history.
    async fn insert_nick(&self, nick: &NewNick) -> StoreResult<()>;

    /// Distinct stored nicknames, most recently stored first.
    async fn distinct_nicks(
        &self,
        guild_id: i64,
        user_id: i64,
        limit: Option<usize>,
    ) -> StoreResult<Vec<String>>;
}
