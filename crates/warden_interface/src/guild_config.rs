//! Guild configuration record store.

use async_trait::async_trait;
use warden_core::{GuildConfigRecord, GuildSetting};
use warden_error::StoreResult;

/// Keyed store holding one configuration row per guild.
///
/// Every method is a single round-trip and may fail with a `StoreError`.
/// Implementations must not retry.
#[async_trait]
pub trait GuildConfigStore: Send + Sync {
    /// Fetch the row for `guild_id`, if one exists.
    async fn fetch_one(&self, guild_id: i64) -> StoreResult<Option<GuildConfigRecord>>;

    /// Insert a row for `guild_id` with every column at its store default.
    async fn insert_default(&self, guild_id: i64) -> StoreResult<()>;

    /// Update exactly one column of the row with internal id `id`.
    async fn update_field(&self, id: i32, setting: &GuildSetting) -> StoreResult<()>;
}
