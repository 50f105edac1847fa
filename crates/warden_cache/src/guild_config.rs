//! Per-guild configuration object.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, instrument};
use warden_core::{GuildConfigField, GuildConfigRecord, GuildSetting, SettingValue};
use warden_error::{StoreResult, WardenResult};
use warden_interface::GuildConfigStore;

/// One guild's settings, shared between everyone who asked the cache for it.
///
/// Reads go to the in-memory copy. Writes go to the store first and only
/// touch memory once the store accepted them. Writes to the same guild are
/// serialized, so memory always matches the store's last accepted write.
pub struct GuildConfig {
    id: i32,
    guild_id: i64,
    settings: RwLock<GuildConfigRecord>,
    writes: Mutex<()>,
    store: Arc<dyn GuildConfigStore>,
}

impl GuildConfig {
    pub(crate) fn new(record: GuildConfigRecord, store: Arc<dyn GuildConfigStore>) -> Self {
        Self {
            id: record.id,
            guild_id: record.guild_id,
            settings: RwLock::new(record),
            writes: Mutex::new(()),
            store,
        }
    }

    /// Store row id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Discord guild id.
    pub fn guild_id(&self) -> i64 {
        self.guild_id
    }

    /// Command prefix.
    pub fn prefix(&self) -> String {
        self.settings.read().prefix.clone()
    }

    /// Moderator role.
    pub fn mod_role_id(&self) -> Option<i64> {
        self.settings.read().mod_role_id
    }

    /// Mute role.
    pub fn mute_role_id(&self) -> Option<i64> {
        self.settings.read().mute_role_id
    }

    /// Starboard channel.
    pub fn star_channel_id(&self) -> Option<i64> {
        self.settings.read().star_channel_id
    }

    /// Starboard threshold.
    pub fn star_limit(&self) -> Option<i32> {
        self.settings.read().star_limit
    }

    /// Copy of every field as currently held in memory.
    pub fn snapshot(&self) -> GuildConfigRecord {
        self.settings.read().clone()
    }

    /// Set one setting by name.
    ///
    /// Unknown names and values of the wrong shape are rejected before the
    /// store is contacted. Otherwise this is [`apply`](Self::apply).
    ///
    /// # Errors
    ///
    /// - `InvalidField` if `field` is not a settable name or `value` does not fit it
    /// - `Store` if the update fails; the in-memory value is then unchanged
    #[instrument(skip(self, value), fields(guild_id = self.guild_id))]
    pub async fn set(&self, field: &str, value: impl Into<SettingValue>) -> WardenResult<()> {
        let field = GuildConfigField::parse(field)?;
        let setting = GuildSetting::from_value(field, value.into())?;
        self.apply(setting).await?;
        Ok(())
    }

    /// Write one typed setting through to the store, then to memory.
    #[instrument(skip(self), fields(guild_id = self.guild_id, id = self.id))]
    pub async fn apply(&self, setting: GuildSetting) -> StoreResult<()> {
        // held until memory is updated
        let _write = self.writes.lock().await;
        self.store.update_field(self.id, &setting).await?;
        debug!(field = %setting.field(), "Store accepted update");
        self.settings.write().apply(setting);
        Ok(())
    }
}

impl fmt::Debug for GuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuildConfig")
            .field("settings", &*self.settings.read())
            .finish_non_exhaustive()
    }
}
