//! Process-wide guild configuration cache.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};
use warden_error::{StoreError, StoreErrorKind, StoreResult};
use warden_interface::GuildConfigStore;

use crate::GuildConfig;

/// Cache of guild configurations keyed by guild id.
///
/// A single async mutex guards the whole map and is held across the store
/// round-trip, so every `get_or_create` call is serialized with every other
/// one, whichever guild it asks for. Concurrent first requests for a guild
/// therefore produce exactly one fetch-or-create sequence and one object.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use warden_cache::ConfigCache;
/// use warden_database::PgGuildConfigStore;
///
/// let cache = Arc::new(ConfigCache::new(Arc::new(PgGuildConfigStore::new(pool))));
/// let config = cache.get_or_create(guild_id).await?;
/// println!("prefix is {}", config.prefix());
/// ```
pub struct ConfigCache {
    store: Arc<dyn GuildConfigStore>,
    guilds: Mutex<HashMap<i64, Arc<GuildConfig>>>,
}

impl ConfigCache {
    /// Create an empty cache backed by `store`.
    pub fn new(store: Arc<dyn GuildConfigStore>) -> Self {
        debug!("Creating new ConfigCache");
        Self {
            store,
            guilds: Mutex::new(HashMap::new()),
        }
    }

    /// Return the configuration for `guild_id`, loading or creating it if needed.
    ///
    /// On a miss the row is fetched; if the guild has no row a default one is
    /// inserted and then fetched again, so the cached copy carries whatever
    /// defaults the store applied. Any store failure is returned unchanged and
    /// leaves the cache as it was.
    #[instrument(skip(self))]
    pub async fn get_or_create(&self, guild_id: i64) -> StoreResult<Arc<GuildConfig>> {
        let mut guilds = self.guilds.lock().await;

        if let Some(config) = guilds.get(&guild_id) {
            debug!("Cache hit");
            return Ok(Arc::clone(config));
        }

        let record = match self.store.fetch_one(guild_id).await? {
            Some(record) => record,
            None => {
                info!("No config row for guild, inserting default");
                self.store.insert_default(guild_id).await?;
                self.store
                    .fetch_one(guild_id)
                    .await?
                    .ok_or_else(|| StoreError::new(StoreErrorKind::NotFound))?
            }
        };

        let config = Arc::new(GuildConfig::new(record, Arc::clone(&self.store)));
        guilds.insert(guild_id, Arc::clone(&config));

        debug!(id = config.id(), cached = guilds.len(), "Cached guild config");
        Ok(config)
    }

    /// Return the cached configuration without touching the store.
    pub async fn get(&self, guild_id: i64) -> Option<Arc<GuildConfig>> {
        self.guilds.lock().await.get(&guild_id).cloned()
    }

    /// Drop the cached configuration so the next access reloads it.
    ///
    /// Holders of the returned `Arc` keep a working object; it is simply no
    /// longer shared with future callers.
    #[instrument(skip(self))]
    pub async fn evict(&self, guild_id: i64) -> Option<Arc<GuildConfig>> {
        let evicted = self.guilds.lock().await.remove(&guild_id);
        if evicted.is_some() {
            info!("Evicted guild config");
        }
        evicted
    }

    /// Clear all cached configurations.
    pub async fn clear(&self) {
        let mut guilds = self.guilds.lock().await;
        let count = guilds.len();
        guilds.clear();
        info!(cleared = count, "Cleared guild config cache");
    }

    /// Number of cached guilds.
    pub async fn len(&self) -> usize {
        self.guilds.lock().await.len()
    }

    /// Check if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.guilds.lock().await.is_empty()
    }
}
