//! Tests for lazy guild config loading.

mod common;

use common::{MemoryStore, StoreCall};
use std::sync::Arc;
use warden_cache::ConfigCache;
use warden_core::GuildSetting;
use warden_error::StoreErrorKind;
use warden_interface::GuildConfigStore;

fn setup() -> (Arc<MemoryStore>, ConfigCache) {
    let store = Arc::new(MemoryStore::new());
    let cache = ConfigCache::new(store.clone());
    (store, cache)
}

#[tokio::test]
async fn test_creates_default_row_when_absent() {
    let (store, cache) = setup();

    let config = cache.get_or_create(42).await.unwrap();

    assert_eq!(config.guild_id(), 42);
    assert_eq!(config.prefix(), "!");
    assert_eq!(config.mod_role_id(), None);
    assert_eq!(config.mute_role_id(), None);
    assert_eq!(config.star_channel_id(), None);
    assert_eq!(config.star_limit(), None);
    assert_eq!(
        store.calls(),
        vec![
            StoreCall::FetchOne(42),
            StoreCall::InsertDefault(42),
            StoreCall::FetchOne(42),
        ]
    );
}

#[tokio::test]
async fn test_default_comes_from_store() {
    let store = Arc::new(MemoryStore::with_default_prefix("."));
    let cache = ConfigCache::new(store.clone());

    let config = cache.get_or_create(42).await.unwrap();

    assert_eq!(config.prefix(), ".");
}

#[tokio::test]
async fn test_existing_row_is_loaded_without_insert() {
    let (store, cache) = setup();
    store.insert_default(7).await.unwrap();
    store
        .update_field(1, &GuildSetting::StarChannelId(Some(555)))
        .await
        .unwrap();
    let before = store.calls().len();

    let config = cache.get_or_create(7).await.unwrap();

    assert_eq!(config.star_channel_id(), Some(555));
    assert_eq!(store.calls()[before..], [StoreCall::FetchOne(7)]);
}

#[tokio::test]
async fn test_second_lookup_is_served_from_cache() {
    let (store, cache) = setup();

    let first = cache.get_or_create(42).await.unwrap();
    let second = cache.get_or_create(42).await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(store.inserts(), 1);
    assert_eq!(store.fetches(), 2);
}

#[tokio::test]
async fn test_guilds_are_cached_independently() {
    let (store, cache) = setup();

    let a = cache.get_or_create(1).await.unwrap();
    let b = cache.get_or_create(2).await.unwrap();

    assert_ne!(a.id(), b.id());
    assert_eq!(store.inserts(), 2);
    assert_eq!(cache.len().await, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_access_populates_once() {
    let (store, cache) = setup();
    let cache = Arc::new(cache);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get_or_create(99).await })
        })
        .collect();
    let configs: Vec<_> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(store.inserts(), 1);
    // one miss, one fetch after the insert
    assert_eq!(store.fetches(), 2);
    let first = &configs[0];
    for config in &configs {
        assert!(Arc::ptr_eq(first, config));
        assert_eq!(config.snapshot(), first.snapshot());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_access_to_different_guilds() {
    let (store, cache) = setup();
    let cache = Arc::new(cache);

    let handles: Vec<_> = (0..8_i64)
        .flat_map(|guild| [guild, guild])
        .map(|guild| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get_or_create(guild).await })
        })
        .collect();
    for joined in futures::future::join_all(handles).await {
        joined.unwrap().unwrap();
    }

    assert_eq!(store.inserts(), 8);
    assert_eq!(cache.len().await, 8);
}

#[tokio::test]
async fn test_failed_fetch_leaves_no_entry() {
    let (store, cache) = setup();
    store.fail_next_fetches(1);

    let err = cache.get_or_create(7).await.unwrap_err();

    assert!(matches!(err.kind, StoreErrorKind::Connection(_)));
    assert!(cache.get(7).await.is_none());
    assert!(cache.is_empty().await);
    assert_eq!(store.inserts(), 0);

    let config = cache.get_or_create(7).await.unwrap();
    assert_eq!(config.guild_id(), 7);
    assert!(cache.get(7).await.is_some());
}

#[tokio::test]
async fn test_failed_insert_leaves_no_entry() {
    let (store, cache) = setup();
    store.fail_next_inserts(1);

    let err = cache.get_or_create(5).await.unwrap_err();

    assert!(matches!(err.kind, StoreErrorKind::Connection(_)));
    assert!(cache.is_empty().await);
    assert!(store.row(5).is_none());

    cache.get_or_create(5).await.unwrap();
    assert_eq!(store.inserts(), 2);
    assert!(store.row(5).is_some());
}

#[tokio::test]
async fn test_failed_refetch_after_insert_leaves_no_entry() {
    let (store, cache) = setup();
    // miss, insert, then the re-fetch times out
    store.fail_fetch_number(2);

    let err = cache.get_or_create(5).await.unwrap_err();

    assert!(matches!(err.kind, StoreErrorKind::Query(_)));
    assert!(cache.is_empty().await);

    // the row now exists, so the retry loads it without inserting again
    let config = cache.get_or_create(5).await.unwrap();
    assert_eq!(config.guild_id(), 5);
    assert_eq!(store.inserts(), 1);
    assert_eq!(store.calls().last(), Some(&StoreCall::FetchOne(5)));
}

#[tokio::test]
async fn test_evict_forces_reload() {
    let (store, cache) = setup();
    let first = cache.get_or_create(3).await.unwrap();

    let evicted = cache.evict(3).await.unwrap();
    assert!(Arc::ptr_eq(&first, &evicted));
    assert!(cache.get(3).await.is_none());

    let reloaded = cache.get_or_create(3).await.unwrap();
    assert!(!Arc::ptr_eq(&first, &reloaded));
    assert_eq!(reloaded.snapshot(), first.snapshot());
    // reload hits the existing row, no second insert
    assert_eq!(store.inserts(), 1);
}

#[tokio::test]
async fn test_clear_empties_cache() {
    let (_store, cache) = setup();
    cache.get_or_create(1).await.unwrap();
    cache.get_or_create(2).await.unwrap();

    cache.clear().await;

    assert!(cache.is_empty().await);
}
