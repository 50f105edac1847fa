//! Round trips against a live PostgreSQL database.
//!
//! Run with `DATABASE_URL` pointing at a scratch database:
//! `cargo test -p warden_database -- --ignored`

use chrono::Utc;
use warden_core::{GuildSetting, NewNick};
use warden_database::{PgGuildConfigStore, PgWhoisStore, create_pool, database_url, run_migrations};
use warden_interface::{GuildConfigStore, WhoisStore};

fn pool() -> warden_database::PgPool {
    dotenvy::dotenv().ok();
    let pool = create_pool(&database_url().expect("DATABASE_URL"), 2).expect("pool");
    run_migrations(&mut pool.get().expect("conn")).expect("migrations");
    pool
}

fn unique_id() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL
async fn test_insert_default_then_update() {
    let store = PgGuildConfigStore::new(pool());
    let guild_id = unique_id();

    assert!(store.fetch_one(guild_id).await.unwrap().is_none());
    store.insert_default(guild_id).await.unwrap();
    // second insert for the same guild is a no-op
    store.insert_default(guild_id).await.unwrap();

    let record = store.fetch_one(guild_id).await.unwrap().unwrap();
    assert_eq!(record.prefix, "!");
    assert_eq!(record.star_limit, None);

    store
        .update_field(record.id, &GuildSetting::StarLimit(Some(5)))
        .await
        .unwrap();
    let record = store.fetch_one(guild_id).await.unwrap().unwrap();
    assert_eq!(record.star_limit, Some(5));
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL
async fn test_nick_history() {
    let store = PgWhoisStore::new(pool());
    let guild_id = unique_id();
    let now = Utc::now().naive_utc();

    for nick in ["alpha", "beta", "alpha"] {
        store
            .insert_nick(&NewNick::new(guild_id, 1, nick, now))
            .await
            .unwrap();
    }

    assert_eq!(store.last_nick(guild_id, 1).await.unwrap().as_deref(), Some("alpha"));
    assert_eq!(
        store.distinct_nicks(guild_id, 1, None).await.unwrap(),
        vec!["alpha".to_string(), "beta".to_string()]
    );
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL
async fn test_distinct_nicks_limited_in_query() {
    let store = PgWhoisStore::new(pool());
    let guild_id = unique_id();
    let now = Utc::now().naive_utc();

    for nick in ["a", "b", "c", "b", "d", "c", "c"] {
        store
            .insert_nick(&NewNick::new(guild_id, 1, nick, now))
            .await
            .unwrap();
    }

    assert_eq!(
        store.distinct_nicks(guild_id, 1, Some(3)).await.unwrap(),
        vec!["c".to_string(), "d".to_string(), "b".to_string()]
    );
    assert_eq!(store.distinct_nicks(guild_id, 1, None).await.unwrap().len(), 4);
    assert!(store.distinct_nicks(guild_id, 2, Some(3)).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL
async fn test_record_seen_upserts() {
    let store = PgWhoisStore::new(pool());
    let guild_id = unique_id();
    let first = Utc::now().naive_utc() - chrono::Duration::hours(1);
    let second = Utc::now().naive_utc();

    store.record_seen(guild_id, 1, first).await.unwrap();
    store.record_seen(guild_id, 1, second).await.unwrap();

    let seen = store.last_seen(guild_id, 1).await.unwrap().unwrap();
    assert_eq!(seen.and_utc().timestamp(), second.and_utc().timestamp());
}
