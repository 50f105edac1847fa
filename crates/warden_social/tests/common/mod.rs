//! In-memory stores for the social tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::Mutex;
use warden_core::{GuildConfigRecord, GuildSetting, NewNick};
use warden_error::{StoreError, StoreErrorKind, StoreResult};
use warden_interface::{GuildConfigStore, WhoisStore};

#[derive(Default)]
pub struct MemoryWhoisStore {
    pub seen: Mutex<HashMap<(i64, i64), NaiveDateTime>>,
    pub nicks: Mutex<Vec<NewNick>>,
    pub last_nick_lookups: Mutex<usize>,
}

impl MemoryWhoisStore {
    pub fn stored_nicks(&self, guild_id: i64, user_id: i64) -> Vec<String> {
        self.nicks
            .lock()
            .unwrap()
            .iter()
            .filter(|n| *n.guild_id() == guild_id && *n.user_id() == user_id)
            .map(|n| n.nick().clone())
            .collect()
    }
}

#[async_trait]
impl WhoisStore for MemoryWhoisStore {
    async fn record_seen(&self, guild_id: i64, user_id: i64, at: NaiveDateTime) -> StoreResult<()> {
        self.seen.lock().unwrap().insert((guild_id, user_id), at);
        Ok(())
    }

    async fn last_seen(&self, guild_id: i64, user_id: i64) -> StoreResult<Option<NaiveDateTime>> {
        Ok(self.seen.lock().unwrap().get(&(guild_id, user_id)).copied())
    }

    async fn last_nick(&self, guild_id: i64, user_id: i64) -> StoreResult<Option<String>> {
        *self.last_nick_lookups.lock().unwrap() += 1;
        Ok(self.stored_nicks(guild_id, user_id).pop())
    }

    async fn insert_nick(&self, nick: &NewNick) -> StoreResult<()> {
        self.nicks.lock().unwrap().push(nick.clone());
        Ok(())
    }

    async fn distinct_nicks(
        &self,
        guild_id: i64,
        user_id: i64,
        limit: Option<usize>,
    ) -> StoreResult<Vec<String>> {
        let mut distinct = Vec::new();
        for nick in self.stored_nicks(guild_id, user_id).into_iter().rev() {
            if !distinct.contains(&nick) {
                distinct.push(nick);
            }
        }
        if let Some(limit) = limit {
            distinct.truncate(limit);
        }
        Ok(distinct)
    }
}

#[derive(Default)]
pub struct MemoryConfigStore {
    pub rows: Mutex<Vec<GuildConfigRecord>>,
}

#[async_trait]
impl GuildConfigStore for MemoryConfigStore {
    async fn fetch_one(&self, guild_id: i64) -> StoreResult<Option<GuildConfigRecord>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.guild_id == guild_id)
            .cloned())
    }

    async fn insert_default(&self, guild_id: i64) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(GuildConfigRecord {
            id,
            guild_id,
            prefix: "!".to_string(),
            mod_role_id: None,
            mute_role_id: None,
            star_channel_id: None,
            star_limit: None,
        });
        Ok(())
    }

    async fn update_field(&self, id: i32, setting: &GuildSetting) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::new(StoreErrorKind::NotFound))?;
        row.apply(setting.clone());
        Ok(())
    }
}
