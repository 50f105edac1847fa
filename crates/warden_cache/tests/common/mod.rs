//! In-memory record store used by the cache tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use warden_core::{GuildConfigRecord, GuildSetting};
use warden_error::{StoreError, StoreErrorKind, StoreResult};
use tokio::sync::Notify;
use warden_interface::GuildConfigStore;

/// One call the cache made against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    FetchOne(i64),
    InsertDefault(i64),
    UpdateField(i32, GuildSetting),
}

/// Record store that keeps rows in a vector and logs every call.
///
/// Each call yields to the scheduler first so concurrent callers really
/// interleave at the store's suspension points.
pub struct MemoryStore {
    default_prefix: String,
    rows: Mutex<Vec<GuildConfigRecord>>,
    calls: Mutex<Vec<StoreCall>>,
    failing_fetches: AtomicUsize,
    failing_updates: AtomicUsize,
    failing_inserts: AtomicUsize,
    fail_fetch_number: Mutex<Option<usize>>,
    held_update: Mutex<Option<Arc<Notify>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_default_prefix("!")
    }

    pub fn with_default_prefix(prefix: &str) -> Self {
        Self {
            default_prefix: prefix.to_string(),
            rows: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            failing_fetches: AtomicUsize::new(0),
            failing_updates: AtomicUsize::new(0),
            failing_inserts: AtomicUsize::new(0),
            fail_fetch_number: Mutex::new(None),
            held_update: Mutex::new(None),
        }
    }

    /// Make the next `n` fetches fail with a connection error.
    pub fn fail_next_fetches(&self, n: usize) {
        self.failing_fetches.store(n, Ordering::SeqCst);
    }

    /// Make the next `n` inserts fail with a query error.
    pub fn fail_next_inserts(&self, n: usize) {
        self.failing_inserts.store(n, Ordering::SeqCst);
    }

    /// Make the `n`th fetch from now (1-based) fail with a timeout.
    pub fn fail_fetch_number(&self, n: usize) {
        *self.fail_fetch_number.lock().unwrap() = Some(self.fetches() + n);
    }

    /// Make the next `n` updates fail with a query error.
    pub fn fail_next_updates(&self, n: usize) {
        self.failing_updates.store(n, Ordering::SeqCst);
    }

    /// Hold the acknowledgement of the next update until the returned
    /// handle is notified. The row is written before the hold starts.
    pub fn hold_next_update(&self) -> Arc<Notify> {
        let release = Arc::new(Notify::new());
        *self.held_update.lock().unwrap() = Some(Arc::clone(&release));
        release
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&StoreCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| matches(c)).count()
    }

    pub fn inserts(&self) -> usize {
        self.count(|c| matches!(c, StoreCall::InsertDefault(_)))
    }

    pub fn fetches(&self) -> usize {
        self.count(|c| matches!(c, StoreCall::FetchOne(_)))
    }

    pub fn updates(&self) -> usize {
        self.count(|c| matches!(c, StoreCall::UpdateField(..)))
    }

    pub fn row(&self, guild_id: i64) -> Option<GuildConfigRecord> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.guild_id == guild_id)
            .cloned()
    }

    fn take_failure(counter: &AtomicUsize) -> bool {
        counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl GuildConfigStore for MemoryStore {
    async fn fetch_one(&self, guild_id: i64) -> StoreResult<Option<GuildConfigRecord>> {
        tokio::task::yield_now().await;
        self.calls.lock().unwrap().push(StoreCall::FetchOne(guild_id));
        if Self::take_failure(&self.failing_fetches) {
            return Err(StoreError::new(StoreErrorKind::Connection(
                "connection refused".to_string(),
            )));
        }
        if *self.fail_fetch_number.lock().unwrap() == Some(self.fetches()) {
            return Err(StoreError::new(StoreErrorKind::Query(
                "canceling statement due to statement timeout".to_string(),
            )));
        }
        Ok(self.row(guild_id))
    }

    async fn insert_default(&self, guild_id: i64) -> StoreResult<()> {
        tokio::task::yield_now().await;
        self.calls.lock().unwrap().push(StoreCall::InsertDefault(guild_id));
        if Self::take_failure(&self.failing_inserts) {
            return Err(StoreError::new(StoreErrorKind::Connection(
                "connection reset by peer".to_string(),
            )));
        }
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.guild_id == guild_id) {
            return Err(StoreError::new(StoreErrorKind::Query(
                "duplicate key value violates unique constraint".to_string(),
            )));
        }
        let id = rows.len() as i32 + 1;
        rows.push(GuildConfigRecord {
            id,
            guild_id,
            prefix: self.default_prefix.clone(),
            mod_role_id: None,
            mute_role_id: None,
            star_channel_id: None,
            star_limit: None,
        });
        Ok(())
    }

    async fn update_field(&self, id: i32, setting: &GuildSetting) -> StoreResult<()> {
        tokio::task::yield_now().await;
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::UpdateField(id, setting.clone()));
        if Self::take_failure(&self.failing_updates) {
            return Err(StoreError::new(StoreErrorKind::Query("timeout".to_string())));
        }
        {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| StoreError::new(StoreErrorKind::NotFound))?;
            row.apply(setting.clone());
        }
        let hold = self.held_update.lock().unwrap().take();
        if let Some(release) = hold {
            release.notified().await;
        }
        Ok(())
    }
}
