//! Whois tracking and replies.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use tracing::{debug, instrument};
use warden_core::NewNick;
use warden_error::{CommandError, CommandErrorKind, StoreResult, WardenResult};
use warden_interface::WhoisStore;

use super::{MemberSnapshot, WhoisConfig};
use crate::{Card, CardAuthor, escape_markdown, pretty_datetime, pretty_timedelta};

/// Presence and nickname tracker.
///
/// Keeps the last stored nickname per member in memory so repeated member
/// updates that do not change the display name never reach the store. The
/// memory is bounded by `nick_cache_capacity` and starts over when full.
pub struct Whois {
    store: Arc<dyn WhoisStore>,
    config: WhoisConfig,
    nick_cache: Mutex<HashMap<(i64, i64), String>>,
}

impl Whois {
    /// Create a tracker backed by `store`.
    pub fn new(store: Arc<dyn WhoisStore>, config: WhoisConfig) -> Self {
        debug!(tracked = config.tracked_guilds().len(), "Creating Whois tracker");
        Self {
            store,
            config,
            nick_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Tracking configuration.
    pub fn config(&self) -> &WhoisConfig {
        &self.config
    }

    /// Record that a member sent a message.
    ///
    /// Returns `false` when the guild is not tracked or the author is a bot.
    #[instrument(skip(self))]
    pub async fn record_message(
        &self,
        guild_id: i64,
        user_id: i64,
        is_bot: bool,
        at: NaiveDateTime,
    ) -> StoreResult<bool> {
        if !self.config.is_tracked(guild_id) || is_bot {
            return Ok(false);
        }
        self.store.record_seen(guild_id, user_id, at).await?;
        Ok(true)
    }

    /// Record a member's display name change.
    ///
    /// Each of `before` and `after` is stored, in that order, unless it
    /// equals the most recently stored nickname. Returns how many names were
    /// stored.
    #[instrument(skip(self))]
    pub async fn record_member_update(
        &self,
        guild_id: i64,
        user_id: i64,
        is_bot: bool,
        before: Option<&str>,
        after: &str,
        at: NaiveDateTime,
    ) -> StoreResult<usize> {
        if !self.config.is_tracked(guild_id) || is_bot {
            return Ok(0);
        }

        let key = (guild_id, user_id);
        if self.nick_cache.lock().get(&key).map(String::as_str) == Some(after) {
            return Ok(0);
        }

        let mut last = self.store.last_nick(guild_id, user_id).await?;
        let mut stored = 0;

        for nick in before.into_iter().chain(std::iter::once(after)) {
            if last.as_deref() == Some(nick) {
                continue;
            }
            self.store
                .insert_nick(&NewNick::new(guild_id, user_id, nick, at))
                .await?;
            last = Some(nick.to_string());
            stored += 1;
        }

        if let Some(last) = last {
            self.remember_nick(key, last);
        }
        debug!(stored, "Processed member update");
        Ok(stored)
    }

    fn remember_nick(&self, key: (i64, i64), nick: String) {
        let capacity = *self.config.nick_cache_capacity();
        if capacity == 0 {
            return;
        }
        let mut cache = self.nick_cache.lock();
        if cache.len() >= capacity && !cache.contains_key(&key) {
            debug!(capacity, "Nick cache full, clearing");
            cache.clear();
        }
        cache.insert(key, nick);
    }

    /// Build the `info` card for a member.
    ///
    /// Tracked guilds also get the last-seen time and recent nicknames.
    #[instrument(skip(self, member), fields(user_id = member.user_id()))]
    pub async fn info_card(
        &self,
        guild_id: i64,
        member: &MemberSnapshot,
        now: NaiveDateTime,
    ) -> StoreResult<Card> {
        let mut description = String::new();
        if *member.bot() {
            description.push_str("This account is a bot.\n\n");
        }
        description.push_str(&member.mention());

        let mut card = Card::default()
            .with_description(description)
            .with_author(CardAuthor::new(
                member.username().clone(),
                member.avatar_url().clone(),
            ));

        if let Some(status) = member.status() {
            card = card.field("Status", status.clone());
        }
        if let Some(activity) = member.activity() {
            card = card.field("Activity", activity.clone());
        }

        let created = member.created_at();
        card = card.field(
            "Account age",
            format!(
                "{}\nCreated {}",
                pretty_timedelta(now - *created),
                created.format("%-d/%-m/%Y")
            ),
        );
        if let Some(joined) = member.joined_at() {
            card = card.field(
                "Member for",
                format!(
                    "{}\nJoined {}",
                    pretty_timedelta(now - *joined),
                    joined.format("%-d/%-m/%Y")
                ),
            );
        }

        if self.config.is_tracked(guild_id) {
            let user_id = *member.user_id();
            let seen = self.store.last_seen(guild_id, user_id).await?;
            card = card.field(
                "Last seen",
                seen.map_or_else(
                    || "Not seen yet.".to_string(),
                    |at| format!("{} ago", pretty_timedelta(now - at)),
                ),
            );

            let nicks = self
                .store
                .distinct_nicks(guild_id, user_id, Some(*self.config.info_nicks()))
                .await?;
            card = card.field(
                "Last known nicknames",
                if nicks.is_empty() {
                    "None yet.".to_string()
                } else {
                    nicks.join("\n")
                },
            );
        }

        if !member.role_ids().is_empty() {
            let roles: Vec<String> = member.role_ids().iter().map(|id| format!("<@&{}>", id)).collect();
            card = card.field("Roles", roles.join(" "));
        }

        Ok(card.with_footer(format!("ID: {}", member.user_id())))
    }

    /// Build the `seen` card for a member.
    ///
    /// # Errors
    ///
    /// - `NotTracked` outside tracked guilds
    /// - `BotTarget` for bot accounts
    #[instrument(skip(self, member), fields(user_id = member.user_id()))]
    pub async fn seen_card(
        &self,
        guild_id: i64,
        member: &MemberSnapshot,
        now: NaiveDateTime,
    ) -> WardenResult<Card> {
        self.check_target(guild_id, member)?;

        let seen = self.store.last_seen(guild_id, *member.user_id()).await?;
        let description = match seen {
            None => "Member has not been seen by the bot yet.".to_string(),
            Some(at) => format!(
                "Seen {} ago at {}",
                pretty_timedelta(now - at),
                pretty_datetime(at)
            ),
        };

        Ok(Card::default()
            .with_author(CardAuthor::new(
                member.display_name().clone(),
                member.avatar_url().clone(),
            ))
            .with_description(description))
    }

    /// Build the `nicks` card listing a member's known nicknames.
    ///
    /// # Errors
    ///
    /// - `NotTracked` outside tracked guilds
    /// - `BotTarget` for bot accounts
    /// - `NoNicks` when nothing has been stored
    #[instrument(skip(self, member), fields(user_id = member.user_id()))]
    pub async fn nicks_card(&self, guild_id: i64, member: &MemberSnapshot) -> WardenResult<Card> {
        self.check_target(guild_id, member)?;

        let nicks = self
            .store
            .distinct_nicks(guild_id, *member.user_id(), Some(*self.config.max_nicks()))
            .await?;
        if nicks.is_empty() {
            return Err(CommandError::new(CommandErrorKind::NoNicks).into());
        }

        let escaped: Vec<String> = nicks.iter().map(|n| escape_markdown(n)).collect();
        Ok(Card::default().with_description(escaped.join("\n")))
    }

    fn check_target(&self, guild_id: i64, member: &MemberSnapshot) -> Result<(), CommandError> {
        if !self.config.is_tracked(guild_id) {
            return Err(CommandError::new(CommandErrorKind::NotTracked));
        }
        if *member.bot() {
            return Err(CommandError::new(CommandErrorKind::BotTarget));
        }
        Ok(())
    }
}
