//! Member history records.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A nickname observation to append to a member's history.
///
/// # Examples
///
/// ```
/// use warden_core::NewNick;
///
/// let nick = NewNick::new(1, 2, "ace", chrono::Utc::now().naive_utc());
/// assert_eq!(nick.nick(), "ace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct NewNick {
    /// Guild the member belongs to
    guild_id: i64,
    /// Member's user id
    user_id: i64,
    /// Display name at the time
    nick: String,
    /// When the name was observed
    stored_at: NaiveDateTime,
}

impl NewNick {
    /// Create a nickname observation.
    pub fn new(guild_id: i64, user_id: i64, nick: impl Into<String>, stored_at: NaiveDateTime) -> Self {
        Self {
            guild_id,
            user_id,
            nick: nick.into(),
            stored_at,
        }
    }
}
