//! Platform-independent view of a guild member.

use chrono::NaiveDateTime;
use derive_getters::Getters;

/// The member facts the whois cards need.
///
/// Built by the platform layer from its own member type.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct MemberSnapshot {
    user_id: i64,
    /// Account name, e.g. `ace`
    username: String,
    /// Nickname if set, otherwise the account's display name
    display_name: String,
    #[builder(default)]
    avatar_url: Option<String>,
    #[builder(default)]
    bot: bool,
    created_at: NaiveDateTime,
    #[builder(default)]
    joined_at: Option<NaiveDateTime>,
    /// Roles other than @everyone
    #[builder(default)]
    role_ids: Vec<i64>,
    #[builder(default)]
    status: Option<String>,
    #[builder(default)]
    activity: Option<String>,
}

impl MemberSnapshot {
    /// Discord mention markup for the member.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}
