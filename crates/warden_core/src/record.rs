//! Guild configuration record.

use serde::{Deserialize, Serialize};

use crate::GuildSetting;

/// One guild's settings as stored in the `guildconfig` table.
///
/// `id` is assigned by the store and is the key for single-field updates.
/// `guild_id` is the Discord snowflake and the cache key. Fields are
/// public plain data; the cache wraps a record and exposes its own getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildConfigRecord {
    /// Store-assigned row id
    pub id: i32,
    /// Discord guild id
    pub guild_id: i64,
    /// Command prefix
    pub prefix: String,
    /// Moderator role
    pub mod_role_id: Option<i64>,
    /// Role applied to muted members
    pub mute_role_id: Option<i64>,
    /// Starboard channel
    pub star_channel_id: Option<i64>,
    /// Stars required to reach the starboard
    pub star_limit: Option<i32>,
}

impl GuildConfigRecord {
    /// Write one setting into this record.
    ///
    /// `id` and `guild_id` are not settings and are never touched.
    pub fn apply(&mut self, setting: GuildSetting) {
        match setting {
            GuildSetting::Prefix(v) => self.prefix = v,
            GuildSetting::ModRoleId(v) => self.mod_role_id = v,
            GuildSetting::MuteRoleId(v) => self.mute_role_id = v,
            GuildSetting::StarChannelId(v) => self.star_channel_id = v,
            GuildSetting::StarLimit(v) => self.star_limit = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> GuildConfigRecord {
        GuildConfigRecord {
            id: 1,
            guild_id: 100,
            prefix: "!".to_string(),
            mod_role_id: None,
            mute_role_id: None,
            star_channel_id: None,
            star_limit: None,
        }
    }

    #[test]
    fn test_apply_touches_only_named_field() {
        let mut r = record();
        r.apply(GuildSetting::StarLimit(Some(5)));
        assert_eq!(r.star_limit, Some(5));
        assert_eq!(r.prefix, "!");
        assert_eq!(r.id, 1);
        assert_eq!(r.guild_id, 100);
    }

    #[test]
    fn test_record_is_plain_data() {
        let r = GuildConfigRecord {
            star_channel_id: Some(9),
            ..record()
        };
        assert_eq!(r.star_channel_id, Some(9));
        assert_eq!(r.guild_id, 100);
    }

    #[test]
    fn test_apply_clears_optional_field() {
        let mut r = record();
        r.mod_role_id = Some(7);
        r.apply(GuildSetting::ModRoleId(None));
        assert_eq!(r.mod_role_id, None);
    }
}
