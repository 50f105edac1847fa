//! Recognized guild configuration setting names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use warden_error::{InvalidFieldError, InvalidFieldErrorKind};

/// A setting that can be changed through `GuildConfig::set`.
///
/// Names are the `guildconfig` column names.
///
/// # Examples
///
/// ```
/// use warden_core::GuildConfigField;
///
/// let field = GuildConfigField::parse("star_limit").unwrap();
/// assert_eq!(field, GuildConfigField::StarLimit);
/// assert_eq!(field.to_string(), "star_limit");
/// assert!(GuildConfigField::parse("id").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GuildConfigField {
    /// Command prefix
    Prefix,
    /// Moderator role id
    ModRoleId,
    /// Mute role id
    MuteRoleId,
    /// Starboard channel id
    StarChannelId,
    /// Starboard threshold
    StarLimit,
}

impl GuildConfigField {
    /// Columns that exist on the record but are owned by the store.
    pub const READ_ONLY: [&'static str; 2] = ["id", "guild_id"];

    /// Parse a setting name, distinguishing store-owned columns from unknown names.
    #[track_caller]
    pub fn parse(name: &str) -> Result<Self, InvalidFieldError> {
        if Self::READ_ONLY.contains(&name) {
            return Err(InvalidFieldError::new(InvalidFieldErrorKind::ReadOnlyField(
                name.to_string(),
            )));
        }
        Self::from_str(name).map_err(|_| {
            InvalidFieldError::new(InvalidFieldErrorKind::UnknownField(name.to_string()))
        })
    }

    /// Whether the setting accepts [`SettingValue::Clear`](crate::SettingValue::Clear).
    pub fn is_optional(&self) -> bool {
        !matches!(self, Self::Prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_match_columns() {
        let names: Vec<String> = GuildConfigField::iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            ["prefix", "mod_role_id", "mute_role_id", "star_channel_id", "star_limit"]
        );
    }

    #[test]
    fn test_unknown_name() {
        let err = GuildConfigField::parse("nonexistent_field").unwrap_err();
        assert_eq!(
            err.kind,
            InvalidFieldErrorKind::UnknownField("nonexistent_field".to_string())
        );
    }

    #[test]
    fn test_store_owned_names_are_read_only() {
        for name in GuildConfigField::READ_ONLY {
            let err = GuildConfigField::parse(name).unwrap_err();
            assert_eq!(err.kind, InvalidFieldErrorKind::ReadOnlyField(name.to_string()));
        }
    }
}
