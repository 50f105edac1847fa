//! Typed setting updates.

use serde::{Deserialize, Serialize};
use warden_error::{InvalidFieldError, InvalidFieldErrorKind};

use crate::GuildConfigField;

/// Longest prefix the `guildconfig.prefix` column holds.
pub const PREFIX_MAX_LEN: usize = 8;

/// Untyped value handed to `GuildConfig::set`.
///
/// # Examples
///
/// ```
/// use warden_core::{GuildConfigField, SettingValue};
///
/// let v = SettingValue::parse_for(GuildConfigField::ModRoleId, "<@&1234>").unwrap();
/// assert_eq!(v, SettingValue::Number(1234));
///
/// let v = SettingValue::parse_for(GuildConfigField::StarLimit, "none").unwrap();
/// assert_eq!(v, SettingValue::Clear);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum SettingValue {
    /// Free text
    #[display("{}", _0)]
    Text(String),
    /// Numeric id or count
    #[display("{}", _0)]
    Number(i64),
    /// Unset an optional setting
    #[display("none")]
    Clear,
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl<T> From<Option<T>> for SettingValue
where
    T: Into<SettingValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Clear)
    }
}

impl SettingValue {
    /// Parse user-typed text for a specific field.
    ///
    /// `none`/`clear` unset optional settings; role and channel mentions are
    /// accepted wherever an id is expected.
    #[track_caller]
    pub fn parse_for(field: GuildConfigField, raw: &str) -> Result<Self, InvalidFieldError> {
        let raw = raw.trim();
        if field == GuildConfigField::Prefix {
            return Ok(Self::Text(raw.to_string()));
        }
        if raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("clear") {
            return Ok(Self::Clear);
        }
        let digits = raw
            .strip_prefix("<@&")
            .or_else(|| raw.strip_prefix("<#"))
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(raw);
        digits
            .parse::<i64>()
            .map(Self::Number)
            .map_err(|_| invalid(field, format!("'{}' is not a number", raw)))
    }
}

/// A single-field update with the value already in the column's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuildSetting {
    /// New command prefix
    Prefix(String),
    /// New moderator role
    ModRoleId(Option<i64>),
    /// New mute role
    MuteRoleId(Option<i64>),
    /// New starboard channel
    StarChannelId(Option<i64>),
    /// New starboard threshold
    StarLimit(Option<i32>),
}

impl GuildSetting {
    /// The field this update writes.
    pub fn field(&self) -> GuildConfigField {
        match self {
            Self::Prefix(_) => GuildConfigField::Prefix,
            Self::ModRoleId(_) => GuildConfigField::ModRoleId,
            Self::MuteRoleId(_) => GuildConfigField::MuteRoleId,
            Self::StarChannelId(_) => GuildConfigField::StarChannelId,
            Self::StarLimit(_) => GuildConfigField::StarLimit,
        }
    }

    /// Convert an untyped value into an update for `field`.
    #[track_caller]
    pub fn from_value(
        field: GuildConfigField,
        value: SettingValue,
    ) -> Result<Self, InvalidFieldError> {
        if value == SettingValue::Clear && !field.is_optional() {
            return Err(invalid(field, format!("{} cannot be cleared", field)));
        }
        match field {
            // Clear was rejected above; text and numbers display as typed
            GuildConfigField::Prefix => prefix(value.to_string()).map(Self::Prefix),
            GuildConfigField::ModRoleId => snowflake(field, value).map(Self::ModRoleId),
            GuildConfigField::MuteRoleId => snowflake(field, value).map(Self::MuteRoleId),
            GuildConfigField::StarChannelId => snowflake(field, value).map(Self::StarChannelId),
            GuildConfigField::StarLimit => match value {
                SettingValue::Clear => Ok(Self::StarLimit(None)),
                SettingValue::Number(n) => i32::try_from(n)
                    .ok()
                    .filter(|n| *n > 0)
                    .map(|n| Self::StarLimit(Some(n)))
                    .ok_or_else(|| invalid(field, "must be a positive number")),
                SettingValue::Text(s) => Err(invalid(field, format!("'{}' is not a number", s))),
            },
        }
    }
}

#[track_caller]
fn invalid(field: GuildConfigField, reason: impl Into<String>) -> InvalidFieldError {
    InvalidFieldError::new(InvalidFieldErrorKind::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    })
}

#[track_caller]
fn prefix(s: String) -> Result<String, InvalidFieldError> {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return Err(invalid(GuildConfigField::Prefix, "prefix must be non-empty without spaces"));
    }
    if s.chars().count() > PREFIX_MAX_LEN {
        return Err(invalid(
            GuildConfigField::Prefix,
            format!("prefix is longer than {} characters", PREFIX_MAX_LEN),
        ));
    }
    Ok(s)
}

#[track_caller]
fn snowflake(field: GuildConfigField, value: SettingValue) -> Result<Option<i64>, InvalidFieldError> {
    match value {
        SettingValue::Clear => Ok(None),
        SettingValue::Number(n) if n > 0 => Ok(Some(n)),
        SettingValue::Number(n) => Err(invalid(field, format!("{} is not a valid id", n))),
        SettingValue::Text(s) => Err(invalid(field, format!("'{}' is not an id", s))),
    }
}
