//! Prefix command parsing.

use std::str::FromStr;

/// Commands the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BotCommand {
    /// Display information about a member
    Info,
    /// When a member last sent a message
    Seen,
    /// Known nicknames of a member
    Nicks,
    /// Show or change guild configuration
    Config,
}

/// A message split into command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Command name as typed
    pub name: String,
    /// Whitespace-separated arguments
    pub args: Vec<String>,
}

impl Invocation {
    /// Split `content` if it starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_social::{BotCommand, Invocation};
    ///
    /// let inv = Invocation::parse("!", "!seen <@42>").unwrap();
    /// assert_eq!(inv.command(), Some(BotCommand::Seen));
    /// assert_eq!(inv.args, vec!["<@42>".to_string()]);
    /// assert!(Invocation::parse("!", "hello").is_none());
    /// ```
    pub fn parse(prefix: &str, content: &str) -> Option<Self> {
        let rest = content.strip_prefix(prefix)?;
        // "! info" is not a command
        if rest.starts_with(char::is_whitespace) {
            return None;
        }
        let mut words = rest.split_whitespace();
        let name = words.next()?;
        Some(Self {
            name: name.to_string(),
            args: words.map(str::to_string).collect(),
        })
    }

    /// The recognized command, if any.
    pub fn command(&self) -> Option<BotCommand> {
        BotCommand::from_str(&self.name).ok()
    }
}

/// Extract a user id from a mention (`<@1>`, `<@!1>`) or a bare id.
pub fn parse_user_id(arg: &str) -> Option<i64> {
    let digits = arg
        .strip_prefix("<@")
        .and_then(|s| s.strip_suffix('>'))
        .map(|s| s.strip_prefix('!').unwrap_or(s))
        .unwrap_or(arg);
    digits.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Escape Discord markdown control characters.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '~' | '`' | '|' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Whether a member may change the guild's configuration.
///
/// The guild owner always may; otherwise the member needs the configured
/// moderator role.
pub fn can_configure(
    author_id: i64,
    owner_id: i64,
    author_roles: &[i64],
    mod_role_id: Option<i64>,
) -> bool {
    author_id == owner_id || mod_role_id.is_some_and(|role| author_roles.contains(&role))
}
