//! Member tracking and chat commands for Warden.
//!
//! The platform-free parts live at the top level:
//! - `whois` - last-seen tracking, nickname history, and member info cards
//! - `settings` - showing and changing a guild's configuration from chat
//! - `command` - prefix command parsing and argument helpers
//! - `Card` - a rendered reply, independent of any chat platform
//!
//! The `discord` module (requires the `discord` feature) wires these into a
//! Serenity event handler.

#![warn(missing_docs)]

mod card;
mod command;
mod settings;
mod time;
mod whois;

#[cfg(feature = "discord")]
mod discord;

pub use card::{Card, CardAuthor, CardField};
pub use command::{BotCommand, Invocation, can_configure, escape_markdown, parse_user_id};
pub use settings::{render_config, set_config};
pub use time::{pretty_datetime, pretty_timedelta};
pub use whois::{MemberSnapshot, MemberSnapshotBuilder, Whois, WhoisConfig};

#[cfg(feature = "discord")]
pub use discord::{DiscordError, DiscordErrorKind, DiscordResult, WardenBot, WardenHandler};
