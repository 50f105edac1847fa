//! Warden - a Discord guild utility bot.
//!
//! Warden keeps a per-guild configuration (command prefix, moderator and
//! mute roles, starboard settings) in PostgreSQL behind an in-memory cache,
//! records when members were last seen, and keeps a history of their
//! nicknames.
//!
//! # Cargo Features
//!
//! - `discord` (default) - Discord bot integration
//!
//! # Architecture
//!
//! - `warden_error` - Error types
//! - `warden_core` - Core data types (config record, settings, nick records)
//! - `warden_interface` - Store trait definitions
//! - `warden_database` - PostgreSQL integration
//! - `warden_cache` - Guild configuration cache
//! - `warden_social` - Member tracking, chat commands, Discord glue
//!
//! This crate (`warden`) holds the application configuration and re-exports
//! the pieces the binary wires together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{DatabaseConfig, WardenConfig, discord_token};

pub use warden_cache::{ConfigCache, GuildConfig};
pub use warden_core::{GuildConfigField, GuildConfigRecord, GuildSetting, SettingValue};
pub use warden_error::{ConfigError, StoreError, WardenError, WardenErrorKind, WardenResult};
pub use warden_social::{Whois, WhoisConfig};

#[cfg(feature = "discord")]
pub use warden_social::WardenBot;
