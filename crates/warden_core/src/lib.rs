//! Core data types for the Warden guild bot.
//!
//! This crate provides the plain data types shared by the record store
//! implementations, the configuration cache, and the chat features.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod field;
mod record;
mod setting;
mod whois;

pub use field::GuildConfigField;
pub use record::GuildConfigRecord;
pub use setting::{GuildSetting, SettingValue};
pub use whois::NewNick;
