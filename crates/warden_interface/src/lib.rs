//! Trait definitions for the Warden guild bot.
//!
//! The configuration cache and the chat features talk to persistence only
//! through the traits in this crate; `warden_database` provides the
//! PostgreSQL implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod guild_config;
mod whois;

pub use guild_config::GuildConfigStore;
pub use whois::WhoisStore;
