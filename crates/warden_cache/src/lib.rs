//! Guild configuration caching.
//!
//! [`ConfigCache`] maps guild ids to shared [`GuildConfig`] objects, loading
//! each one from the record store on first access and creating a default row
//! when the guild has none. [`GuildConfig`] exposes typed getters and a single
//! write-through `set` path.
//!
//! Construct one cache at startup and hand out clones of an `Arc` to it;
//! there is no global instance.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod guild_config;

pub use cache::ConfigCache;
pub use guild_config::GuildConfig;
