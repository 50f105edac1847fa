//! Whois configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which guilds are tracked and how much history is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct WhoisConfig {
    /// Guilds where messages and nickname changes are recorded
    #[serde(default)]
    tracked_guilds: Vec<i64>,

    /// Most nicknames listed by the `nicks` command
    #[serde(default = "default_max_nicks")]
    max_nicks: usize,

    /// Nicknames shown on an `info` card
    #[serde(default = "default_info_nicks")]
    info_nicks: usize,

    /// Members whose last nickname is remembered in memory; 0 disables it
    #[serde(default = "default_nick_cache_capacity")]
    nick_cache_capacity: usize,
}

fn default_max_nicks() -> usize {
    6
}

fn default_info_nicks() -> usize {
    3
}

fn default_nick_cache_capacity() -> usize {
    10_000
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            tracked_guilds: Vec::new(),
            max_nicks: default_max_nicks(),
            info_nicks: default_info_nicks(),
            nick_cache_capacity: default_nick_cache_capacity(),
        }
    }
}

impl WhoisConfig {
    /// Whether tracking is enabled for `guild_id`.
    pub fn is_tracked(&self, guild_id: i64) -> bool {
        self.tracked_guilds.contains(&guild_id)
    }
}
