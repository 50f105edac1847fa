//! Member presence and nickname tracking.
//!
//! [`Whois`] records when members last spoke and how their display names
//! changed, for the guilds listed in [`WhoisConfig`], and renders the
//! `info`, `seen`, and `nicks` replies.

mod config;
mod member;
mod service;

pub use config::WhoisConfig;
pub use member::{MemberSnapshot, MemberSnapshotBuilder};
pub use service::Whois;
