//! Discord integration for Warden.
//!
//! Connects the platform-free features to Serenity:
//! - **handler**: event handler recording presence and nicknames and
//!   answering prefix commands
//! - **client**: Serenity client setup and lifecycle management
//! - **conversions**: Serenity types to and from `MemberSnapshot` and `Card`
//! - **error**: Discord-specific error types
//!
//! Available with the `discord` feature.
//!
//! ```rust,ignore
//! use warden_social::WardenBot;
//!
//! let mut bot = WardenBot::new(token, configs, whois).await?;
//! bot.start().await?;
//! ```

mod client;
mod conversions;
mod error;
mod handler;

pub use client::WardenBot;
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::WardenHandler;
