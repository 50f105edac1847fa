//! Error types for the Warden guild bot.
//!
//! This crate provides the foundation error types used throughout the Warden workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use warden_error::{StoreError, StoreErrorKind, WardenResult};
//!
//! fn load_prefix() -> WardenResult<String> {
//!     Err(StoreError::new(StoreErrorKind::Connection("refused".to_string())))?
//! }
//!
//! match load_prefix() {
//!     Ok(prefix) => println!("Got: {}", prefix),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod error;
mod field;
mod store;

pub use command::{CommandError, CommandErrorKind};
pub use config::ConfigError;
pub use error::{WardenError, WardenErrorKind, WardenResult};
pub use field::{InvalidFieldError, InvalidFieldErrorKind};
pub use store::{StoreError, StoreErrorKind, StoreResult};
