//! PostgreSQL integration for Warden.
//!
//! This crate provides the schema, migrations, and diesel-backed
//! implementations of the `warden_interface` store traits.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use warden_database::{PgGuildConfigStore, create_pool, database_url};
//!
//! let pool = create_pool(&database_url()?, 8)?;
//! let store = Arc::new(PgGuildConfigStore::new(pool));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod guild_config_repository;
mod models;
mod whois_repository;

// Public modules for external access
#[allow(missing_docs)]
pub mod schema;

pub use connection::{PgPool, create_pool, database_url, establish_connection, run_migrations};
pub use guild_config_repository::PgGuildConfigStore;
pub use whois_repository::PgWhoisStore;
