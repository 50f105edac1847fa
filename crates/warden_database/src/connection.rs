//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{info, instrument};
use warden_error::{StoreError, StoreErrorKind, StoreResult};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Connection pool shared by the repositories.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Read `DATABASE_URL` from the environment.
pub fn database_url() -> StoreResult<String> {
    std::env::var("DATABASE_URL").map_err(|_| {
        StoreError::new(StoreErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })
}

/// Establish a single connection to the PostgreSQL database.
///
/// Reads the `DATABASE_URL` environment variable to determine the connection string.
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub fn establish_connection() -> StoreResult<PgConnection> {
    let database_url = database_url()?;
    PgConnection::establish(&database_url).map_err(StoreError::from)
}

/// Build a connection pool and check out one connection to verify it works.
#[instrument(skip(database_url))]
pub fn create_pool(database_url: &str, max_size: u32) -> StoreResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))?;

    // Warm up the pool by getting and immediately releasing a connection
    {
        let _conn = pool.get()?;
    }

    info!(max_size, "Database pool ready");
    Ok(pool)
}

/// Run pending migrations, returning the versions that were applied.
#[instrument(skip(conn))]
pub fn run_migrations(conn: &mut PgConnection) -> StoreResult<Vec<String>> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::new(StoreErrorKind::Migration(e.to_string())))?;
    let applied: Vec<String> = applied.into_iter().map(|v| v.to_string()).collect();
    info!(count = applied.len(), "Migrations applied");
    Ok(applied)
}

/// Run `f` with a pooled connection on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(pool: &PgPool, f: F) -> StoreResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> StoreResult<T> + Send + 'static,
{
    let pool = pool.clone();

    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await
    .map_err(|e| StoreError::new(StoreErrorKind::Task(e.to_string())))?
}
