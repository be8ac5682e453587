//! Database pool creation and schema bootstrap.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// DDL for the single `users` table. `email` carries the uniqueness
/// constraint that backstops the service-level duplicate check.
const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)";

/// Open a connection pool against the configured SQLite database,
/// creating the database file if it does not exist yet.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Ensure the `users` table exists. Called once during startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    Ok(())
}
