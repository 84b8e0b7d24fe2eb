//! First-run schema creation.
//!
//! The schema and seed scripts are embedded at compile time and executed
//! verbatim when the `users` table does not exist yet.

use sqlx::{Connection, PgConnection};

use crate::error::DbError;
use crate::repositories::UserRepo;

pub const SCHEMA_SQL: &str = include_str!("../../../db/sql/schema.sql");
pub const SEED_SQL: &str = include_str!("../../../db/sql/seed.sql");

/// Create the schema and load the seed data unless `users` already exists.
///
/// Both scripts run in one transaction, so a failure leaves no partial
/// schema behind. Returns `true` when the scripts were executed.
pub async fn initialize(conn: &mut PgConnection) -> Result<bool, DbError> {
    if UserRepo::exists_table(conn).await? {
        tracing::debug!("Schema already present, skipping bootstrap");
        return Ok(false);
    }

    let mut tx = conn
        .begin()
        .await
        .map_err(DbError::query("Failed to start schema bootstrap"))?;
    sqlx::raw_sql(SCHEMA_SQL)
        .execute(&mut *tx)
        .await
        .map_err(DbError::query("Failed to create schema"))?;
    sqlx::raw_sql(SEED_SQL)
        .execute(&mut *tx)
        .await
        .map_err(DbError::query("Failed to load seed data"))?;
    tx.commit()
        .await
        .map_err(DbError::query("Failed to commit schema bootstrap"))?;

    tracing::info!("Database schema created");
    Ok(true)
}
