//! PostgreSQL access for the gym console: connection provider, row models,
//! repositories, and first-run schema bootstrap.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

pub mod bootstrap;
pub mod error;
pub mod models;
pub mod repositories;

pub use error::DbError;

/// Hands out one fresh connection per operation.
///
/// There is no pool: every service operation connects,
/// runs its statements, and drops the connection (which closes it).
#[derive(Debug, Clone)]
pub struct Database {
    options: PgConnectOptions,
}

impl Database {
    /// Build a provider from a `postgres://` URL.
    pub fn from_url(database_url: &str) -> Result<Self, DbError> {
        let options = PgConnectOptions::from_str(database_url).map_err(DbError::InvalidUrl)?;
        Ok(Self::from_options(options))
    }

    pub fn from_options(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Open a new connection.
    pub async fn connect(&self) -> Result<PgConnection, DbError> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(DbError::Unavailable)
    }

    /// Connect and run a trivial query.
    pub async fn health_check(&self) -> Result<(), DbError> {
        let mut conn = self.connect().await?;
        health_check(&mut conn).await
    }
}

/// Run `SELECT 1` on an open connection.
pub async fn health_check(conn: &mut PgConnection) -> Result<(), DbError> {
    sqlx::query("SELECT 1")
        .execute(conn)
        .await
        .map_err(DbError::query("Health check failed"))?;
    Ok(())
}
