/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Every failure the data-access layer can report.
///
/// The driver error is kept as the source so it can be logged, but callers
/// only ever match on these variants.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("Invalid database URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("{context}: {source}")]
    Query {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    /// Adapter for `map_err` that attaches a human-readable context.
    ///
    /// ```ignore
    /// sqlx::query("...").execute(conn).await.map_err(DbError::query("Failed to delete user"))?;
    /// ```
    pub fn query(context: impl Into<String>) -> impl FnOnce(sqlx::Error) -> DbError {
        let context = context.into();
        move |source| DbError::Query { context, source }
    }

    /// True when the statement tripped a UNIQUE constraint.
    pub fn is_unique_violation(&self) -> bool {
        self.has_sqlstate(UNIQUE_VIOLATION)
    }

    /// True when the statement tripped a CHECK constraint.
    pub fn is_check_violation(&self) -> bool {
        self.has_sqlstate(CHECK_VIOLATION)
    }

    fn has_sqlstate(&self, code: &str) -> bool {
        match self {
            DbError::Query {
                source: sqlx::Error::Database(db_err),
                ..
            } => db_err.code().as_deref() == Some(code),
            _ => false,
        }
    }
}
