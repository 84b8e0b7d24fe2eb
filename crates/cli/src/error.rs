use gym_core::error::CoreError;
use gym_db::DbError;

/// Error type shared by the service layer and the menus.
///
/// Services return it unchanged; only the menus turn it into a message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gym_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A data-access failure, propagated as-is.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Console input/output failed or reached end of input.
    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for service and menu return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True when the console input has been exhausted.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}
