//! Repository error type and helpers shared by every store

use cm_core::CoreError;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness constraint was hit; carries the client-facing field and message
    #[error("Conflict on {field}: {message}")]
    Conflict { field: &'static str, message: String },
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Map a unique-violation from the database into `Conflict`, leaving
    /// every other error as `Database`
    pub fn on_unique_violation(
        err: sqlx::Error,
        field: &'static str,
        message: &str,
    ) -> RepositoryError {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return RepositoryError::Conflict {
                    field,
                    message: message.to_string(),
                };
            }
        }
        RepositoryError::Database(err)
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(entity) => CoreError::NotFound { entity },
            RepositoryError::Conflict { field, message } => CoreError::Conflict { field, message },
            RepositoryError::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                CoreError::Database(e.to_string())
            }
        }
    }
}

/// Build an ILIKE pattern matching `needle` anywhere, with LIKE
/// metacharacters escaped
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
