//! Error types for the jobboard model layer.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Error types for clause building and model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Input rejected before any SQL was built (empty patch, inconsistent
    /// filter bounds). Maps to a 400 at the HTTP layer above this crate.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Row not found. Maps to a 404 at the HTTP layer.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record with the same identity already exists.
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Foreign key constraint violation (e.g. a job referencing a missing
    /// company handle).
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Query execution error from the driver.
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Row decode/mapping error.
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Pool error.
    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),
}

impl ModelError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a duplicate-record error.
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate(message.into())
    }

    /// Create a decode error for a specific column.
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Check if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Parse a tokio_postgres error into a more specific ModelError.
    ///
    /// SQLSTATE 23505 (unique violation) becomes [`ModelError::Duplicate`]
    /// and 23503 becomes [`ModelError::ForeignKeyViolation`], so callers can
    /// report constraint failures without inspecting driver internals.
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            let message = db_err.message();

            match db_err.code().code() {
                "23505" => return Self::Duplicate(format!("{}: {}", constraint, message)),
                "23503" => {
                    return Self::ForeignKeyViolation(format!("{}: {}", constraint, message));
                }
                _ => {}
            }
        }
        Self::Query(err)
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for ModelError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
