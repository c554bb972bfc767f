//! Row mapping traits and utilities.

use crate::error::{ModelError, ModelResult};
use tokio_postgres::Row;

/// Convert a database row into a typed value.
///
/// Implemented by hand for each entity; column access goes through
/// [`RowExt::try_get_column`] so a missing or mistyped column surfaces as a
/// [`ModelError::Decode`] naming the column instead of a panic.
pub trait FromRow: Sized {
    /// Convert a database row into Self.
    fn from_row(row: &Row) -> ModelResult<Self>;
}

/// Extension methods on `tokio_postgres::Row`.
pub trait RowExt {
    /// Try to get a column value, returning ModelError::Decode on failure.
    fn try_get_column<T>(&self, column: &str) -> ModelResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>;
}

impl RowExt for Row {
    fn try_get_column<T>(&self, column: &str) -> ModelResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>,
    {
        self.try_get(column)
            .map_err(|e| ModelError::decode(column, e.to_string()))
    }
}
