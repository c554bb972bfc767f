//! Partial-update SET clause building.

use crate::clause::clause::Clause;
use crate::clause::column_map::ColumnMap;
use crate::clause::param::{Param, ParamList};
use crate::error::{ModelError, ModelResult};
use tokio_postgres::types::ToSql;

/// A sparse set of field/value pairs describing a partial update.
///
/// Fields are recorded in insertion order and keep that order all the way
/// into the generated SQL. A value may be an explicit SQL NULL (see
/// [`Patch::set_null`]); absence is expressed by never setting the field at
/// all, so "absent", "null", and falsy values stay distinct.
#[derive(Clone, Debug, Default)]
pub struct Patch {
    fields: Vec<(&'static str, Param)>,
}

impl Patch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field to a value.
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, field: &'static str, value: T) -> Self {
        self.fields.push((field, Param::new(value)));
        self
    }

    /// Set a field only when a value is present (None => skip).
    pub fn set_opt<T: ToSql + Send + Sync + 'static>(
        self,
        field: &'static str,
        value: Option<T>,
    ) -> Self {
        if let Some(v) = value {
            self.set(field, v)
        } else {
            self
        }
    }

    /// Set a field to SQL NULL.
    ///
    /// The NULL still travels as a bound value and consumes a placeholder,
    /// never as literal text in the fragment.
    pub fn set_null(self, field: &'static str) -> Self {
        self.set(field, Option::<String>::None)
    }

    /// Number of fields in the patch.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the patch has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Build a parameterized `SET` clause from a patch.
///
/// For the i-th field (1-indexed) the fragment gains `"<column>"=$<i>` and
/// the value lands at position `i - 1` of the clause's params, so placeholder
/// numbering always matches the bound-value order. Column names go through
/// `map` and are double-quoted to tolerate mixed-case or reserved-word
/// columns. Values are never interpolated into the fragment.
///
/// Fails with [`ModelError::Validation`] ("no data") when the patch is empty;
/// an empty SET clause would not be valid SQL, so this is checked before
/// anything else.
///
/// # Example
///
/// ```
/// use jobboard::clause::{build_set_clause, ColumnMap, Patch};
///
/// const MAP: ColumnMap = ColumnMap::new(&[("firstName", "first_name")]);
///
/// let patch = Patch::new().set("firstName", "Mary").set("email", "x@y.com");
/// let clause = build_set_clause(&patch, &MAP).unwrap();
/// assert_eq!(clause.fragment(), "\"first_name\"=$1, \"email\"=$2");
/// assert_eq!(clause.len(), 2);
/// ```
pub fn build_set_clause(patch: &Patch, map: &ColumnMap) -> ModelResult<Clause> {
    if patch.is_empty() {
        return Err(ModelError::validation("no data"));
    }

    let mut params = ParamList::new();
    let mut assignments = Vec::with_capacity(patch.fields.len());

    for (field, value) in &patch.fields {
        let idx = params.push_param(value.clone());
        assignments.push(format!("\"{}\"=${}", map.column(field), idx));
    }

    Ok(Clause::new(assignments.join(", "), params))
}
