//! Per-entity field-name to column-name translation.

/// An immutable mapping from application field names (camelCase, as they
/// appear in API payloads) to storage column names (snake_case).
///
/// Each entity defines one map as a `'static` constant covering only the
/// fields whose column name differs from the field name; everything else
/// falls through unchanged. Lookup is pure and total — it never fails.
///
/// # Example
///
/// ```
/// use jobboard::clause::ColumnMap;
///
/// const MAP: ColumnMap = ColumnMap::new(&[
///     ("numEmployees", "num_employees"),
///     ("logoUrl", "logo_url"),
/// ]);
///
/// assert_eq!(MAP.column("numEmployees"), "num_employees");
/// assert_eq!(MAP.column("description"), "description");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ColumnMap {
    entries: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    /// Create a map from a static slice of `(field, column)` pairs.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// A map with no renames: every field is its own column.
    pub const fn identity() -> Self {
        Self { entries: &[] }
    }

    /// Translate a field name to its column name, falling back to the field
    /// name verbatim when no entry exists.
    pub fn column<'a>(&self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, col)| *col)
            .unwrap_or(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: ColumnMap = ColumnMap::new(&[
        ("firstName", "first_name"),
        ("lastName", "last_name"),
        ("isAdmin", "is_admin"),
    ]);

    #[test]
    fn mapped_fields_translate() {
        assert_eq!(MAP.column("firstName"), "first_name");
        assert_eq!(MAP.column("isAdmin"), "is_admin");
    }

    #[test]
    fn unmapped_fields_pass_through_verbatim() {
        assert_eq!(MAP.column("email"), "email");
        assert_eq!(MAP.column("anything_else"), "anything_else");
    }

    #[test]
    fn identity_map_never_renames() {
        let map = ColumnMap::identity();
        assert_eq!(map.column("firstName"), "firstName");
    }
}
