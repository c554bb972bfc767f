//! Company list-query filtering: typed filter and WHERE clause building.

use crate::clause::clause::Clause;
use crate::clause::param::ParamList;
use crate::error::{ModelError, ModelResult};

/// Recognized constraints for narrowing a company list query.
///
/// Every key is optional; an all-`None` filter matches every row. Each
/// constraint is a tagged option rather than a key on an untyped bag, so
/// "absent" is unambiguous.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyFilter {
    /// Case-insensitive substring match on the company name.
    pub name: Option<String>,
    /// Lower bound (inclusive) on `num_employees`.
    pub min_employees: Option<i32>,
    /// Upper bound (inclusive) on `num_employees`.
    pub max_employees: Option<i32>,
}

impl CompanyFilter {
    /// A filter with no constraints.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check that the employee bounds are mutually consistent.
    ///
    /// This is the caller-side check [`build_filter_clause`] relies on: the
    /// builder itself never re-validates the bounds. `Company::find_all`
    /// runs it before building the clause.
    pub fn validate(&self) -> ModelResult<()> {
        if let (Some(min), Some(max)) = (self.min_employees, self.max_employees) {
            if min > max {
                return Err(ModelError::validation(format!(
                    "minEmployees ({min}) cannot exceed maxEmployees ({max})"
                )));
            }
        }
        Ok(())
    }
}

/// Build a parameterized `WHERE` clause from a company filter.
///
/// Predicates are emitted in a fixed order — name substring, minimum bound,
/// maximum bound — regardless of how the filter was populated, each taking
/// the next sequential placeholder. They are joined with `" AND "` (one
/// space on each side) and the non-empty result carries a single leading
/// space before the `WHERE` keyword, so it can be appended directly to a
/// base SELECT. A filter with no constraints yields [`Clause::empty`]:
/// append nothing, select all rows.
///
/// Bound consistency (`min <= max`) is deliberately not checked here; see
/// [`CompanyFilter::validate`].
///
/// # Example
///
/// ```
/// use jobboard::clause::{build_filter_clause, CompanyFilter};
///
/// let filter = CompanyFilter {
///     name: Some("net".into()),
///     min_employees: Some(10),
///     max_employees: None,
/// };
/// let clause = build_filter_clause(&filter);
/// assert_eq!(
///     clause.fragment(),
///     " WHERE name ILIKE $1 AND num_employees >= $2"
/// );
/// ```
pub fn build_filter_clause(filter: &CompanyFilter) -> Clause {
    let mut params = ParamList::new();
    let mut predicates = Vec::new();

    if let Some(name) = &filter.name {
        let idx = params.push(format!("%{name}%"));
        predicates.push(format!("name ILIKE ${idx}"));
    }
    if let Some(min) = filter.min_employees {
        let idx = params.push(min);
        predicates.push(format!("num_employees >= ${idx}"));
    }
    if let Some(max) = filter.max_employees {
        let idx = params.push(max);
        predicates.push(format!("num_employees <= ${idx}"));
    }

    if predicates.is_empty() {
        return Clause::empty();
    }

    Clause::new(format!(" WHERE {}", predicates.join(" AND ")), params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_builds_empty_clause() {
        let clause = build_filter_clause(&CompanyFilter::none());
        assert_eq!(clause.fragment(), "");
        assert_eq!(clause.len(), 0);
    }

    #[test]
    fn name_only_binds_wrapped_pattern() {
        let filter = CompanyFilter {
            name: Some("abc".into()),
            ..CompanyFilter::none()
        };
        let clause = build_filter_clause(&filter);
        assert_eq!(clause.fragment(), " WHERE name ILIKE $1");
        assert_eq!(clause.len(), 1);
    }

    #[test]
    fn both_bounds_number_contiguously() {
        let filter = CompanyFilter {
            name: None,
            min_employees: Some(2),
            max_employees: Some(5),
        };
        let clause = build_filter_clause(&filter);
        assert_eq!(
            clause.fragment(),
            " WHERE num_employees >= $1 AND num_employees <= $2"
        );
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn predicate_order_is_name_then_min_then_max() {
        let filter = CompanyFilter {
            max_employees: Some(50),
            min_employees: Some(2),
            name: Some("c".into()),
        };
        let clause = build_filter_clause(&filter);
        assert_eq!(
            clause.fragment(),
            " WHERE name ILIKE $1 AND num_employees >= $2 AND num_employees <= $3"
        );
        assert_eq!(clause.len(), 3);
    }

    #[test]
    fn name_and_min_pair() {
        let filter = CompanyFilter {
            name: Some("c".into()),
            min_employees: Some(2),
            max_employees: None,
        };
        let clause = build_filter_clause(&filter);
        assert_eq!(
            clause.fragment(),
            " WHERE name ILIKE $1 AND num_employees >= $2"
        );
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn and_join_keeps_spaces_on_both_sides() {
        let filter = CompanyFilter {
            name: Some("c".into()),
            min_employees: Some(1),
            max_employees: Some(2),
        };
        let clause = build_filter_clause(&filter);
        assert!(!clause.fragment().contains("$1AND"));
        assert_eq!(clause.fragment().matches(" AND ").count(), 2);
    }

    #[test]
    fn identical_input_builds_identical_output() {
        let filter = CompanyFilter {
            name: Some("net".into()),
            min_employees: Some(3),
            max_employees: Some(9),
        };
        let a = build_filter_clause(&filter);
        let b = build_filter_clause(&filter);
        assert_eq!(a.fragment(), b.fragment());
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let filter = CompanyFilter {
            name: None,
            min_employees: Some(10),
            max_employees: Some(2),
        };
        assert!(filter.validate().unwrap_err().is_validation());
    }

    #[test]
    fn validate_accepts_equal_bounds() {
        let filter = CompanyFilter {
            name: None,
            min_employees: Some(4),
            max_employees: Some(4),
        };
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn validate_ignores_missing_bounds() {
        let filter = CompanyFilter {
            name: Some("c".into()),
            min_employees: Some(100),
            max_employees: None,
        };
        assert!(filter.validate().is_ok());
    }
}
