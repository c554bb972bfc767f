//! The `Clause` value: a SQL fragment plus its ordered bound values.

use crate::clause::param::ParamList;
use tokio_postgres::types::ToSql;

/// A parameterized SQL fragment not yet combined into a full statement.
///
/// The fragment uses `$1, $2, ...` positional placeholders; placeholder `$i`
/// always refers to `params[i - 1]`. A clause is built fresh per call,
/// spliced into a statement template by the caller, and discarded — it holds
/// no state beyond the text and the values.
#[derive(Clone, Debug, Default)]
pub struct Clause {
    fragment: String,
    params: ParamList,
}

impl Clause {
    /// Create a clause from a fragment and its bound values.
    pub fn new(fragment: String, params: ParamList) -> Self {
        Self { fragment, params }
    }

    /// An empty clause: no text, no values.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The SQL fragment with `$n` placeholders.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// The ordered bound values.
    pub fn params(&self) -> &ParamList {
        &self.params
    }

    /// Number of bound values (equals the number of placeholders).
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True when the fragment is empty and nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.fragment.is_empty() && self.params.is_empty()
    }

    /// Append one more bound value after the clause's own placeholders and
    /// return its 1-based index.
    ///
    /// Used when a statement binds a key after a generated fragment, e.g.
    /// `UPDATE companies SET <fragment> WHERE handle = $(n + 1)`.
    pub fn push_param<T: ToSql + Send + Sync + 'static>(&mut self, value: T) -> usize {
        self.params.push(value)
    }

    /// Consume the clause, returning the fragment and values.
    pub fn into_parts(self) -> (String, ParamList) {
        (self.fragment, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clause_has_no_text_or_values() {
        let clause = Clause::empty();
        assert_eq!(clause.fragment(), "");
        assert_eq!(clause.len(), 0);
        assert!(clause.is_empty());
    }

    #[test]
    fn push_param_continues_numbering() {
        let mut params = ParamList::new();
        params.push("Mary");
        params.push("Jane");
        let mut clause = Clause::new("\"first_name\"=$1, \"last_name\"=$2".into(), params);

        let idx = clause.push_param("c1");
        assert_eq!(idx, 3);
        assert_eq!(clause.len(), 3);
    }
}
