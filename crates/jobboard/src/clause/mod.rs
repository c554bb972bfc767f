//! Parameterized SQL clause building.
//!
//! This module turns sparse, partially-specified inputs into SQL fragments
//! plus ordered bound values, without ever interpolating a value into the
//! statement text:
//!
//! - [`ColumnMap`] translates application field names to column names.
//! - [`Patch`] + [`build_set_clause`] produce a `SET` clause for partial
//!   updates.
//! - [`CompanyFilter`] + [`build_filter_clause`] produce a `WHERE` clause
//!   for list queries.
//!
//! Placeholder indices are computed at build time, not via string
//! replacement, so `$i` always refers to the i-th bound value. Everything
//! here is a pure transformation: no I/O, no shared state, each call
//! independent.
//!
//! ```
//! use jobboard::clause::{build_set_clause, ColumnMap, Patch};
//!
//! const MAP: ColumnMap = ColumnMap::new(&[("numEmployees", "num_employees")]);
//!
//! let patch = Patch::new().set("name", "Acme").set("numEmployees", 12_i32);
//! let clause = build_set_clause(&patch, &MAP)?;
//! assert_eq!(clause.fragment(), "\"name\"=$1, \"num_employees\"=$2");
//! # Ok::<(), jobboard::ModelError>(())
//! ```

mod clause;
mod column_map;
mod filter;
mod param;
mod set_clause;

pub use clause::Clause;
pub use column_map::ColumnMap;
pub use filter::{CompanyFilter, build_filter_clause};
pub use param::{Param, ParamList};
pub use set_clause::{Patch, build_set_clause};
