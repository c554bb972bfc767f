//! # jobboard
//!
//! A typed SQL model layer for a job-board backend: companies, jobs, and
//! users over PostgreSQL.
//!
//! ## Features
//!
//! - **Parameter-safe clause building**: sparse patches and filters become
//!   `$n`-parameterized `SET`/`WHERE` fragments; values travel only through
//!   the bound-value list, never through the statement text
//! - **Typed inputs**: per-entity patch and filter structs of `Option`s
//!   instead of untyped bags, with per-entity field-to-column maps
//! - **Type-safe mapping**: Row → Struct via the `FromRow` trait
//! - **Transaction-friendly**: pass a transaction anywhere a
//!   [`GenericClient`] is expected
//!
//! ## Example
//!
//! ```ignore
//! use jobboard::{Company, CompanyFilter, CompanyPatch};
//!
//! let pool = jobboard::create_pool("postgres://localhost/jobboard")?;
//! let client = pool.get().await?;
//!
//! // List companies with 10..=50 employees whose name contains "net".
//! let filter = CompanyFilter {
//!     name: Some("net".into()),
//!     min_employees: Some(10),
//!     max_employees: Some(50),
//! };
//! let companies = Company::find_all(&client, &filter).await?;
//!
//! // Partially update one of them.
//! let patch = CompanyPatch {
//!     num_employees: Some(Some(55)),
//!     ..CompanyPatch::default()
//! };
//! let updated = Company::update(&client, "acme", &patch).await?;
//! ```

pub mod clause;
pub mod client;
pub mod error;
pub mod model;
pub mod row;

pub use clause::{
    Clause, ColumnMap, CompanyFilter, Param, ParamList, Patch, build_filter_clause,
    build_set_clause,
};
pub use client::GenericClient;
pub use error::{ModelError, ModelResult};
pub use model::{
    Company, CompanyPatch, Job, JobPatch, NewCompany, NewJob, NewUser, User, UserPatch,
};
pub use row::{FromRow, RowExt};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config};
