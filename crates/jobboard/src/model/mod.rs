//! Entity models: companies, jobs, users.
//!
//! Each model owns its table's CRUD operations, lowers typed patch/filter
//! inputs through the clause builders in [`crate::clause`], and executes the
//! assembled statements through a [`crate::client::GenericClient`]. SQL text
//! assembly lives in private `*_sql` helpers so statement generation is
//! testable without a database.

mod company;
mod job;
mod user;

pub use company::{Company, CompanyPatch, NewCompany};
pub use job::{Job, JobPatch, NewJob};
pub use user::{NewUser, User, UserPatch};
