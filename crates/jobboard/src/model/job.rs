//! Job entity and its CRUD operations.

use crate::clause::{Clause, ColumnMap, ParamList, Patch, build_set_clause};
use crate::client::GenericClient;
use crate::error::{ModelError, ModelResult};
use crate::row::{FromRow, RowExt};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// A job posting, owned by a company.
///
/// Equity is carried as its decimal string representation (e.g. `"0.05"`);
/// parsing it into a numeric type is left to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<String>,
    pub company_handle: String,
}

impl FromRow for Job {
    fn from_row(row: &Row) -> ModelResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
            company_handle: row.try_get_column("company_handle")?,
        })
    }
}

/// Input for creating a job.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i32>,
    #[serde(default)]
    pub equity: Option<String>,
    pub company_handle: String,
}

/// A partial update to a job.
///
/// The owning company is fixed at creation time, so `companyHandle` is not
/// patchable. `Some(None)` on a nullable column sets it to NULL.
#[derive(Clone, Debug, Default)]
pub struct JobPatch {
    pub title: Option<String>,
    pub salary: Option<Option<i32>>,
    pub equity: Option<Option<String>>,
}

impl JobPatch {
    fn to_patch(&self) -> Patch {
        let mut patch = Patch::new().set_opt("title", self.title.clone());
        patch = match &self.salary {
            None => patch,
            Some(None) => patch.set_null("salary"),
            Some(Some(s)) => patch.set("salary", *s),
        };
        match &self.equity {
            None => patch,
            Some(None) => patch.set_null("equity"),
            Some(Some(e)) => patch.set("equity", e.clone()),
        }
    }
}

impl Job {
    /// Field-name to column-name translation for job updates.
    pub const COLUMN_MAP: ColumnMap = ColumnMap::new(&[("companyHandle", "company_handle")]);

    /// Create a job, returning the stored row with its assigned id.
    ///
    /// Fails with [`ModelError::Duplicate`] when an identical posting
    /// already exists.
    pub async fn create(client: &impl GenericClient, data: &NewJob) -> ModelResult<Job> {
        let existing = client
            .query_opt(
                "SELECT id FROM jobs \
                 WHERE title = $1 AND salary = $2 AND equity = $3 AND company_handle = $4",
                &[&data.title, &data.salary, &data.equity, &data.company_handle],
            )
            .await?;
        if let Some(row) = existing {
            let id: i32 = row.try_get_column("id")?;
            return Err(ModelError::duplicate(format!(
                "Duplicate job: {id} {}",
                data.title
            )));
        }

        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {JOB_COLUMNS}"
        );
        let row = client
            .query_one(
                &sql,
                &[&data.title, &data.salary, &data.equity, &data.company_handle],
            )
            .await?;
        Job::from_row(&row)
    }

    /// Find all jobs, ordered by id.
    pub async fn find_all(client: &impl GenericClient) -> ModelResult<Vec<Job>> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id");
        tracing::debug!(sql = %sql, "listing jobs");
        let rows = client.query(&sql, &[]).await?;
        rows.iter().map(Job::from_row).collect()
    }

    /// Fetch one job by id.
    pub async fn get(client: &impl GenericClient, id: i32) -> ModelResult<Job> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
        let row = client
            .query_opt(&sql, &[&id])
            .await?
            .ok_or_else(|| ModelError::not_found(format!("No job: {id}")))?;
        Job::from_row(&row)
    }

    /// Apply a partial update to one job, returning the updated row.
    pub async fn update(
        client: &impl GenericClient,
        id: i32,
        patch: &JobPatch,
    ) -> ModelResult<Job> {
        let (sql, params) = Self::update_sql(id, patch)?;
        tracing::debug!(sql = %sql, "updating job");
        let row = client
            .query_opt(&sql, &params.as_refs())
            .await?
            .ok_or_else(|| ModelError::not_found(format!("No job: {id}")))?;
        Job::from_row(&row)
    }

    /// Delete one job.
    pub async fn remove(client: &impl GenericClient, id: i32) -> ModelResult<()> {
        let row = client
            .query_opt("DELETE FROM jobs WHERE id = $1 RETURNING id", &[&id])
            .await?;
        if row.is_none() {
            return Err(ModelError::not_found(format!("No job: {id}")));
        }
        Ok(())
    }

    fn update_sql(id: i32, patch: &JobPatch) -> ModelResult<(String, ParamList)> {
        let mut clause: Clause = build_set_clause(&patch.to_patch(), &Self::COLUMN_MAP)?;
        let key_idx = clause.push_param(id);
        let (fragment, params) = clause.into_parts();
        let sql = format!(
            "UPDATE jobs SET {fragment} WHERE id = ${key_idx} RETURNING {JOB_COLUMNS}"
        );
        Ok((sql, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_sql_binds_id_after_patch_values() {
        let patch = JobPatch {
            title: Some("Staff Engineer".into()),
            salary: Some(Some(180_000)),
            equity: None,
        };
        let (sql, params) = Job::update_sql(7, &patch).unwrap();
        assert_eq!(
            sql,
            "UPDATE jobs SET \"title\"=$1, \"salary\"=$2 WHERE id = $3 \
             RETURNING id, title, salary, equity, company_handle"
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn update_sql_sets_nullable_columns_to_null() {
        let patch = JobPatch {
            title: None,
            salary: Some(None),
            equity: Some(None),
        };
        let (sql, params) = Job::update_sql(3, &patch).unwrap();
        assert!(sql.contains("\"salary\"=$1, \"equity\"=$2"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn update_sql_rejects_empty_patch() {
        let err = Job::update_sql(1, &JobPatch::default()).unwrap_err();
        assert!(err.is_validation());
    }
}
