//! Company entity and its CRUD operations.

use crate::clause::{
    Clause, ColumnMap, CompanyFilter, ParamList, Patch, build_filter_clause, build_set_clause,
};
use crate::client::GenericClient;
use crate::error::{ModelError, ModelResult};
use crate::row::{FromRow, RowExt};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

/// A company that posts jobs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl FromRow for Company {
    fn from_row(row: &Row) -> ModelResult<Self> {
        Ok(Self {
            handle: row.try_get_column("handle")?,
            name: row.try_get_column("name")?,
            description: row.try_get_column("description")?,
            num_employees: row.try_get_column("num_employees")?,
            logo_url: row.try_get_column("logo_url")?,
        })
    }
}

/// Input for creating a company.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i32>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A partial update to a company.
///
/// `None` means "leave the column alone". For the nullable columns the inner
/// option distinguishes "set a value" (`Some(Some(v))`) from "set the column
/// to NULL" (`Some(None)`).
#[derive(Clone, Debug, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub num_employees: Option<Option<i32>>,
    pub logo_url: Option<Option<String>>,
}

impl CompanyPatch {
    /// Lower into an ordered [`Patch`] of API field names.
    fn to_patch(&self) -> Patch {
        let mut patch = Patch::new()
            .set_opt("name", self.name.clone())
            .set_opt("description", self.description.clone());
        patch = match &self.num_employees {
            None => patch,
            Some(None) => patch.set_null("numEmployees"),
            Some(Some(n)) => patch.set("numEmployees", *n),
        };
        match &self.logo_url {
            None => patch,
            Some(None) => patch.set_null("logoUrl"),
            Some(Some(url)) => patch.set("logoUrl", url.clone()),
        }
    }
}

impl Company {
    /// Field-name to column-name translation for company updates.
    pub const COLUMN_MAP: ColumnMap = ColumnMap::new(&[
        ("numEmployees", "num_employees"),
        ("logoUrl", "logo_url"),
    ]);

    /// Create a company, returning the stored row.
    ///
    /// Fails with [`ModelError::Duplicate`] when the handle is taken.
    pub async fn create(client: &impl GenericClient, data: &NewCompany) -> ModelResult<Company> {
        let existing = client
            .query_opt(
                "SELECT handle FROM companies WHERE handle = $1",
                &[&data.handle],
            )
            .await?;
        if existing.is_some() {
            return Err(ModelError::duplicate(format!(
                "Duplicate company: {}",
                data.handle
            )));
        }

        let sql = format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COMPANY_COLUMNS}"
        );
        let row = client
            .query_one(
                &sql,
                &[
                    &data.handle,
                    &data.name,
                    &data.description,
                    &data.num_employees,
                    &data.logo_url,
                ],
            )
            .await?;
        Company::from_row(&row)
    }

    /// Find all companies matching `filter`, ordered by name.
    ///
    /// An unconstrained filter returns every company. Inconsistent employee
    /// bounds are rejected here, before any SQL is built.
    pub async fn find_all(
        client: &impl GenericClient,
        filter: &CompanyFilter,
    ) -> ModelResult<Vec<Company>> {
        let (sql, params) = Self::find_all_sql(filter)?;
        tracing::debug!(sql = %sql, "listing companies");
        let rows = client.query(&sql, &params.as_refs()).await?;
        rows.iter().map(Company::from_row).collect()
    }

    /// Fetch one company by handle.
    pub async fn get(client: &impl GenericClient, handle: &str) -> ModelResult<Company> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE handle = $1");
        let row = client
            .query_opt(&sql, &[&handle])
            .await?
            .ok_or_else(|| ModelError::not_found(format!("No company: {handle}")))?;
        Company::from_row(&row)
    }

    /// Apply a partial update to one company, returning the updated row.
    ///
    /// Fails with [`ModelError::Validation`] when the patch is empty and
    /// [`ModelError::NotFound`] when the handle does not exist.
    pub async fn update(
        client: &impl GenericClient,
        handle: &str,
        patch: &CompanyPatch,
    ) -> ModelResult<Company> {
        let (sql, params) = Self::update_sql(handle, patch)?;
        tracing::debug!(sql = %sql, "updating company");
        let row = client
            .query_opt(&sql, &params.as_refs())
            .await?
            .ok_or_else(|| ModelError::not_found(format!("No company: {handle}")))?;
        Company::from_row(&row)
    }

    /// Delete one company.
    pub async fn remove(client: &impl GenericClient, handle: &str) -> ModelResult<()> {
        let row = client
            .query_opt(
                "DELETE FROM companies WHERE handle = $1 RETURNING handle",
                &[&handle],
            )
            .await?;
        if row.is_none() {
            return Err(ModelError::not_found(format!("No company: {handle}")));
        }
        Ok(())
    }

    /// Assemble the filtered list statement.
    fn find_all_sql(filter: &CompanyFilter) -> ModelResult<(String, ParamList)> {
        filter.validate()?;
        let clause = build_filter_clause(filter);
        let (fragment, params) = clause.into_parts();
        let sql = format!(
            "SELECT {COMPANY_COLUMNS} FROM companies{fragment} ORDER BY name"
        );
        Ok((sql, params))
    }

    /// Assemble the partial-update statement, binding the handle after the
    /// patch values.
    fn update_sql(handle: &str, patch: &CompanyPatch) -> ModelResult<(String, ParamList)> {
        let mut clause: Clause = build_set_clause(&patch.to_patch(), &Self::COLUMN_MAP)?;
        let key_idx = clause.push_param(handle.to_string());
        let (fragment, params) = clause.into_parts();
        let sql = format!(
            "UPDATE companies SET {fragment} WHERE handle = ${key_idx} \
             RETURNING {COMPANY_COLUMNS}"
        );
        Ok((sql, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_sql_binds_handle_after_patch_values() {
        let patch = CompanyPatch {
            name: Some("New Name".into()),
            num_employees: Some(Some(25)),
            ..CompanyPatch::default()
        };
        let (sql, params) = Company::update_sql("c1", &patch).unwrap();
        assert_eq!(
            sql,
            "UPDATE companies SET \"name\"=$1, \"num_employees\"=$2 WHERE handle = $3 \
             RETURNING handle, name, description, num_employees, logo_url"
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn update_sql_maps_camel_case_fields() {
        let patch = CompanyPatch {
            logo_url: Some(Some("http://new.img".into())),
            ..CompanyPatch::default()
        };
        let (sql, _) = Company::update_sql("c1", &patch).unwrap();
        assert!(sql.contains("\"logo_url\"=$1"));
    }

    #[test]
    fn update_sql_allows_explicit_null() {
        let patch = CompanyPatch {
            logo_url: Some(None),
            num_employees: Some(None),
            ..CompanyPatch::default()
        };
        let (sql, params) = Company::update_sql("c1", &patch).unwrap();
        assert!(sql.contains("\"num_employees\"=$1, \"logo_url\"=$2"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn update_sql_rejects_empty_patch() {
        let err = Company::update_sql("c1", &CompanyPatch::default()).unwrap_err();
        assert!(matches!(err, ModelError::Validation(msg) if msg == "no data"));
    }

    #[test]
    fn find_all_sql_without_filter_selects_everything() {
        let (sql, params) = Company::find_all_sql(&CompanyFilter::none()).unwrap();
        assert_eq!(
            sql,
            "SELECT handle, name, description, num_employees, logo_url \
             FROM companies ORDER BY name"
        );
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn find_all_sql_appends_filter_before_order_by() {
        let filter = CompanyFilter {
            name: Some("c".into()),
            min_employees: Some(2),
            max_employees: None,
        };
        let (sql, params) = Company::find_all_sql(&filter).unwrap();
        assert_eq!(
            sql,
            "SELECT handle, name, description, num_employees, logo_url \
             FROM companies WHERE name ILIKE $1 AND num_employees >= $2 ORDER BY name"
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn find_all_sql_rejects_inverted_bounds() {
        let filter = CompanyFilter {
            name: None,
            min_employees: Some(10),
            max_employees: Some(2),
        };
        assert!(Company::find_all_sql(&filter).unwrap_err().is_validation());
    }
}
