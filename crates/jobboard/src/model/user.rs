//! User entity and its CRUD operations.
//!
//! Password hashing happens in the layer above this crate; models only ever
//! see and store the finished hash, and never return it.

use crate::clause::{Clause, ColumnMap, ParamList, Patch, build_set_clause};
use crate::client::GenericClient;
use crate::error::{ModelError, ModelResult};
use crate::row::{FromRow, RowExt};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

const USER_COLUMNS: &str = "username, first_name, last_name, email, is_admin";

/// A registered user. The stored password hash is never part of this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl FromRow for User {
    fn from_row(row: &Row) -> ModelResult<Self> {
        Ok(Self {
            username: row.try_get_column("username")?,
            first_name: row.try_get_column("first_name")?,
            last_name: row.try_get_column("last_name")?,
            email: row.try_get_column("email")?,
            is_admin: row.try_get_column("is_admin")?,
        })
    }
}

/// Input for creating a user. `password_hash` arrives pre-hashed.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// A partial update to a user. All columns here are NOT NULL, so a plain
/// `Option` per field is enough.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl UserPatch {
    fn to_patch(&self) -> Patch {
        Patch::new()
            .set_opt("firstName", self.first_name.clone())
            .set_opt("lastName", self.last_name.clone())
            .set_opt("email", self.email.clone())
            .set_opt("isAdmin", self.is_admin)
    }
}

impl User {
    /// Field-name to column-name translation for user updates.
    pub const COLUMN_MAP: ColumnMap = ColumnMap::new(&[
        ("firstName", "first_name"),
        ("lastName", "last_name"),
        ("isAdmin", "is_admin"),
    ]);

    /// Create a user, returning the stored row (without the hash).
    ///
    /// Fails with [`ModelError::Duplicate`] when the username is taken.
    pub async fn create(client: &impl GenericClient, data: &NewUser) -> ModelResult<User> {
        let existing = client
            .query_opt(
                "SELECT username FROM users WHERE username = $1",
                &[&data.username],
            )
            .await?;
        if existing.is_some() {
            return Err(ModelError::duplicate(format!(
                "Duplicate user: {}",
                data.username
            )));
        }

        let sql = format!(
            "INSERT INTO users (username, password, first_name, last_name, email, is_admin) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {USER_COLUMNS}"
        );
        let row = client
            .query_one(
                &sql,
                &[
                    &data.username,
                    &data.password_hash,
                    &data.first_name,
                    &data.last_name,
                    &data.email,
                    &data.is_admin,
                ],
            )
            .await?;
        User::from_row(&row)
    }

    /// Find all users, ordered by username.
    pub async fn find_all(client: &impl GenericClient) -> ModelResult<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY username");
        tracing::debug!(sql = %sql, "listing users");
        let rows = client.query(&sql, &[]).await?;
        rows.iter().map(User::from_row).collect()
    }

    /// Fetch one user by username.
    pub async fn get(client: &impl GenericClient, username: &str) -> ModelResult<User> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        let row = client
            .query_opt(&sql, &[&username])
            .await?
            .ok_or_else(|| ModelError::not_found(format!("No user: {username}")))?;
        User::from_row(&row)
    }

    /// Apply a partial update to one user, returning the updated row.
    pub async fn update(
        client: &impl GenericClient,
        username: &str,
        patch: &UserPatch,
    ) -> ModelResult<User> {
        let (sql, params) = Self::update_sql(username, patch)?;
        tracing::debug!(sql = %sql, "updating user");
        let row = client
            .query_opt(&sql, &params.as_refs())
            .await?
            .ok_or_else(|| ModelError::not_found(format!("No user: {username}")))?;
        User::from_row(&row)
    }

    /// Delete one user.
    pub async fn remove(client: &impl GenericClient, username: &str) -> ModelResult<()> {
        let row = client
            .query_opt(
                "DELETE FROM users WHERE username = $1 RETURNING username",
                &[&username],
            )
            .await?;
        if row.is_none() {
            return Err(ModelError::not_found(format!("No user: {username}")));
        }
        Ok(())
    }

    fn update_sql(username: &str, patch: &UserPatch) -> ModelResult<(String, ParamList)> {
        let mut clause: Clause = build_set_clause(&patch.to_patch(), &Self::COLUMN_MAP)?;
        let key_idx = clause.push_param(username.to_string());
        let (fragment, params) = clause.into_parts();
        let sql = format!(
            "UPDATE users SET {fragment} WHERE username = ${key_idx} \
             RETURNING {USER_COLUMNS}"
        );
        Ok((sql, params))
    }
}
