//! Libraries repository for database operations
//!
//! All queries are keyed by the owning user id; the unique constraint on
//! `libraries.user_id` is the authoritative one-library-per-user guard.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::library::{CreateLibrary, Library, UpdateLibrary},
};

#[derive(Clone)]
pub struct LibrariesRepository {
    pool: Pool<Postgres>,
}

impl LibrariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the library owned by a user
    pub async fn get_by_user_id(&self, user_id: i32) -> AppResult<Option<Library>> {
        let library = sqlx::query_as::<_, Library>(
            "SELECT id, user_id, name, description FROM libraries WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(library)
    }

    /// Insert a library for a user. Returns None when the user_id unique
    /// constraint rejects the insert (the user already owns one).
    pub async fn create(&self, user_id: i32, library: &CreateLibrary) -> AppResult<Option<Library>> {
        let result = sqlx::query_as::<_, Library>(
            r#"
            INSERT INTO libraries (user_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, description
            "#,
        )
        .bind(user_id)
        .bind(&library.name)
        .bind(&library.description)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(library) => Ok(Some(library)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Update a user's library. Name always overwrites, description only when
    /// supplied. Returns false when the user has no library.
    pub async fn update(&self, user_id: i32, library: &UpdateLibrary) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE libraries SET
                name = $1,
                description = COALESCE($2, description)
            WHERE user_id = $3
            "#,
        )
        .bind(&library.name)
        .bind(&library.description)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a user's library. Returns false when the user has no library.
    pub async fn delete(&self, user_id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM libraries WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
