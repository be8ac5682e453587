//! User repository for all SQLite operations related to users.
//!
//! This repository encapsulates all database access logic for the `users` table,
//! providing a clean interface for the service layer. Every method issues a
//! single hand-written SQL statement.

use log::debug;
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return it with the database-assigned id.
    ///
    /// A duplicate email violates the unique constraint and surfaces as a
    /// storage-level error.
    pub async fn insert(&self, name: &str, email: &str) -> Result<User, ApiError> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?1, ?2)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by id: {}", id);
        Ok(
            sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    /// Fetch all users in storage order.
    pub async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// Find a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email: {}", email);
        Ok(
            sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = ?1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    /// Find users whose name contains the given substring.
    ///
    /// Wildcard characters in the substring are not escaped; matching
    /// semantics are whatever SQLite's LIKE provides.
    pub async fn find_by_name_containing(&self, name: &str) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Searching users by name substring: {}", name);
        Ok(sqlx::query_as::<_, User>(
            "SELECT id, name, email FROM users WHERE name LIKE '%' || ?1 || '%'",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Check whether a user with the given email exists.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, ApiError> {
        Ok(
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?,
        )
    }

    /// Check whether a user with the given id exists.
    pub async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError> {
        Ok(
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?,
        )
    }

    /// Overwrite a user's name and email and return the updated row.
    pub async fn update(&self, id: i64, name: &str, email: &str) -> Result<User, ApiError> {
        sqlx::query("UPDATE users SET name = ?1, email = ?2 WHERE id = ?3")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Delete a user by id. Callers are expected to check existence first;
    /// deleting an absent id is a no-op at this layer.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64, ApiError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
                .fetch_one(&self.pool)
                .await?,
        )
    }
}
