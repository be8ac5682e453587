//! User service for user CRUD operations.
//!
//! Enforces the two domain rules (email uniqueness, existence before
//! update/delete) and otherwise forwards calls to the repository unchanged.

use std::sync::Arc;

use log::{debug, info, warn};
use sqlx::SqlitePool;

use crate::constants::{ERR_EMAIL_EXISTS, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{User, UserPayload};
use crate::repositories::UserRepository;

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(pool)),
        }
    }

    /// Get all users.
    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.repository.find_all().await
    }

    /// Get a user by id.
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by id: {}", id);
        self.repository.find_by_id(id).await
    }

    /// Get a user by email address.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by email: {}", email);
        self.repository.find_by_email(email).await
    }

    /// Create a new user. Fails if the email is already registered.
    pub async fn create_user(&self, payload: UserPayload) -> Result<User, ApiError> {
        // Check for email duplication before inserting. The unique constraint
        // on the table remains the backstop for concurrent creates.
        if self.repository.exists_by_email(&payload.email).await? {
            warn!("Create failed: email already exists: {}", payload.email);
            return Err(ApiError::DuplicateEmail(format!(
                "{}: {}",
                ERR_EMAIL_EXISTS, payload.email
            )));
        }

        let user = self.repository.insert(&payload.name, &payload.email).await?;
        info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Overwrite a user's name and email wholesale.
    ///
    /// Fails with NotFound if the id does not exist, and with DuplicateEmail
    /// if the new email already belongs to a different user.
    pub async fn update_user(&self, id: i64, payload: UserPayload) -> Result<User, ApiError> {
        let existing = self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Update failed: user not found with id: {}", id);
            ApiError::NotFound(format!("{}: {}", ERR_USER_NOT_FOUND, id))
        })?;

        // Re-check uniqueness when the email changes so a collision surfaces
        // as a domain error rather than a raw constraint violation.
        if payload.email != existing.email {
            if let Some(other) = self.repository.find_by_email(&payload.email).await? {
                if other.id != existing.id {
                    warn!(
                        "Update failed: email {} already taken by user {}",
                        payload.email, other.id
                    );
                    return Err(ApiError::DuplicateEmail(format!(
                        "{}: {}",
                        ERR_EMAIL_EXISTS, payload.email
                    )));
                }
            }
        }

        let user = self
            .repository
            .update(id, &payload.name, &payload.email)
            .await?;
        info!("Updated user {}", id);
        Ok(user)
    }

    /// Delete a user by id. Fails with NotFound if the id does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        if !self.repository.exists_by_id(id).await? {
            warn!("Delete failed: user not found with id: {}", id);
            return Err(ApiError::NotFound(format!(
                "{}: {}",
                ERR_USER_NOT_FOUND, id
            )));
        }

        self.repository.delete_by_id(id).await?;
        info!("Deleted user {}", id);
        Ok(())
    }

    /// Search users whose name contains the given substring.
    pub async fn search_users_by_name(&self, name: &str) -> Result<Vec<User>, ApiError> {
        self.repository.find_by_name_containing(name).await
    }

    /// Total number of registered users.
    pub async fn get_user_count(&self) -> Result<i64, ApiError> {
        self.repository.count().await
    }
}
