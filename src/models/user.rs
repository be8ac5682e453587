use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User row stored in the `users` table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, ToSchema)]
pub struct User {
    /// Surrogate key assigned by the database on insert
    #[schema(example = 1)]
    pub id: i64,
    /// User's display name (not unique)
    #[schema(example = "Kim")]
    pub name: String,
    /// User's email address (unique across all users)
    #[schema(example = "kim@example.com")]
    pub email: String,
}

/// Request payload for creating or updating a user.
///
/// Updates overwrite `name` and `email` wholesale; partial updates are not
/// supported. A client-supplied `id` is accepted for shape compatibility but
/// ignored — the database assigns ids.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Ignored on input; the database assigns ids
    #[serde(default)]
    #[schema(example = json!(null))]
    pub id: Option<i64>,
    /// User's display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Kim")]
    pub name: String,
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "kim@example.com")]
    pub email: String,
}
