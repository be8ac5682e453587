use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// JSON body returned for every failed request: `{"error": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "User not found with id: 42")]
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Create or update would collide with an existing user's email.
    DuplicateEmail(String),
    /// Update or delete targeted an id with no matching row.
    NotFound(String),
    /// Request payload failed validation.
    Validation(Vec<String>),
    /// Storage-level constraint violation (e.g. concurrent duplicate insert).
    BadRequest(String),
    /// Unexpected database failure.
    InternalServerError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::DuplicateEmail(message) => write!(f, "Duplicate Email: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Validation(errors) => write!(f, "Validation Error: {:?}", errors),
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            // Every business-layer failure maps to 400 with an {"error"} body,
            // including not-found on update/delete. Only the get-by-id handler
            // answers 404, and it does so itself with an empty body.
            ApiError::DuplicateEmail(message)
            | ApiError::NotFound(message)
            | ApiError::BadRequest(message) => HttpResponse::BadRequest().json(ErrorResponse {
                error: message.clone(),
            }),
            ApiError::Validation(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                error: errors.join("; "),
            }),
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: message.clone(),
                })
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // The unique constraint on email is the backstop for the
            // check-then-act race in create_user; surface it as a client error
            // the same way any other business failure is surfaced.
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ApiError::BadRequest(db_err.message().to_string())
            }
            _ => ApiError::InternalServerError(err.to_string()),
        }
    }
}
