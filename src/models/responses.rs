//! Response models for the non-entity endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Response for the hello endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    /// Greeting message
    #[schema(example = "Hello! This is the user CRUD API service.")]
    pub message: String,
    /// Server time in RFC 3339 format
    #[schema(example = "2026-01-15T09:30:00+00:00")]
    pub timestamp: String,
}

/// Response for the user statistics endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Total number of registered users
    #[serde(rename = "totalUsers")]
    #[schema(example = 42)]
    pub total_users: i64,
    /// Server time in RFC 3339 format
    #[schema(example = "2026-01-15T09:30:00+00:00")]
    pub timestamp: String,
}

/// Generic message response for successful mutations without a body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Status message
    #[schema(example = "User deleted successfully")]
    pub message: String,
}
