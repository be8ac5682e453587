//! User handlers for CRUD operations, search, and statistics.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::MSG_USER_DELETED;
use crate::errors::ApiError;
use crate::models::{MessageResponse, StatsResponse, UserPayload};
use crate::services::UserService;

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = [crate::models::User])
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_all_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Get a specific user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = crate::models::User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    match user_service.get_user_by_id(user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => {
            warn!("User not found with id: {}", user_id);
            Ok(HttpResponse::NotFound().finish())
        }
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User created", body = crate::models::User),
        (status = 400, description = "Duplicate email or invalid payload", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    // Validate input
    body.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(_, errs)| {
                errs.iter()
                    .map(|e| e.message.clone().unwrap_or_default().to_string())
            })
            .collect();
        warn!("Validation failed for create user: {:?}", errors);
        ApiError::Validation(errors)
    })?;

    info!("Creating user with email: {}", body.email);
    let user = user_service.create_user(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Update a user's name and email
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = crate::models::User),
        (status = 400, description = "Unknown id, duplicate email, or invalid payload", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    // Validate input
    body.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(_, errs)| {
                errs.iter()
                    .map(|e| e.message.clone().unwrap_or_default().to_string())
            })
            .collect();
        warn!("Validation failed for update user: {:?}", errors);
        ApiError::Validation(errors)
    })?;

    info!("Updating user with id: {}", user_id);
    let user = user_service.update_user(user_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Unknown id", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    info!("Deleting user with id: {}", user_id);
    user_service.delete_user(user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: MSG_USER_DELETED.to_string(),
    }))
}

/// Search users by name substring
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "Users",
    params(
        ("name" = String, Query, description = "Substring to match against user names")
    ),
    responses(
        (status = 200, description = "Matching users", body = [crate::models::User])
    )
)]
pub async fn search_users(
    user_service: web::Data<UserService>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    debug!("Searching users by name: {}", query.name);
    let users = user_service.search_users_by_name(&query.name).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// User count statistic with the current server time
#[utoipa::path(
    get,
    path = "/api/users/stats",
    tag = "Users",
    responses(
        (status = 200, description = "User statistics", body = StatsResponse)
    )
)]
pub async fn get_user_stats(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, ApiError> {
    let total_users = user_service.get_user_count().await?;
    debug!("User stats: total={}", total_users);

    Ok(HttpResponse::Ok().json(StatsResponse {
        total_users,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Query parameters for searching users by name
#[derive(Debug, serde::Deserialize)]
pub struct SearchQuery {
    /// Substring to match against user names
    pub name: String,
}
