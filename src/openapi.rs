use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{HelloResponse, MessageResponse, StatsResponse, User, UserPayload};

/// OpenAPI documentation for the User CRUD API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "1.0.0",
        description = "A REST API exposing a single User resource with create, read, update, delete, search, and count operations."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Hello", description = "Greeting endpoint"),
        (name = "Users", description = "User CRUD, search, and statistics endpoints")
    ),
    paths(
        crate::handlers::hello,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::handlers::search_users,
        crate::handlers::get_user_stats
    ),
    components(
        schemas(
            User,
            UserPayload,
            HelloResponse,
            StatsResponse,
            MessageResponse,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;
