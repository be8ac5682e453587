use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Greeting endpoint
            .route("/hello", web::get().to(handlers::hello))
            .service(
                web::scope("/users")
                    // Fixed paths must be registered before /{id} to avoid conflict
                    .route("/search", web::get().to(handlers::search_users))
                    .route("/stats", web::get().to(handlers::get_user_stats))
                    // List all users
                    .route("", web::get().to(handlers::get_users))
                    // Create a new user
                    .route("", web::post().to(handlers::create_user))
                    // Get specific user by id
                    .route("/{id}", web::get().to(handlers::get_user))
                    // Update user name and email
                    .route("/{id}", web::put().to(handlers::update_user))
                    // Delete user
                    .route("/{id}", web::delete().to(handlers::delete_user)),
            ),
    )
    // OpenAPI document
    .route("/api-docs/openapi.json", web::get().to(openapi_json));
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
