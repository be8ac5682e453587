//! Hello endpoint handler.

use actix_web::HttpResponse;
use chrono::Utc;

use crate::constants::MSG_HELLO;
use crate::models::HelloResponse;

/// Basic greeting with the current server time
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Hello",
    responses(
        (status = 200, description = "Greeting message", body = HelloResponse)
    )
)]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(HelloResponse {
        message: MSG_HELLO.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
