//! HTTP-level tests exercising the full request path through routing,
//! handlers, service, and an in-memory SQLite database.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use user_crud_api::db;
use user_crud_api::routes::configure_routes;
use user_crud_api::services::UserService;

async fn test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    db::run_migrations(&pool).await.expect("failed to run migrations");
    pool
}

async fn test_app(
    pool: SqlitePool,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    let user_service = web::Data::new(UserService::new(pool));
    test::init_service(
        App::new()
            .app_data(user_service)
            .configure(configure_routes),
    )
    .await
}

async fn create_user(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    name: &str,
    email: &str,
) -> Value {
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "name": name, "email": email }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "create {} failed", email);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn hello_returns_message_and_timestamp() {
    let app = test_app(test_pool().await).await;

    let req = test::TestRequest::get().uri("/api/hello").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn create_assigns_id_and_roundtrips() {
    let app = test_app(test_pool().await).await;

    let created = create_user(&app, "Kim", "kim@x.com").await;
    assert_eq!(created, json!({ "id": 1, "name": "Kim", "email": "kim@x.com" }));

    let req = test::TestRequest::get().uri("/api/users/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn duplicate_email_is_rejected_with_400() {
    let app = test_app(test_pool().await).await;
    create_user(&app, "Kim", "kim@x.com").await;

    // Same email, different name
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "name": "Other", "email": "kim@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("kim@x.com"));
}

#[actix_web::test]
async fn get_unknown_user_returns_404_with_empty_body() {
    let app = test_app(test_pool().await).await;

    let req = test::TestRequest::get().uri("/api/users/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn update_overwrites_name_and_email_wholesale() {
    let app = test_app(test_pool().await).await;
    let created = create_user(&app, "Kim", "kim@x.com").await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", id))
        .set_json(json!({ "name": "A", "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated, json!({ "id": id, "name": "A", "email": "a@x.com" }));

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn update_unknown_user_returns_400_with_error_body() {
    let app = test_app(test_pool().await).await;

    let req = test::TestRequest::put()
        .uri("/api/users/999")
        .set_json(json!({ "name": "A", "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("999"));
}

#[actix_web::test]
async fn update_to_another_users_email_is_rejected() {
    let app = test_app(test_pool().await).await;
    create_user(&app, "Kim", "kim@x.com").await;
    let second = create_user(&app, "Lee", "lee@x.com").await;
    let id = second["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", id))
        .set_json(json!({ "name": "Lee", "email": "kim@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("kim@x.com"));
}

#[actix_web::test]
async fn delete_then_get_then_delete_again() {
    let app = test_app(test_pool().await).await;
    let created = create_user(&app, "Kim", "kim@x.com").await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // Second delete of the same id fails
    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn list_returns_bare_array_of_all_users() {
    let app = test_app(test_pool().await).await;
    create_user(&app, "Kim", "kim@x.com").await;
    create_user(&app, "Lee", "lee@x.com").await;

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let users = body.as_array().expect("expected a bare JSON array");
    assert_eq!(users.len(), 2);
}

#[actix_web::test]
async fn search_matches_name_substring_only() {
    let app = test_app(test_pool().await).await;
    create_user(&app, "Hannah", "hannah@x.com").await;
    create_user(&app, "Johan", "johan@x.com").await;
    create_user(&app, "Alice", "alice@x.com").await;

    let req = test::TestRequest::get()
        .uri("/api/users/search?name=han")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let mut names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Hannah", "Johan"]);
}

#[actix_web::test]
async fn stats_tracks_current_user_count() {
    let app = test_app(test_pool().await).await;
    create_user(&app, "Kim", "kim@x.com").await;
    create_user(&app, "Lee", "lee@x.com").await;

    let req = test::TestRequest::get().uri("/api/users/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalUsers"], 2);
    assert!(body["timestamp"].is_string());

    let req = test::TestRequest::delete().uri("/api/users/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get().uri("/api/users/stats").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalUsers"], 1);
}

#[actix_web::test]
async fn invalid_payload_is_rejected_with_400() {
    let app = test_app(test_pool().await).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "name": "", "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
