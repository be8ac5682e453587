use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use user_crud_api::config::CONFIG;
use user_crud_api::db;
use user_crud_api::routes;
use user_crud_api::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to SQLite
    info!("Connecting to database at {}...", CONFIG.database_url);
    let pool = db::init_pool(&CONFIG.database_url)
        .await
        .expect("Failed to connect to database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to initialize database schema");
    info!("Database schema ready");

    // Initialize services
    let user_service = web::Data::new(UserService::new(pool));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
