use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use todo_api::auth::AuthMiddleware;
use todo_api::config::Config;
use todo_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    todo_api::db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    log::info!("Starting todo API server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .configure(routes::public_config)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::protected_config),
            )
    })
    .bind((config.server_host, config.server_port))?
    .run()
    .await
}
