use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;

mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod utils;

use config::AppConfig;
use services::{AuthService, CartService, MongoDBService, OrderService, StorageService};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(log_level));

    let app_config = AppConfig::load()?;

    let mongodb = MongoDBService::init(&app_config.mongodb_uri)
        .await
        .expect("Failed to initialize MongoDB");
    let mongodb_arc = Arc::new(mongodb.clone());
    let mongodb_data = web::Data::new(mongodb);

    let auth_service = web::Data::new(AuthService::new(
        &app_config.jwt_secret,
        app_config.token_ttl_hours,
    ));

    let storage_service = Arc::new(StorageService::new(
        app_config.upload_url.clone(),
        app_config.upload_preset.clone(),
    ));

    let cart_service = web::Data::new(CartService::new(mongodb_arc.clone()));

    let order_service = web::Data::new(OrderService::new(
        mongodb_arc,
        storage_service,
        app_config.store_whatsapp.clone(),
    ));

    let config_data = web::Data::new(app_config.clone());

    info!(
        "Starting server at http://{}:{}",
        app_config.server_host, app_config.server_port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .expose_headers(vec!["content-type", "content-length", "accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(mongodb_data.clone())
            .app_data(auth_service.clone())
            .app_data(cart_service.clone())
            .app_data(order_service.clone())
            .app_data(config_data.clone())
            .configure(routes::configure)
            .route("/health", web::get().to(|| async {
                info!("Health check");
                HttpResponse::Ok().body("OK")
            }))
    })
    .bind(format!("{}:{}", app_config.server_host, app_config.server_port))?
    .run()
    .await?;

    info!("Server shutting down");
    Ok(())
}
