mod config;
mod db;
mod encoding;
mod error;
mod handlers;
mod logging;
mod models;
mod state;
mod storage;

use std::io;

use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};
use config::Config;
use state::AppState;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    logging::init("info");

    let config = Config::from_env();
    storage::ensure_storage_root(&config.storage_root).await?;

    let pool = db::init_pool(&config.database_url)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Failed to initialize SQLite pool: {}", e)))?;

    info!(
        storage_root = %config.storage_root.display(),
        route_prefix = %config.route_prefix,
        chunk_size = config.chunk_size,
        "Starting download server on {}:{}",
        config.bind_addr,
        config.port
    );

    let bind = (config.bind_addr.clone(), config.port);
    let route_prefix = config.route_prefix.clone();
    let app_state = web::Data::new(AppState::new(pool, config));

    HttpServer::new(move || {
        let route_prefix = route_prefix.clone();
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(move |cfg| handlers::configure(cfg, &route_prefix))
    })
    .bind(bind)?
    .run()
    .await
}
