pub mod files;

use actix_web::{web, HttpResponse};
use serde_json::json;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Registers all routes; `route_prefix` is where downloads are mounted.
pub fn configure(cfg: &mut web::ServiceConfig, route_prefix: &str) {
    cfg.route("/health", web::get().to(health_check)).route(
        &format!("{}/{{upload_id}}", route_prefix),
        web::get().to(files::download_file),
    );
}
