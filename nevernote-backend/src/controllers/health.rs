use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Literal healthcheck body expected by existing clients
pub const ALIVE_BODY: &str = r#"{"alive": true}"#;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    // Any method is accepted on the healthcheck.
    cfg.service(web::resource("/healthcheck").to(health_check));
    cfg.service(web::resource("/api/version").route(web::get().to(get_version)));
    cfg.service(web::resource("/api/health/config").route(web::get().to(get_config_status)));
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(ALIVE_BODY)
}

async fn get_version() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "version": VERSION
    }))
}

async fn get_config_status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "host": state.config.host,
        "port": state.config.port,
        "seed_example": state.config.seed_example,
        "notebook_count": state.store.list_notebook_titles().len()
    }))
}
