use actix_web::web;
use serde::de::DeserializeOwned;

pub mod health;
pub mod notebooks;
pub mod notes;

/// Register every route served by the backend
pub fn config(cfg: &mut web::ServiceConfig) {
    health::config_routes(cfg);
    notebooks::config(cfg);
    notes::config(cfg);
}

/// Parse an optional JSON request body.
///
/// Empty or unparseable bodies fall back to `T::default()`, so a bad note body
/// surfaces as a missing-field error and a bad filter body means "no filter".
/// Mistyped fields are cleared one by one by the request types themselves.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.is_empty() {
        return T::default();
    }

    serde_json::from_slice(body).unwrap_or_else(|e| {
        log::debug!("Ignoring unparseable request body: {}", e);
        T::default()
    })
}
