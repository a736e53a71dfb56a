use actix_cors::Cors;
use actix_web::{middleware::Logger, middleware::NormalizePath, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod notebooks;
#[cfg(test)]
mod test_support;

use config::Config;
use notebooks::NotebookStore;

pub struct AppState {
    pub store: Arc<NotebookStore>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Nevernote v{}", env!("CARGO_PKG_VERSION"));
    let config = Config::from_env();

    let store = if config.seed_example {
        log::info!(
            "Seeding example notebook '{}'",
            notebooks::seed::EXAMPLE_NOTEBOOK
        );
        NotebookStore::seeded()
    } else {
        NotebookStore::new()
    };
    let store = Arc::new(store);

    let (host, port) = config.bind_addr();
    log::info!("Starting Nevernote server on {}:{}", host, port);

    let workers = config.workers;
    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                config: config.clone(),
            }))
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::config)
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }
    let server = server.bind((host, port))?.run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
