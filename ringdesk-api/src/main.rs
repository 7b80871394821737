use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;

use ringdesk_api::config::ApiConfig;
use ringdesk_api::handlers;
use ringdesk_api::helpers;
use ringdesk_api::jobs::import_manager::ImportManager;

/// Ring list import and call tracking API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    helpers::logging::init_tracing(args.log_file_path.as_deref(), "ringdesk-api.log");

    // Load config
    let (config, config_path) = ApiConfig::load().map_err(std::io::Error::other)?;
    tracing::info!("Using config at {}", config_path.display());

    // Initialize database
    let db = helpers::database::initialize_database(&config).map_err(std::io::Error::other)?;

    let import_manager = Arc::new(ImportManager::new(
        db.async_connection.clone(),
        config.insert_chunk_size(),
    ));

    let (host, port) = config.server_address();
    tracing::info!("Server will listen on {}:{}", host, port);

    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type"])
                .expose_headers(vec!["Content-Disposition"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type"])
                .expose_headers(vec!["Content-Disposition"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            // Imported CSV files arrive inside the JSON body
            .app_data(web::JsonConfig::default().limit(64 * 1024 * 1024))
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(import_manager.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((host.as_str(), port))?
    .run();

    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }

        tracing::info!("Ctrl+C received, shutting down...");
        handle.stop(true).await;
    });

    server.await
}
