#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the Hungarian county crime dashboard.
//!
//! Loads every input table once at startup and serves the single-page
//! dashboard plus a small JSON API. The server keeps no per-session
//! state: the page sends its current [`DashboardState`] with every event
//! and receives the new state and the redrawn figures in return.
//!
//! [`DashboardState`]: hu_crime_map_dashboard_models::DashboardState

pub mod config;
mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use hu_crime_map_dataset::{Dataset, DatasetError};
use thiserror::Error;

pub use config::ServerConfig;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// An input file was missing or unreadable.
    #[error("Failed to load dashboard data: {0}")]
    Dataset(#[from] DatasetError),

    /// The listener failed to bind or the server crashed.
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared application state.
pub struct AppState {
    /// All input tables, read-only after startup.
    pub dataset: Arc<Dataset>,
}

/// Registers the page and API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::json_error))
        .app_data(web::QueryConfig::default().error_handler(handlers::query_error))
        .route("/", web::get().to(handlers::index))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health))
                .route("/controls", web::get().to(handlers::controls))
                .route("/figures", web::get().to(handlers::figures))
                .route("/dispatch", web::post().to(handlers::dispatch)),
        );
}

/// Loads the dataset and starts the HTTP server.
///
/// The caller provides the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// * [`ServerError::Dataset`] if any input file is missing or unreadable
/// * [`ServerError::Io`] if the listener fails to bind or the server
///   stops with an error
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    log::info!("Loading data from {}...", config.data_dir.display());
    let dataset = Dataset::load(&config.data_paths())?;
    log::info!(
        "Loaded {} joined rows across {} counties",
        dataset.joined().rows().len(),
        dataset.joined().regions().len()
    );

    let state = web::Data::new(AppState {
        dataset: Arc::new(dataset),
    });

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await?;

    Ok(())
}
