//! Drift Monitoring Backend Server
//!
//! HTTP backend for the model drift monitoring dashboard. Serves drift KPIs,
//! confusion-matrix stats and explainability text per monitoring mode (1-4),
//! optionally flavored by business unit. Each request reads from the
//! metadata store when it is reachable and falls back to synthetic
//! placeholder data otherwise; a set of file-backed endpoints serves named
//! JSON dumps from the data directory.
//!
//! ```text
//! Router -> data source resolver -> (stored rows | synthetic rows) -> JSON
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod modes;
pub mod synthetic;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Dashboard API
    let api_routes = Router::new()
        .route("/api/businessUnits", get(handlers::business_units::list))
        .route("/api/:mode_tag/metrics", get(handlers::metrics::for_mode))
        .route(
            "/api/:mode_tag/metrics/:unit",
            get(handlers::metrics::for_mode_and_unit),
        )
        .route("/api/metrics", get(handlers::metrics::by_query))
        .route("/api/metrics/:mode", get(handlers::metrics::by_number))
        .route("/api/errors", get(handlers::errors::list))
        .route("/api/mode2/xai", get(handlers::xai::explain))
        .route("/api/mode2/xai/:unit", get(handlers::xai::explain_for_unit));

    // Static JSON dumps consumed by the dashboard shell
    let file_routes = Router::new()
        .route("/:mode_tag/data", get(handlers::files::mode_data))
        .route(
            "/mode-selection-data",
            get(handlers::files::mode_selection_data),
        )
        .route("/entries-table", get(handlers::files::entries_table))
        .route("/favicon.ico", get(handlers::files::favicon));

    Router::new()
        .route("/", get(handlers::index::root))
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .merge(file_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
