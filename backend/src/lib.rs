//! IrriSmart - irrigation decision support API
//!
//! Serves per-plot sensor history, forecasts, soil health, recommendations,
//! what-if simulations, alerts and weekly reports for a small farm. All
//! analytics are derived from deterministic synthetic sensor data.

use std::sync::Arc;

use axum::{http::Uri, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::AnalyticsEngine;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalyticsEngine>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", routes::api_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "IrriSmart API running"
}

/// Fallback for unknown routes
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {}", uri.path()))
}
