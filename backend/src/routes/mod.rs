//! Route definitions for the IrriSmart API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/plots", get(handlers::list_plots))
        .route("/dashboard", get(handlers::get_dashboard))
        .nest("/sensors", sensor_routes())
        .route("/recommendations", get(handlers::get_recommendation))
        .route("/alerts", get(handlers::get_alerts))
        .route("/simulations", get(handlers::get_simulation))
        .route("/reports", get(handlers::get_reports))
}

/// Sensor routes
fn sensor_routes() -> Router<AppState> {
    Router::new().route("/history", get(handlers::get_sensor_history))
}
