//! IrriSmart - API server
//!
//! Serves the irrigation dashboard endpoints for every plot of the farm.

use std::sync::Arc;

use chrono::Utc;
use irrismart_backend::{create_app, services::PlotCatalog, AnalyticsEngine, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "irrismart_server=debug,irrismart_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting IrriSmart API server");
    tracing::info!("Environment: {}", config.environment);

    // The startup instant fixes the season and the history dates
    let engine = AnalyticsEngine::new(PlotCatalog::default(), &config.analytics, Utc::now());
    tracing::info!(
        season = %engine.season(),
        plots = engine.catalog().len(),
        history_window_days = config.analytics.history_window_days,
        "Analytics engine ready"
    );

    // Create application state
    let state = AppState {
        engine: Arc::new(engine),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = config.bind_address();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
