//! HTTP handlers for the plot analytics endpoints
//!
//! Every handler reads the clock once and passes the instant down to the
//! engine.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::validation::{normalize_history_days, normalize_plot_id};

use crate::error::AppResult;
use crate::services::{
    AlertsDocument, DashboardDocument, FarmPlotsDocument, RecommendationDocument,
    ReportsDocument, SensorHistoryDocument, SimulationDocument,
};
use crate::AppState;

/// Query parameters shared by the plot endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PlotQuery {
    #[serde(rename = "plotId")]
    pub plot_id: Option<String>,
}

impl PlotQuery {
    fn plot_id(&self) -> Option<&str> {
        normalize_plot_id(self.plot_id.as_deref())
    }
}

/// Query parameters for the sensor history endpoint.
/// `days` stays a string so malformed values fall back instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct SensorHistoryQuery {
    #[serde(rename = "plotId")]
    pub plot_id: Option<String>,
    pub days: Option<String>,
}

/// List the farm and its plots
pub async fn list_plots(State(state): State<AppState>) -> AppResult<Json<FarmPlotsDocument>> {
    Ok(Json(state.engine.farm_plots()))
}

/// Dashboard overview for one plot
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<PlotQuery>,
) -> AppResult<Json<DashboardDocument>> {
    Ok(Json(state.engine.dashboard(query.plot_id(), Utc::now())))
}

/// Recent sensor series with trend analysis
pub async fn get_sensor_history(
    State(state): State<AppState>,
    Query(query): Query<SensorHistoryQuery>,
) -> AppResult<Json<SensorHistoryDocument>> {
    let days = normalize_history_days(query.days.as_deref());
    let plot_id = normalize_plot_id(query.plot_id.as_deref());

    tracing::debug!(plot_id = ?plot_id, days, "Sensor history requested");

    Ok(Json(state.engine.sensor_history(plot_id, days, Utc::now())))
}

/// Current irrigation recommendation
pub async fn get_recommendation(
    State(state): State<AppState>,
    Query(query): Query<PlotQuery>,
) -> AppResult<Json<RecommendationDocument>> {
    Ok(Json(state.engine.recommendation(query.plot_id(), Utc::now())))
}

/// Active alerts
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<PlotQuery>,
) -> AppResult<Json<AlertsDocument>> {
    Ok(Json(state.engine.alerts(query.plot_id(), Utc::now())))
}

/// Irrigate-today versus wait-24h comparison
pub async fn get_simulation(
    State(state): State<AppState>,
    Query(query): Query<PlotQuery>,
) -> AppResult<Json<SimulationDocument>> {
    Ok(Json(state.engine.simulation(query.plot_id(), Utc::now())))
}

/// Weekly report
pub async fn get_reports(
    State(state): State<AppState>,
    Query(query): Query<PlotQuery>,
) -> AppResult<Json<ReportsDocument>> {
    Ok(Json(state.engine.reports(query.plot_id(), Utc::now())))
}
