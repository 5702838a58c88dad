//! HTTP API tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use irrismart_backend::{create_app, services::PlotCatalog, AnalyticsEngine, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

// ============================================================================
// Helpers
// ============================================================================

fn app() -> Router {
    let config = Config::default();
    let anchor = Utc.with_ymd_and_hms(2026, 10, 16, 7, 0, 0).unwrap();
    let engine = AnalyticsEngine::new(PlotCatalog::default(), &config.analytics, anchor);

    create_app(AppState {
        engine: Arc::new(engine),
        config: Arc::new(config),
    })
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// ============================================================================
// Endpoints
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, json) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "irrismart-api");
    assert!(json["now"].is_string());
    assert_eq!(json["environment"], "development");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_root_banner() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"IrriSmart API running");
}

#[tokio::test]
async fn test_plots() {
    let (status, json) = get("/api/plots").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["season"], "autumn");
    assert_eq!(json["defaultPlotId"], "plot_olive_north");
    assert_eq!(json["plots"].as_array().unwrap().len(), 3);
    assert!(json["plots"][0].get("station_name").is_none());
}

#[tokio::test]
async fn test_dashboard_selects_plot() {
    let (status, json) = get("/api/dashboard?plotId=plot_wheat_south").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["selectedPlot"]["id"], "plot_wheat_south");
    assert_eq!(json["context"]["crop"], "wheat");
    assert_eq!(json["forecast"].as_array().unwrap().len(), 5);
    assert_eq!(json["decisionLog"].as_array().unwrap().len(), 7);
    assert!(json["nextCheckInHours"].is_u64());
}

#[tokio::test]
async fn test_dashboard_unknown_plot_falls_back() {
    let (status, json) = get("/api/dashboard?plotId=plot_missing").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["selectedPlot"]["id"], "plot_olive_north");
}

#[tokio::test]
async fn test_sensor_history_days_coercion() {
    let cases = [
        ("", 14),
        ("&days=30", 14),
        ("&days=5", 5),
        ("&days=abc", 14),
        ("&days=", 1),
        ("&days=-3", 1),
        ("&days=7.9", 7),
    ];

    for (suffix, expected) in cases {
        let uri = format!("/api/sensors/history?plotId=plot_citrus_central{}", suffix);
        let (status, json) = get(&uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json["days"], expected, "{uri}");
        assert_eq!(json["series"].as_array().unwrap().len(), expected, "{uri}");
    }
}

#[tokio::test]
async fn test_sensor_history_decision_input() {
    let (_, json) = get("/api/sensors/history").await;
    assert_eq!(json["trends"].as_array().unwrap().len(), 4);
    assert_eq!(json["decision_input"]["dashboard_path"], "/");
    assert!(json["decision_input"]["note_key"]
        .as_str()
        .unwrap()
        .starts_with("decision_input_"));
}

#[tokio::test]
async fn test_recommendation_alerts_simulation_reports() {
    let (status, json) = get("/api/recommendations?plotId=plot_olive_north").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["updatedAt"].is_string());
    assert!(json["recommendation"]["factors"].is_array());

    let (status, json) = get("/api/alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!json["alerts"].as_array().unwrap().is_empty());
    assert!(json["alerts"][0]["titleKey"].is_string());
    assert!(json["alerts"][0]["createdAt"].is_string());

    let (status, json) = get("/api/simulations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["scenarios"][1]["id"], "wait_24h");

    let (status, json) = get("/api/reports").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["alerts"].as_array().unwrap().len() <= 3);
    assert!(json["weekly"]["avg_moisture"].is_i64());
    assert!(json["narrative"]["observed_key"]
        .as_str()
        .unwrap()
        .starts_with("report_observed_"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, json) = get("/api/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}
