//! Plot analytics pipeline tests
//!
//! Property-based and unit tests for:
//! - History bounds and window length
//! - Decision log replay length
//! - Soil health score and status bands
//! - Recommendation confidence and duration ranges
//! - Alert list invariants
//! - Plot fallback and query idempotence

use chrono::{DateTime, Duration, TimeZone, Utc};
use irrismart_backend::config::AnalyticsConfig;
use irrismart_backend::services::{AnalyticsEngine, PlotCatalog};
use proptest::prelude::*;
use shared::{AlertKind, AlertSeverity, HealthStatus};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Catalog plot ids plus unknown and missing ids
fn plot_id_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("plot_olive_north".to_string())),
        Just(Some("plot_citrus_central".to_string())),
        Just(Some("plot_wheat_south".to_string())),
        "[a-z_]{3,20}".prop_map(Some),
        Just(None),
    ]
}

/// Anchor instants spread over several years so every season is hit
fn anchor_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..(4 * 365 * 24)).prop_map(|hours| {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(hours)
    })
}

/// Valid history windows
fn history_window_strategy() -> impl Strategy<Value = u32> {
    14u32..=60
}

fn engine_at(anchor: DateTime<Utc>, history_window_days: u32) -> AnalyticsEngine {
    let config = AnalyticsConfig {
        history_window_days,
        forecast_days: 5,
    };
    AnalyticsEngine::new(PlotCatalog::default(), &config, anchor)
}

// ============================================================================
// Pipeline Invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_history_window_and_bounds(
        anchor in anchor_strategy(),
        window in history_window_strategy(),
        plot_index in 0usize..3,
    ) {
        let engine = engine_at(anchor, window);
        let plot_id = engine.catalog().plots()[plot_index].id.clone();
        let history = engine.history(Some(plot_id.as_str()));

        prop_assert_eq!(history.len(), window as usize);
        prop_assert_eq!(history.latest().date, anchor.date_naive());
        for point in history.points() {
            prop_assert!((15..=78).contains(&point.soil_moisture));
            prop_assert!((58..=98).contains(&point.battery_level));
            prop_assert!(point.rain_mm >= 0.0);
        }
    }

    #[test]
    fn prop_plot_state_invariants(
        anchor in anchor_strategy(),
        plot_id in plot_id_strategy(),
    ) {
        let engine = engine_at(anchor, 21);
        let state = engine.build_plot_state(plot_id.as_deref(), anchor);

        // Decision log: min(8, history) - 1 entries
        prop_assert_eq!(state.decision_log.len(), 7);

        // Soil health score and status band
        let score = state.soil_health.score;
        prop_assert!((0..=100).contains(&score));
        let expected = if score >= 74 {
            HealthStatus::Healthy
        } else if score >= 50 {
            HealthStatus::Watch
        } else {
            HealthStatus::Degraded
        };
        prop_assert_eq!(state.soil_health.status, expected);
        prop_assert!(!state.soil_health.explanation.is_empty());

        // Recommendation ranges
        let recommendation = &state.recommendation;
        prop_assert!(recommendation.confidence >= 0.52 && recommendation.confidence <= 0.95);
        prop_assert!((0..=55).contains(&recommendation.duration));
        prop_assert_eq!(recommendation.factors.len(), 3);

        // Alerts never empty; all_stable only ever alone
        prop_assert!(!state.alerts.is_empty());
        let stable = state
            .alerts
            .iter()
            .filter(|alert| alert.title_key == AlertKind::AllStable)
            .count();
        if stable > 0 {
            prop_assert_eq!(state.alerts.len(), 1);
            prop_assert_eq!(state.alerts[0].severity, AlertSeverity::Info);
        }

        // Alert timestamps step back from the reference instant
        for (index, alert) in state.alerts.iter().enumerate() {
            prop_assert_eq!(alert.created_at, anchor - Duration::hours(6 * (index as i64 + 1)));
        }

        // Intelligence ranges
        prop_assert!((48..=98).contains(&state.intelligence.data_confidence));
    }

    #[test]
    fn prop_unknown_plot_matches_default(
        anchor in anchor_strategy(),
        unknown in "zz_[a-z]{3,12}",
    ) {
        let engine = engine_at(anchor, 21);
        let missing = engine.dashboard(None, anchor);
        let unknown = engine.dashboard(Some(unknown.as_str()), anchor);

        prop_assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            serde_json::to_value(&unknown).unwrap()
        );
    }

    #[test]
    fn prop_queries_are_idempotent(
        anchor in anchor_strategy(),
        plot_id in plot_id_strategy(),
    ) {
        let engine = engine_at(anchor, 21);
        let now = anchor + Duration::minutes(15);

        let first = serde_json::to_value(engine.reports(plot_id.as_deref(), now)).unwrap();
        let second = serde_json::to_value(engine.reports(plot_id.as_deref(), now)).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// Query Documents
// ============================================================================

fn summer_engine() -> AnalyticsEngine {
    engine_at(Utc.with_ymd_and_hms(2026, 7, 15, 8, 0, 0).unwrap(), 21)
}

#[test]
fn test_history_derived_fields_are_stable_across_instants() {
    let engine = summer_engine();
    let morning = Utc.with_ymd_and_hms(2026, 7, 15, 9, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2026, 7, 15, 21, 0, 0).unwrap();

    let first = engine.sensor_history(Some("plot_citrus_central"), 14, morning);
    let second = engine.sensor_history(Some("plot_citrus_central"), 14, evening);

    assert_eq!(first.series, second.series);
    assert_eq!(first.trends, second.trends);
    assert_eq!(first.intelligence, second.intelligence);
    assert_ne!(first.context.generated_at, second.context.generated_at);
}

#[test]
fn test_sensor_history_caps_days() {
    let engine = summer_engine();
    let now = Utc::now();
    let document = engine.sensor_history(None, 30, now);
    assert_eq!(document.days, 14);
    assert_eq!(document.series.len(), 14);

    let document = engine.sensor_history(None, 0, now);
    assert_eq!(document.days, 1);
    assert_eq!(document.series.len(), 1);
}

#[test]
fn test_every_plot_serves_every_document() {
    let engine = summer_engine();
    let now = Utc::now();

    for plot in engine.catalog().plots() {
        let id = Some(plot.id.as_str());
        assert_eq!(engine.dashboard(id, now).selected_plot.id, plot.id);
        assert_eq!(engine.recommendation(id, now).plot.id, plot.id);
        assert!(engine.alerts(id, now).alerts.iter().all(|alert| alert.plot_id == plot.id));
        assert_eq!(engine.simulation(id, now).simulation.scenarios.len(), 2);

        let reports = engine.reports(id, now);
        assert!(reports.alerts.len() <= 3);
        assert_eq!(reports.recent_series.len(), 7);
        assert_eq!(
            reports.decision_summary.irrigate_count + reports.decision_summary.wait_count,
            7
        );
    }
}

#[test]
fn test_farm_plots_lists_catalog() {
    let document = summer_engine().farm_plots();
    let ids: Vec<&str> = document.plots.iter().map(|plot| plot.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["plot_olive_north", "plot_citrus_central", "plot_wheat_south"]
    );
    assert_eq!(document.default_plot_id, "plot_olive_north");
}
