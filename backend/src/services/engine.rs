//! Analytics engine
//!
//! Owns the plot catalog, the season and one lazily synthesized history
//! per plot. Built once at startup and shared behind an `Arc`; every query
//! reads through it.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use shared::{
    HealthStatus, IrrigationAction, Plot, Recommendation, Reliability, Season, SensorHistory,
    SoilHealth, SystemIntelligence,
};

use crate::config::AnalyticsConfig;

use super::alerts::{build_alerts, AlertInputs};
use super::catalog::PlotCatalog;
use super::decision_log::{build_decision_log, summarize_decision_log};
use super::forecast::build_forecast;
use super::history::synthesize_history;
use super::intelligence::estimate_intelligence;
use super::narrative::{build_narrative, WEEKLY_WINDOW};
use super::plot_state::{GlobalContext, PlotState};
use super::recommendation::compute_recommendation;
use super::simulation::build_simulation;
use super::soil_health::compute_soil_health;
use super::trends::analyze_trends;

pub struct AnalyticsEngine {
    catalog: PlotCatalog,
    season: Season,
    anchor_date: NaiveDate,
    history_days: usize,
    forecast_days: usize,
    histories: Vec<OnceLock<SensorHistory>>,
}

impl AnalyticsEngine {
    /// Create an engine anchored at `anchor`.
    ///
    /// The anchor fixes the season and the last history date for the
    /// engine's lifetime.
    pub fn new(catalog: PlotCatalog, config: &AnalyticsConfig, anchor: DateTime<Utc>) -> Self {
        let histories = catalog.plots().iter().map(|_| OnceLock::new()).collect();

        Self {
            season: Season::from_month(anchor.month()),
            anchor_date: anchor.date_naive(),
            history_days: config.history_window_days as usize,
            forecast_days: config.forecast_days as usize,
            histories,
            catalog,
        }
    }

    pub fn catalog(&self) -> &PlotCatalog {
        &self.catalog
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// History for a plot, synthesized on first access.
    /// Unknown or missing ids resolve to the default plot.
    pub fn history(&self, plot_id: Option<&str>) -> &SensorHistory {
        let (plot_index, plot) = self.catalog.resolve(plot_id);
        self.cached_history(plot_index, plot)
    }

    /// `plot_index` must come from [`PlotCatalog::resolve`]
    fn cached_history(&self, plot_index: usize, plot: &Plot) -> &SensorHistory {
        self.histories[plot_index].get_or_init(|| {
            synthesize_history(
                plot,
                plot_index,
                self.season,
                self.history_days,
                self.anchor_date,
            )
        })
    }

    /// Run the full pipeline for one plot.
    ///
    /// Unknown or missing plot ids resolve to the default plot. `now` is
    /// the reference instant for the context timestamp, the forecast dates
    /// and the alert timestamps.
    pub fn build_plot_state(&self, plot_id: Option<&str>, now: DateTime<Utc>) -> PlotState<'_> {
        let (plot_index, plot) = self.catalog.resolve(plot_id);
        let history = self.cached_history(plot_index, plot);

        let snapshot = history.snapshot();
        let forecast = build_forecast(
            plot,
            plot_index,
            &snapshot,
            self.season,
            self.forecast_days,
            now.date_naive(),
        );
        let trends = analyze_trends(plot, history);
        let decision_log = build_decision_log(plot, history);
        let decision_summary = summarize_decision_log(&decision_log);
        let soil_health = compute_soil_health(plot, history, &decision_summary);
        let intelligence = estimate_intelligence(plot_index, history, &trends);
        let recommendation =
            compute_recommendation(plot, &snapshot, &forecast, &intelligence, &trends);
        let simulation = build_simulation(plot, &snapshot, &forecast, &soil_health);

        let alerts = build_alerts(
            &AlertInputs {
                plot,
                snapshot: &snapshot,
                forecast: &forecast,
                soil_health: &soil_health,
                intelligence: &intelligence,
                recommendation: &recommendation,
                trends: &trends,
            },
            now,
        );
        let narrative = build_narrative(
            &trends,
            &soil_health,
            &decision_summary,
            &recommendation,
            &alerts,
        );
        let next_check_in_hours =
            next_check_in_hours(&recommendation, &intelligence, &soil_health);

        PlotState {
            context: GlobalContext::new(self.catalog.farm(), plot, self.season, now),
            plot_index,
            plot,
            history,
            weekly_series: history.trailing(WEEKLY_WINDOW),
            snapshot,
            forecast,
            trends,
            intelligence,
            recommendation,
            decision_log,
            decision_summary,
            soil_health,
            simulation,
            alerts,
            narrative,
            next_check_in_hours,
        }
    }
}

/// Hours until the plot should be looked at again
fn next_check_in_hours(
    recommendation: &Recommendation,
    intelligence: &SystemIntelligence,
    soil_health: &SoilHealth,
) -> u32 {
    if recommendation.action == IrrigationAction::Irrigate {
        4
    } else if intelligence.sensor_reliability == Reliability::Critical {
        3
    } else if soil_health.status == HealthStatus::Degraded {
        5
    } else {
        8
    }
}
