//! Read-only query documents served by the API
//!
//! Each query runs the plot pipeline once and projects the result into
//! the document shape the dashboard client expects.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{
    validation::{MAX_HISTORY_DAYS, MIN_HISTORY_DAYS},
    Alert, DecisionInputNote, DecisionLogEntry, DecisionSummary, Farm, ForecastDay,
    HistoryPoint, IrrigationAction, Narrative, PublicPlot, Recommendation, RecommendationReason,
    Season, Simulation, Snapshot, SoilHealth, SystemIntelligence, Trend, WeeklySummary,
};

use super::alerts::DASHBOARD_PATH;
use super::engine::AnalyticsEngine;
use super::narrative::weekly_summary;
use super::plot_state::GlobalContext;

/// Alerts included in the weekly report
const REPORT_ALERT_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct FarmPlotsDocument {
    pub farm: Farm,
    pub season: Season,
    #[serde(rename = "defaultPlotId")]
    pub default_plot_id: String,
    pub plots: Vec<PublicPlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardDocument {
    pub context: GlobalContext,
    pub farm: Farm,
    #[serde(rename = "selectedPlot")]
    pub selected_plot: PublicPlot,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
    pub snapshot: Snapshot,
    pub recommendation: Recommendation,
    pub forecast: Vec<ForecastDay>,
    #[serde(rename = "soilHealth")]
    pub soil_health: SoilHealth,
    pub intelligence: SystemIntelligence,
    #[serde(rename = "decisionLog")]
    pub decision_log: Vec<DecisionLogEntry>,
    #[serde(rename = "nextCheckInHours")]
    pub next_check_in_hours: u32,
}

/// Link from the sensor view back to the current recommendation
#[derive(Debug, Clone, Serialize)]
pub struct DecisionInput {
    pub action: IrrigationAction,
    pub reason: RecommendationReason,
    pub note_key: DecisionInputNote,
    pub dashboard_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorHistoryDocument {
    pub context: GlobalContext,
    pub days: usize,
    pub plot: PublicPlot,
    pub series: Vec<HistoryPoint>,
    pub trends: Vec<Trend>,
    pub intelligence: SystemIntelligence,
    pub decision_input: DecisionInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationDocument {
    pub context: GlobalContext,
    pub plot: PublicPlot,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub recommendation: Recommendation,
    #[serde(rename = "nextCheckInHours")]
    pub next_check_in_hours: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertsDocument {
    pub context: GlobalContext,
    pub plot: PublicPlot,
    pub intelligence: SystemIntelligence,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationDocument {
    pub context: GlobalContext,
    pub plot: PublicPlot,
    #[serde(flatten)]
    pub simulation: Simulation,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportsDocument {
    pub context: GlobalContext,
    pub intelligence: SystemIntelligence,
    pub weekly: WeeklySummary,
    pub decision_summary: DecisionSummary,
    pub narrative: Narrative,
    pub decision_log: Vec<DecisionLogEntry>,
    pub recent_series: Vec<HistoryPoint>,
    pub alerts: Vec<Alert>,
}

impl AnalyticsEngine {
    /// Farm, season and the public view of every plot
    pub fn farm_plots(&self) -> FarmPlotsDocument {
        let catalog = self.catalog();
        FarmPlotsDocument {
            farm: catalog.farm().clone(),
            season: self.season(),
            default_plot_id: catalog.default_plot().id.clone(),
            plots: catalog.public_plots(),
        }
    }

    pub fn dashboard(&self, plot_id: Option<&str>, now: DateTime<Utc>) -> DashboardDocument {
        let state = self.build_plot_state(plot_id, now);
        DashboardDocument {
            farm: state.context.farm.clone(),
            selected_plot: state.context.plot.clone(),
            generated_at: state.context.generated_at,
            context: state.context,
            snapshot: state.snapshot,
            recommendation: state.recommendation,
            forecast: state.forecast,
            soil_health: state.soil_health,
            intelligence: state.intelligence,
            decision_log: state.decision_log,
            next_check_in_hours: state.next_check_in_hours,
        }
    }

    /// The last `days` history points with trends. `days` is clamped to
    /// the supported range; callers normally coerce it first.
    pub fn sensor_history(
        &self,
        plot_id: Option<&str>,
        days: usize,
        now: DateTime<Utc>,
    ) -> SensorHistoryDocument {
        let days = days.clamp(MIN_HISTORY_DAYS, MAX_HISTORY_DAYS);
        let state = self.build_plot_state(plot_id, now);

        SensorHistoryDocument {
            days,
            plot: state.context.plot.clone(),
            series: state.history.trailing(days).to_vec(),
            trends: state.trends.to_list(),
            decision_input: DecisionInput {
                action: state.recommendation.action,
                reason: state.recommendation.reason,
                note_key: state.recommendation.decision_input_note,
                dashboard_path: DASHBOARD_PATH.to_string(),
            },
            intelligence: state.intelligence,
            context: state.context,
        }
    }

    pub fn recommendation(&self, plot_id: Option<&str>, now: DateTime<Utc>) -> RecommendationDocument {
        let state = self.build_plot_state(plot_id, now);
        RecommendationDocument {
            plot: state.context.plot.clone(),
            updated_at: state.context.generated_at,
            context: state.context,
            recommendation: state.recommendation,
            next_check_in_hours: state.next_check_in_hours,
        }
    }

    pub fn alerts(&self, plot_id: Option<&str>, now: DateTime<Utc>) -> AlertsDocument {
        let state = self.build_plot_state(plot_id, now);
        AlertsDocument {
            plot: state.context.plot.clone(),
            context: state.context,
            intelligence: state.intelligence,
            alerts: state.alerts,
        }
    }

    pub fn simulation(&self, plot_id: Option<&str>, now: DateTime<Utc>) -> SimulationDocument {
        let state = self.build_plot_state(plot_id, now);
        SimulationDocument {
            plot: state.context.plot.clone(),
            context: state.context,
            simulation: state.simulation,
        }
    }

    /// Weekly report: aggregates, narrative, decision replay and the
    /// three most recent alerts
    pub fn reports(&self, plot_id: Option<&str>, now: DateTime<Utc>) -> ReportsDocument {
        let state = self.build_plot_state(plot_id, now);
        let weekly = weekly_summary(state.weekly_series, state.alerts.len());
        let mut alerts = state.alerts;
        alerts.truncate(REPORT_ALERT_LIMIT);

        ReportsDocument {
            context: state.context,
            intelligence: state.intelligence,
            weekly,
            decision_summary: state.decision_summary,
            narrative: state.narrative,
            decision_log: state.decision_log,
            recent_series: state.weekly_series.to_vec(),
            alerts,
        }
    }
}
