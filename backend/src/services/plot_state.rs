//! Assembled per-plot analytics

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{
    Alert, CropType, DecisionLogEntry, DecisionSummary, Farm, ForecastDay, HistoryPoint,
    Narrative, Plot, PublicPlot, Recommendation, Season, SensorHistory, Simulation, Snapshot,
    SoilHealth, SystemIntelligence, TrendSet,
};

/// Block echoed at the top of every plot document
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GlobalContext {
    pub farm: Farm,
    pub plot: PublicPlot,
    pub crop: CropType,
    pub season: Season,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}

impl GlobalContext {
    pub fn new(farm: &Farm, plot: &Plot, season: Season, generated_at: DateTime<Utc>) -> Self {
        Self {
            farm: farm.clone(),
            plot: plot.to_public(),
            crop: plot.crop_type,
            season,
            generated_at,
        }
    }
}

/// Every derived view of one plot at one reference instant.
///
/// History slices borrow from the engine's cache.
#[derive(Debug)]
pub struct PlotState<'a> {
    pub plot_index: usize,
    pub plot: &'a Plot,
    pub context: GlobalContext,
    pub history: &'a SensorHistory,
    pub weekly_series: &'a [HistoryPoint],
    pub snapshot: Snapshot,
    pub forecast: Vec<ForecastDay>,
    pub trends: TrendSet,
    pub intelligence: SystemIntelligence,
    pub recommendation: Recommendation,
    pub decision_log: Vec<DecisionLogEntry>,
    pub decision_summary: DecisionSummary,
    pub soil_health: SoilHealth,
    pub simulation: Simulation,
    pub alerts: Vec<Alert>,
    pub narrative: Narrative,
    pub next_check_in_hours: u32,
}
