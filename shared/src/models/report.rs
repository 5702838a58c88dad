//! Weekly report models

use serde::{Deserialize, Serialize};

use crate::types::IrrigationAction;

/// Narrative codes classifying the trailing week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Narrative {
    pub observed_key: ObservedPattern,
    pub decisions_key: DecisionPattern,
    pub impact_key: ImpactPattern,
    pub linked_decision_action: IrrigationAction,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ObservedPattern {
    #[serde(rename = "report_observed_dry_trend")]
    DryTrend,
    #[serde(rename = "report_observed_heat_rise")]
    HeatRise,
    #[serde(rename = "report_observed_stable")]
    Stable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DecisionPattern {
    #[serde(rename = "report_decisions_proactive")]
    Proactive,
    #[serde(rename = "report_decisions_conservative")]
    Conservative,
    #[serde(rename = "report_decisions_balanced")]
    Balanced,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImpactPattern {
    #[serde(rename = "report_impact_positive")]
    Positive,
    #[serde(rename = "report_impact_risk")]
    Risk,
    #[serde(rename = "report_impact_watch")]
    Watch,
}

/// Aggregates over the last seven history points
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    pub avg_moisture: i32,
    pub avg_temp: f64,
    pub total_rain: f64,
    pub active_alerts: usize,
}
