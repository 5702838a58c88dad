//! Decision log models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::IrrigationAction;

/// A replayed irrigate/wait decision with its attributed outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionLogEntry {
    pub id: String,
    pub date: NaiveDate,
    pub action: IrrigationAction,
    /// Irrigation minutes, 0 when waiting
    pub duration: i32,
    pub reason: DecisionReason,
    pub outcome: DecisionOutcome,
    /// Moisture change to the next day, one decimal
    pub moisture_change: f64,
    pub soil_health_delta: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DecisionReason {
    #[serde(rename = "decision_recover_moisture")]
    RecoverMoisture,
    #[serde(rename = "decision_heat_preventive")]
    HeatPreventive,
    #[serde(rename = "decision_hold_for_rain")]
    HoldForRain,
    #[serde(rename = "decision_monitor")]
    Monitor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DecisionOutcome {
    Positive,
    Neutral,
    Negative,
}

impl DecisionOutcome {
    /// Soil health points credited to a decision with this outcome
    pub fn soil_health_delta(&self) -> i32 {
        match self {
            DecisionOutcome::Positive => 2,
            DecisionOutcome::Neutral => 0,
            DecisionOutcome::Negative => -3,
        }
    }
}

/// Aggregate counts over a decision log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DecisionSummary {
    pub irrigate_count: usize,
    pub wait_count: usize,
    /// Share of positive outcomes (%), rounded
    pub positive_rate: i32,
}
