//! Soil health models

use serde::{Deserialize, Serialize};

/// Composite 0-100 index of recent agronomic stability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilHealth {
    pub score: i32,
    pub status: HealthStatus,
    /// Never empty; a single `soil_health_stable` when no component is weak
    pub explanation: Vec<HealthExplanation>,
    pub components: SoilHealthComponents,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilHealthComponents {
    pub moisture_stability: i32,
    pub irrigation_balance: i32,
    pub temperature_stress: i32,
    pub decision_consistency: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Watch,
    Degraded,
}

impl HealthStatus {
    /// >=74 healthy, >=50 watch, otherwise degraded
    pub fn from_score(score: i32) -> Self {
        if score >= 74 {
            HealthStatus::Healthy
        } else if score >= 50 {
            HealthStatus::Watch
        } else {
            HealthStatus::Degraded
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthExplanation {
    MoistureVariabilityHigh,
    IrrigationBalanceOff,
    TemperatureStressFrequent,
    DecisionTimingInconsistent,
    SoilHealthStable,
}
