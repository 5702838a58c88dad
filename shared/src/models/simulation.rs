//! What-if simulation models

use serde::{Deserialize, Serialize};

/// 24h projection of both candidate actions from the current state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Simulation {
    pub baseline: SimulationBaseline,
    pub scenarios: Vec<SimulationScenario>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationBaseline {
    pub soil_moisture: i32,
    pub soil_health_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationScenario {
    pub id: ScenarioId,
    /// Projected moisture (%), one decimal, within 10-92
    pub estimated_soil_moisture: f64,
    pub estimated_soil_health: i32,
    pub delta_moisture: f64,
    pub delta_health: i32,
    pub summary: ScenarioSummary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    IrrigateToday,
    #[serde(rename = "wait_24h")]
    Wait24h,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScenarioSummary {
    #[serde(rename = "sim_stabilize_moisture")]
    StabilizeMoisture,
    #[serde(rename = "sim_rain_could_cover")]
    RainCouldCover,
    #[serde(rename = "sim_dryness_risk")]
    DrynessRisk,
}
