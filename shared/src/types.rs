//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Calendar season used to bias synthesized weather
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Resolve the season from a calendar month (1-12).
    /// Dec-Feb winter, Mar-May spring, Jun-Aug summer, Sep-Nov autumn.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Temperature offset (°C) applied to synthesized air temperature
    pub fn temperature_shift(&self) -> f64 {
        match self {
            Season::Winter => -1.4,
            Season::Spring => 1.2,
            Season::Summer => 4.6,
            Season::Autumn => 0.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three-step qualitative level (irrigation need, heat stress, factor impact)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// The four sensor metrics recorded per plot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    SoilMoisture,
    AirTemperature,
    RainMm,
    BatteryLevel,
}

impl MetricKey {
    pub const ALL: [MetricKey; 4] = [
        MetricKey::SoilMoisture,
        MetricKey::AirTemperature,
        MetricKey::RainMm,
        MetricKey::BatteryLevel,
    ];
}

/// Irrigation action, used both for recommendations and the decision log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationAction {
    Irrigate,
    Wait,
}

/// Reliability grade shared by the overall sensor assessment and per-sensor status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    Reliable,
    Watch,
    Critical,
}

impl Reliability {
    /// Grade a 0-100 data confidence score: >=78 reliable, >=60 watch
    pub fn from_confidence(confidence: i32) -> Self {
        if confidence >= 78 {
            Reliability::Reliable
        } else if confidence >= 60 {
            Reliability::Watch
        } else {
            Reliability::Critical
        }
    }

    /// Grade a battery percentage: <68 critical, <76 watch
    pub fn from_battery(battery_level: i32) -> Self {
        if battery_level < 68 {
            Reliability::Critical
        } else if battery_level < 76 {
            Reliability::Watch
        } else {
            Reliability::Reliable
        }
    }
}
