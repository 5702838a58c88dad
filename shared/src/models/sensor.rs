//! Sensor history, snapshot and forecast models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Level;

/// One day of station readings for a plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    /// Volumetric soil moisture (%), within 15-78
    pub soil_moisture: i32,
    /// Air temperature (°C), one decimal
    pub air_temperature: f64,
    /// Daily rainfall (mm), one decimal
    pub rain_mm: f64,
    /// Station battery (%), within 58-98
    pub battery_level: i32,
}

/// Day-by-day readings for one plot, oldest first; never empty
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct SensorHistory {
    points: Vec<HistoryPoint>,
}

impl SensorHistory {
    /// Append the most recent reading to the earlier ones (oldest first)
    pub fn with_latest(mut earlier: Vec<HistoryPoint>, latest: HistoryPoint) -> Self {
        earlier.push(latest);
        Self { points: earlier }
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent reading
    pub fn latest(&self) -> &HistoryPoint {
        &self.points[self.points.len() - 1]
    }

    /// The last `count` readings (all of them when fewer exist)
    pub fn trailing(&self, count: usize) -> &[HistoryPoint] {
        &self.points[self.points.len().saturating_sub(count)..]
    }

    /// Current sensor state of the plot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self.latest())
    }
}

/// Current sensor state of a plot (the latest history point)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub soil_moisture: i32,
    pub air_temperature: f64,
    pub rain_mm_next_24h: f64,
    pub battery_level: i32,
}

impl From<&HistoryPoint> for Snapshot {
    fn from(point: &HistoryPoint) -> Self {
        Self {
            soil_moisture: point.soil_moisture,
            air_temperature: point.air_temperature,
            rain_mm_next_24h: point.rain_mm,
            battery_level: point.battery_level,
        }
    }
}

/// Projected conditions for one future day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub irrigation_need: Level,
    /// Chance of rain (%), within 8-90
    pub rain_probability: i32,
    pub temp_stress: Level,
}
