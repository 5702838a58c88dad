//! System intelligence models: confidence in the sensor signals themselves

use serde::{Deserialize, Serialize};

use crate::types::Reliability;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemIntelligence {
    /// 0-100 (bounded to 48-98 by the estimator)
    pub data_confidence: i32,
    pub sensor_reliability: Reliability,
    pub trend_consistency: TrendConsistency,
    pub freshness_minutes: u32,
    pub sensor_status: SensorStatus,
}

/// Per-metric reliability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorStatus {
    pub soil_moisture: Reliability,
    pub air_temperature: Reliability,
    pub rain_mm: Reliability,
    pub battery_level: Reliability,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrendConsistency {
    Consistent,
    Mixed,
    Volatile,
}

impl TrendConsistency {
    /// >=74 consistent, >=55 mixed, otherwise volatile
    pub fn from_score(score: i32) -> Self {
        if score >= 74 {
            TrendConsistency::Consistent
        } else if score >= 55 {
            TrendConsistency::Mixed
        } else {
            TrendConsistency::Volatile
        }
    }
}
