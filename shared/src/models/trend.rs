//! Metric trend models

use serde::{Deserialize, Serialize};

use crate::types::MetricKey;

/// Short-window direction of one metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    /// Direction of `delta` against a symmetric dead band of `threshold`
    pub fn from_delta(delta: f64, threshold: f64) -> Self {
        if delta > threshold {
            TrendDirection::Increasing
        } else if delta < -threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

/// Note attached to a trend, keyed for display by the consumer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TrendNote {
    #[serde(rename = "trend_moisture_low")]
    MoistureLow,
    #[serde(rename = "trend_moisture_high")]
    MoistureHigh,
    #[serde(rename = "trend_moisture_normal")]
    MoistureNormal,
    #[serde(rename = "trend_temperature_spike")]
    TemperatureSpike,
    #[serde(rename = "trend_temperature_normal")]
    TemperatureNormal,
    #[serde(rename = "trend_rain_peak")]
    RainPeak,
    #[serde(rename = "trend_rain_normal")]
    RainNormal,
    #[serde(rename = "trend_battery_low")]
    BatteryLow,
    #[serde(rename = "trend_battery_ok")]
    BatteryOk,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trend {
    pub key: MetricKey,
    pub direction: TrendDirection,
    /// Recent-minus-previous average, one decimal
    pub magnitude: f64,
    pub abnormal: bool,
    pub note_key: TrendNote,
}

/// One trend per metric, addressable by key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendSet {
    pub soil_moisture: Trend,
    pub air_temperature: Trend,
    pub rain_mm: Trend,
    pub battery_level: Trend,
}

impl TrendSet {
    pub fn get(&self, key: MetricKey) -> &Trend {
        match key {
            MetricKey::SoilMoisture => &self.soil_moisture,
            MetricKey::AirTemperature => &self.air_temperature,
            MetricKey::RainMm => &self.rain_mm,
            MetricKey::BatteryLevel => &self.battery_level,
        }
    }

    /// Trends in metric order
    pub fn iter(&self) -> impl Iterator<Item = &Trend> {
        MetricKey::ALL.into_iter().map(move |key| self.get(key))
    }

    pub fn to_list(&self) -> Vec<Trend> {
        self.iter().cloned().collect()
    }

    pub fn abnormal_count(&self) -> usize {
        self.iter().filter(|trend| trend.abnormal).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(TrendDirection::from_delta(1.5, 1.4), TrendDirection::Increasing);
        assert_eq!(TrendDirection::from_delta(1.4, 1.4), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_delta(-1.4, 1.4), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_delta(-1.41, 1.4), TrendDirection::Decreasing);
    }

    #[test]
    fn test_note_codes() {
        assert_eq!(
            serde_json::to_string(&TrendNote::MoistureLow).unwrap(),
            "\"trend_moisture_low\""
        );
        assert_eq!(
            serde_json::to_string(&TrendNote::BatteryOk).unwrap(),
            "\"trend_battery_ok\""
        );
    }
}
