//! Short-window trend analysis per metric
//!
//! Compares the average of the last three days against the three days
//! before them.

use shared::{
    HistoryPoint, MetricKey, Plot, SensorHistory, Trend, TrendDirection, TrendNote, TrendSet,
};

use super::stats::{average, round1};

const TREND_WINDOW: usize = 6;
const HALF_WINDOW: usize = 3;

/// Dead band per metric below which a change counts as stable
fn direction_threshold(key: MetricKey) -> f64 {
    match key {
        MetricKey::SoilMoisture => 1.4,
        MetricKey::AirTemperature => 0.8,
        MetricKey::RainMm => 0.6,
        MetricKey::BatteryLevel => 1.0,
    }
}

fn metric_value(point: &HistoryPoint, key: MetricKey) -> f64 {
    match key {
        MetricKey::SoilMoisture => f64::from(point.soil_moisture),
        MetricKey::AirTemperature => point.air_temperature,
        MetricKey::RainMm => point.rain_mm,
        MetricKey::BatteryLevel => f64::from(point.battery_level),
    }
}

/// Abnormal flag and note for the latest reading of a metric
fn classify_latest(plot: &Plot, latest: &HistoryPoint, key: MetricKey) -> (bool, TrendNote) {
    let thresholds = &plot.thresholds;
    match key {
        MetricKey::SoilMoisture => {
            if latest.soil_moisture < thresholds.moisture_min - 2 {
                (true, TrendNote::MoistureLow)
            } else if latest.soil_moisture > thresholds.moisture_target + 13 {
                (true, TrendNote::MoistureHigh)
            } else {
                (false, TrendNote::MoistureNormal)
            }
        }
        MetricKey::AirTemperature => {
            if latest.air_temperature >= f64::from(thresholds.heat_stress_temp + 3) {
                (true, TrendNote::TemperatureSpike)
            } else {
                (false, TrendNote::TemperatureNormal)
            }
        }
        MetricKey::RainMm => {
            if latest.rain_mm >= 9.0 {
                (true, TrendNote::RainPeak)
            } else {
                (false, TrendNote::RainNormal)
            }
        }
        MetricKey::BatteryLevel => {
            if latest.battery_level < 68 {
                (true, TrendNote::BatteryLow)
            } else {
                (false, TrendNote::BatteryOk)
            }
        }
    }
}

fn analyze_metric(plot: &Plot, history: &SensorHistory, key: MetricKey) -> Trend {
    let window = history.trailing(TREND_WINDOW);
    let previous = &window[..window.len().min(HALF_WINDOW)];
    let recent = &window[window.len().saturating_sub(HALF_WINDOW)..];

    let values = |points: &[HistoryPoint]| -> Vec<f64> {
        points.iter().map(|point| metric_value(point, key)).collect()
    };
    let delta = average(&values(recent)) - average(&values(previous));
    let (abnormal, note_key) = classify_latest(plot, history.latest(), key);

    Trend {
        key,
        direction: TrendDirection::from_delta(delta, direction_threshold(key)),
        magnitude: round1(delta),
        abnormal,
        note_key,
    }
}

/// Trend for each of the four metrics
pub fn analyze_trends(plot: &Plot, history: &SensorHistory) -> TrendSet {
    TrendSet {
        soil_moisture: analyze_metric(plot, history, MetricKey::SoilMoisture),
        air_temperature: analyze_metric(plot, history, MetricKey::AirTemperature),
        rain_mm: analyze_metric(plot, history, MetricKey::RainMm),
        battery_level: analyze_metric(plot, history, MetricKey::BatteryLevel),
    }
}
