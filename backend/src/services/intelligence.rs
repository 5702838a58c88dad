//! System intelligence: how much the current readings can be trusted

use shared::{
    Reliability, SensorHistory, SensorStatus, SystemIntelligence, TrendConsistency, TrendSet,
};

use super::stats::round_half_up;

const CONSISTENCY_WINDOW: usize = 7;

/// Count sign flips between consecutive moisture deltas.
/// Flat steps neither count nor bridge a flip.
pub fn count_direction_changes(moistures: &[i32]) -> u32 {
    let signs: Vec<i32> = moistures
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).signum())
        .collect();

    signs
        .windows(2)
        .filter(|pair| pair[0] != 0 && pair[1] != 0 && pair[0] != pair[1])
        .count() as u32
}

pub fn estimate_intelligence(
    plot_index: usize,
    history: &SensorHistory,
    trends: &TrendSet,
) -> SystemIntelligence {
    let latest = history.latest();
    let abnormal_count = trends.abnormal_count() as f64;

    let moistures: Vec<i32> = history
        .trailing(CONSISTENCY_WINDOW)
        .iter()
        .map(|point| point.soil_moisture)
        .collect();
    let direction_changes = f64::from(count_direction_changes(&moistures));

    let consistency_score = round_half_up(
        (100.0 - direction_changes * 12.0 - abnormal_count * 15.0).clamp(28.0, 99.0),
    ) as i32;

    let data_confidence = round_half_up(
        (88.0
            - abnormal_count * 8.0
            - f64::from(100 - latest.battery_level) * 0.45
            - direction_changes * 3.0)
            .clamp(48.0, 98.0),
    ) as i32;

    let trend_status = |abnormal: bool| {
        if abnormal {
            Reliability::Watch
        } else {
            Reliability::Reliable
        }
    };

    SystemIntelligence {
        data_confidence,
        sensor_reliability: Reliability::from_confidence(data_confidence),
        trend_consistency: TrendConsistency::from_score(consistency_score),
        freshness_minutes: 14 + 6 * plot_index as u32,
        sensor_status: SensorStatus {
            soil_moisture: trend_status(trends.soil_moisture.abnormal),
            air_temperature: trend_status(trends.air_temperature.abnormal),
            rain_mm: trend_status(trends.rain_mm.abnormal),
            battery_level: Reliability::from_battery(latest.battery_level),
        },
    }
}
