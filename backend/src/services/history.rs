//! Synthesized sensor history
//!
//! Builds a day-by-day moisture/temperature/rain/battery series per plot.
//! The series is a pure function of the plot, its catalog index, the season,
//! the window length and the anchor date.

use chrono::{Duration, NaiveDate};
use shared::{HistoryPoint, Plot, Season, SensorHistory};

use super::stats::{round1, round_half_up, seeded_noise};

/// Shortest window the downstream components can work with
/// (the decision log replays the last eight days)
pub const MIN_HISTORY_WINDOW: usize = 8;

pub const MOISTURE_FLOOR: f64 = 15.0;
pub const MOISTURE_CEILING: f64 = 78.0;
pub const BATTERY_FLOOR: f64 = 58.0;
pub const BATTERY_CEILING: f64 = 98.0;

/// Synthesize `days` points ending on `anchor`, oldest first.
///
/// Windows shorter than [`MIN_HISTORY_WINDOW`] are widened to it.
pub fn synthesize_history(
    plot: &Plot,
    plot_index: usize,
    season: Season,
    days: usize,
    anchor: NaiveDate,
) -> SensorHistory {
    let days = days.max(MIN_HISTORY_WINDOW);
    let index = plot_index as f64;
    let crop_water = plot.crop_type.water_factor();
    let retention = plot.soil_type.retention_factor();
    let drainage = plot.soil_type.drainage_modifier();

    let mut moisture = f64::from(plot.thresholds.moisture_target) + 3.0 - index * 2.0;
    let mut battery = 92.0 - index * 5.0;

    // `offset` counts days back from the anchor; points must be produced
    // oldest first because moisture and battery carry over between days
    let mut next_point = |offset: usize| {
        let day_number = (days - offset) as f64;
        let seed = day_number + index * 37.0;

        let seasonal_swing = (seed / 2.8).sin() * 4.1;
        let temp_noise = (seeded_noise(seed + 11.0) - 0.5) * 1.8;
        let air_temperature = round1(
            25.0 + seasonal_swing + plot.temp_bias + temp_noise + season.temperature_shift(),
        );

        let rain_base = 2.4 + (seed / 2.3).cos() * 2.5;
        let rain_noise = seeded_noise(seed + 29.0) * 1.8;
        let rain_mm = round1((rain_base - rain_noise).max(0.0));

        let evapotranspiration = 2.0 + (air_temperature - 27.0).max(0.0) * 0.27;
        let rain_gain = rain_mm * 1.1 * retention;
        let drain = evapotranspiration * crop_water * drainage;
        let drift = (seeded_noise(seed + 51.0) - 0.5) * 1.2;

        moisture = (moisture + rain_gain - drain + drift).clamp(MOISTURE_FLOOR, MOISTURE_CEILING);
        battery = (battery - (0.36 + seeded_noise(seed + 77.0) * 0.3))
            .clamp(BATTERY_FLOOR, BATTERY_CEILING);

        HistoryPoint {
            date: anchor - Duration::days(offset as i64),
            soil_moisture: round_half_up(moisture) as i32,
            air_temperature,
            rain_mm,
            battery_level: round_half_up(battery) as i32,
        }
    };

    let earlier: Vec<HistoryPoint> = (1..days).rev().map(&mut next_point).collect();
    let latest = next_point(0);

    tracing::debug!(
        plot_id = %plot.id,
        crop = %plot.crop_type,
        soil = %plot.soil_type,
        days,
        season = %season,
        "Synthesized sensor history"
    );

    SensorHistory::with_latest(earlier, latest)
}
