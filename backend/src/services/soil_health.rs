//! Soil health scoring
//!
//! Four sub-scores over the trailing week, blended into a 0-100 score.
//! Each component is clamped to its own floor and ceiling and rounded
//! before weighting.

use shared::{
    DecisionSummary, HealthExplanation, HealthStatus, Plot, SensorHistory, SoilHealth,
    SoilHealthComponents,
};

use super::stats::{average, round_half_up, standard_deviation};

const SCORING_WINDOW: usize = 7;

/// Sub-scores below this value are reported in the explanation
const EXPLANATION_THRESHOLD: i32 = 62;

const STABILITY_WEIGHT: f64 = 0.30;
const BALANCE_WEIGHT: f64 = 0.24;
const TEMPERATURE_WEIGHT: f64 = 0.20;
const CONSISTENCY_WEIGHT: f64 = 0.26;

fn clamped_score(value: f64, floor: f64, ceiling: f64) -> i32 {
    round_half_up(value.clamp(floor, ceiling)) as i32
}

pub fn compute_soil_health(
    plot: &Plot,
    history: &SensorHistory,
    decisions: &DecisionSummary,
) -> SoilHealth {
    let thresholds = &plot.thresholds;
    let recent = history.trailing(SCORING_WINDOW);
    let window = recent.len() as f64;

    let moistures: Vec<f64> = recent
        .iter()
        .map(|point| f64::from(point.soil_moisture))
        .collect();
    let moisture_average = average(&moistures);
    let moisture_spread = standard_deviation(&moistures);

    let moisture_stability = clamped_score(
        100.0
            - (moisture_average - f64::from(thresholds.moisture_target)).abs() * 4.4
            - moisture_spread * 6.8,
        15.0,
        99.0,
    );

    let out_of_band_days = recent
        .iter()
        .filter(|point| {
            point.soil_moisture < thresholds.moisture_min
                || point.soil_moisture > thresholds.moisture_target + 11
        })
        .count() as f64;
    let irrigation_balance =
        clamped_score(100.0 - (out_of_band_days / window) * 82.0, 12.0, 99.0);

    let heat_days = recent
        .iter()
        .filter(|point| point.air_temperature >= f64::from(thresholds.heat_stress_temp))
        .count() as f64;
    let temperature_stress = clamped_score(100.0 - (heat_days / window) * 74.0, 15.0, 99.0);

    let decision_consistency = clamped_score(
        35.0 + f64::from(decisions.positive_rate) * 0.62,
        22.0,
        98.0,
    );

    let score = round_half_up(
        f64::from(moisture_stability) * STABILITY_WEIGHT
            + f64::from(irrigation_balance) * BALANCE_WEIGHT
            + f64::from(temperature_stress) * TEMPERATURE_WEIGHT
            + f64::from(decision_consistency) * CONSISTENCY_WEIGHT,
    ) as i32;

    let mut explanation: Vec<HealthExplanation> = [
        (moisture_stability, HealthExplanation::MoistureVariabilityHigh),
        (irrigation_balance, HealthExplanation::IrrigationBalanceOff),
        (temperature_stress, HealthExplanation::TemperatureStressFrequent),
        (decision_consistency, HealthExplanation::DecisionTimingInconsistent),
    ]
    .into_iter()
    .filter(|(component, _)| *component < EXPLANATION_THRESHOLD)
    .map(|(_, code)| code)
    .collect();

    if explanation.is_empty() {
        explanation.push(HealthExplanation::SoilHealthStable);
    }

    SoilHealth {
        score,
        status: HealthStatus::from_score(score),
        explanation,
        components: SoilHealthComponents {
            moisture_stability,
            irrigation_balance,
            temperature_stress,
            decision_consistency,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::PlotCatalog;
    use chrono::NaiveDate;
    use shared::HistoryPoint;

    fn history(moistures: &[i32], temperature: f64) -> SensorHistory {
        let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let mut points: Vec<HistoryPoint> = moistures
            .iter()
            .enumerate()
            .map(|(i, moisture)| HistoryPoint {
                date: start + chrono::Duration::days(i as i64),
                soil_moisture: *moisture,
                air_temperature: temperature,
                rain_mm: 0.0,
                battery_level: 90,
            })
            .collect();
        let latest = points.pop().unwrap();
        SensorHistory::with_latest(points, latest)
    }

    fn summary(positive_rate: i32) -> DecisionSummary {
        DecisionSummary {
            irrigate_count: 3,
            wait_count: 4,
            positive_rate,
        }
    }

    #[test]
    fn test_on_target_week_is_healthy() {
        let catalog = PlotCatalog::default();
        // olive target 44, heat 32
        let health = compute_soil_health(catalog.default_plot(), &history(&[44; 10], 25.0), &summary(100));

        assert_eq!(health.components.moisture_stability, 99);
        assert_eq!(health.components.irrigation_balance, 99);
        assert_eq!(health.components.temperature_stress, 99);
        // 35 + 62 = 97
        assert_eq!(health.components.decision_consistency, 97);
        // 29.7 + 23.76 + 19.8 + 25.22 = 98.48
        assert_eq!(health.score, 98);
        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.explanation, vec![HealthExplanation::SoilHealthStable]);
    }

    #[test]
    fn test_dry_hot_week_is_degraded() {
        let catalog = PlotCatalog::default();
        let health = compute_soil_health(catalog.default_plot(), &history(&[20; 7], 36.0), &summary(0));

        // 100 - 24 * 4.4 < 15
        assert_eq!(health.components.moisture_stability, 15);
        // 100 - 82 = 18
        assert_eq!(health.components.irrigation_balance, 18);
        // 100 - 74 = 26
        assert_eq!(health.components.temperature_stress, 26);
        assert_eq!(health.components.decision_consistency, 35);
        // 4.5 + 4.32 + 5.2 + 9.1 = 23.12
        assert_eq!(health.score, 23);
        assert_eq!(health.status, HealthStatus::Degraded);
        assert_eq!(
            health.explanation,
            vec![
                HealthExplanation::MoistureVariabilityHigh,
                HealthExplanation::IrrigationBalanceOff,
                HealthExplanation::TemperatureStressFrequent,
                HealthExplanation::DecisionTimingInconsistent,
            ]
        );
    }

    #[test]
    fn test_uses_actual_window_length() {
        let catalog = PlotCatalog::default();
        // Only the trailing seven points count: two dry days out of seven
        let health = compute_soil_health(
            catalog.default_plot(),
            &history(&[20, 20, 20, 44, 44, 44, 44, 44, 20, 20], 25.0),
            &summary(50),
        );
        // 100 - 2/7 * 82 = 76.57
        assert_eq!(health.components.irrigation_balance, 77);
    }
}
