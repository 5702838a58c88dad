//! Irrigation recommendation
//!
//! Rules are evaluated in priority order and the first match wins:
//!
//! 1. severe dryness: moisture at least 4 points under the minimum and
//!    tomorrow's rain chance under 55%
//! 2. moderate deficit: at least 6 points under target, rain under 42%
//! 3. rain incoming: rain chance of 62% or more and moisture near minimum
//! 4. heat pressure: three or more stressed forecast days and a deficit
//! 5. otherwise the moisture is fine and we wait

use shared::{
    DecisionInputNote, FactorKey, FactorUnit, ForecastDay, IrrigationAction, Level, Plot,
    Recommendation, RecommendationFactor, RecommendationReason, Snapshot, SystemIntelligence,
    TrendConsistency, TrendDirection, TrendSet,
};

use super::stats::{round2, round_half_up};

/// Rain probability assumed when no forecast day is available
const DEFAULT_RAIN_PROBABILITY: i32 = 30;

pub const MIN_CONFIDENCE: f64 = 0.52;
pub const MAX_CONFIDENCE: f64 = 0.95;
pub const MAX_DURATION_MINUTES: f64 = 55.0;

pub fn compute_recommendation(
    plot: &Plot,
    snapshot: &Snapshot,
    forecast: &[ForecastDay],
    intelligence: &SystemIntelligence,
    trends: &TrendSet,
) -> Recommendation {
    let thresholds = &plot.thresholds;
    let base_minutes = f64::from(plot.irrigation_profile.base_minutes);

    let moisture_deficit = thresholds.moisture_target - snapshot.soil_moisture;
    let critical_gap = thresholds.moisture_min - snapshot.soil_moisture;
    let rain_probability = forecast
        .first()
        .map(|day| day.rain_probability)
        .unwrap_or(DEFAULT_RAIN_PROBABILITY);
    let heat_days = forecast
        .iter()
        .filter(|day| day.temp_stress != Level::Low)
        .count() as i32;

    let (action, reason, duration) = if critical_gap >= 4 && rain_probability < 55 {
        (
            IrrigationAction::Irrigate,
            RecommendationReason::SevereDryness,
            base_minutes + f64::from(critical_gap) * 3.2 + f64::from(heat_days) * 1.8,
        )
    } else if moisture_deficit >= 6 && rain_probability < 42 {
        (
            IrrigationAction::Irrigate,
            RecommendationReason::ModerateDeficit,
            base_minutes - 5.0 + f64::from(moisture_deficit) * 2.1 + f64::from(heat_days) * 1.4,
        )
    } else if rain_probability >= 62 && snapshot.soil_moisture >= thresholds.moisture_min - 1 {
        (IrrigationAction::Wait, RecommendationReason::RainIncoming, 0.0)
    } else if heat_days >= 3 && moisture_deficit >= 2 {
        (
            IrrigationAction::Irrigate,
            RecommendationReason::HeatPressure,
            base_minutes - 8.0 + f64::from(heat_days) * 2.3,
        )
    } else {
        (IrrigationAction::Wait, RecommendationReason::MoistureOptimal, 0.0)
    };

    let confidence = round2(
        (reason.base_confidence() * (f64::from(intelligence.data_confidence) / 100.0 + 0.08))
            .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
    );

    let moisture_impact = if snapshot.soil_moisture < thresholds.moisture_min {
        Level::High
    } else if moisture_deficit >= 3 {
        Level::Medium
    } else {
        Level::Low
    };
    let rain_impact = if rain_probability >= 62 {
        Level::High
    } else if rain_probability >= 38 {
        Level::Medium
    } else {
        Level::Low
    };
    let heat_impact = if heat_days >= 3 {
        Level::High
    } else if heat_days >= 2 {
        Level::Medium
    } else {
        Level::Low
    };

    let factors = vec![
        RecommendationFactor {
            key: FactorKey::MoistureLevel,
            impact: moisture_impact,
            value: snapshot.soil_moisture,
            unit: FactorUnit::Percent,
        },
        RecommendationFactor {
            key: FactorKey::RainProbability,
            impact: rain_impact,
            value: rain_probability,
            unit: FactorUnit::Percent,
        },
        RecommendationFactor {
            key: FactorKey::HeatForecast,
            impact: heat_impact,
            value: heat_days,
            unit: FactorUnit::Days,
        },
    ];

    let decision_input_note = if trends.soil_moisture.direction == TrendDirection::Decreasing {
        DecisionInputNote::MoistureDrop
    } else if intelligence.trend_consistency == TrendConsistency::Volatile {
        DecisionInputNote::Inconsistent
    } else {
        DecisionInputNote::StableSignal
    };

    Recommendation {
        action,
        duration: round_half_up(duration.clamp(0.0, MAX_DURATION_MINUTES)) as i32,
        reason,
        confidence,
        factors,
        decision_input_note,
    }
}
