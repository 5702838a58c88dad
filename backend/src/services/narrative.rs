//! Weekly report narrative and aggregates

use shared::{
    Alert, AlertSeverity, DecisionPattern, DecisionSummary, HealthStatus, HistoryPoint,
    ImpactPattern, Narrative, ObservedPattern, Recommendation, SoilHealth, TrendDirection,
    TrendSet, WeeklySummary,
};

use super::stats::{average, round1, round_half_up};

/// Days covered by the weekly report
pub const WEEKLY_WINDOW: usize = 7;

pub fn build_narrative(
    trends: &TrendSet,
    soil_health: &SoilHealth,
    decisions: &DecisionSummary,
    recommendation: &Recommendation,
    alerts: &[Alert],
) -> Narrative {
    let moisture = &trends.soil_moisture;
    let temperature = &trends.air_temperature;

    let observed_key = if moisture.direction == TrendDirection::Decreasing && moisture.abnormal {
        ObservedPattern::DryTrend
    } else if temperature.direction == TrendDirection::Increasing && temperature.abnormal {
        ObservedPattern::HeatRise
    } else {
        ObservedPattern::Stable
    };

    let decisions_key = if decisions.irrigate_count >= decisions.wait_count + 2 {
        DecisionPattern::Proactive
    } else if decisions.wait_count >= decisions.irrigate_count + 2 {
        DecisionPattern::Conservative
    } else {
        DecisionPattern::Balanced
    };

    let has_critical = alerts
        .iter()
        .any(|alert| alert.severity == AlertSeverity::Critical);
    let impact_key = if soil_health.status == HealthStatus::Healthy && decisions.positive_rate >= 60 {
        ImpactPattern::Positive
    } else if soil_health.status == HealthStatus::Degraded || has_critical {
        ImpactPattern::Risk
    } else {
        ImpactPattern::Watch
    };

    Narrative {
        observed_key,
        decisions_key,
        impact_key,
        linked_decision_action: recommendation.action,
    }
}

/// Averages and totals over the weekly series
pub fn weekly_summary(series: &[HistoryPoint], active_alerts: usize) -> WeeklySummary {
    let moistures: Vec<f64> = series
        .iter()
        .map(|point| f64::from(point.soil_moisture))
        .collect();
    let temperatures: Vec<f64> = series.iter().map(|point| point.air_temperature).collect();

    WeeklySummary {
        avg_moisture: round_half_up(average(&moistures)) as i32,
        avg_temp: round1(average(&temperatures)),
        total_rain: round1(series.iter().map(|point| point.rain_mm).sum()),
        active_alerts,
    }
}
