//! Alert generation from the assembled plot signals
//!
//! Each rule is checked independently; several alerts can fire at once.
//! When nothing fires a single informational `all_stable` alert is emitted
//! so the list is never empty.

use chrono::{DateTime, Duration, Utc};
use shared::{
    Alert, AlertImpacts, AlertKind, AlertSeverity, DecisionReference, ForecastDay, HealthStatus,
    IrrigationAction, Level, MetricKey, Plot, Recommendation, Reliability, Snapshot, SoilHealth,
    SystemIntelligence, TrendConsistency, TrendDirection, TrendSet,
};

/// Source label for forecast-driven alerts
pub const FORECAST_SOURCE: &str = "Prevision meteo";

pub const DASHBOARD_PATH: &str = "/";

/// Spacing between synthesized alert timestamps
const ALERT_SPACING_HOURS: i64 = 6;

/// Signals the alert rules read
pub struct AlertInputs<'a> {
    pub plot: &'a Plot,
    pub snapshot: &'a Snapshot,
    pub forecast: &'a [ForecastDay],
    pub soil_health: &'a SoilHealth,
    pub intelligence: &'a SystemIntelligence,
    pub recommendation: &'a Recommendation,
    pub trends: &'a TrendSet,
}

struct Rule {
    kind: AlertKind,
    severity: AlertSeverity,
    source: String,
    sensor_key: MetricKey,
    impacts: AlertImpacts,
}

fn fired_rules(inputs: &AlertInputs<'_>) -> Vec<Rule> {
    let AlertInputs {
        plot,
        snapshot,
        forecast,
        soil_health,
        intelligence,
        recommendation,
        trends,
    } = inputs;
    let mut rules = Vec::new();

    if snapshot.soil_moisture < plot.thresholds.moisture_min - 3 {
        rules.push(Rule {
            kind: AlertKind::SoilTooDry,
            severity: AlertSeverity::Critical,
            source: plot.station_name.clone(),
            sensor_key: MetricKey::SoilMoisture,
            impacts: AlertImpacts::new(Level::High, Level::High, Level::High),
        });
    }

    if snapshot.battery_level < 70 || intelligence.sensor_status.battery_level != Reliability::Reliable
    {
        rules.push(Rule {
            kind: AlertKind::BatteryDrop,
            severity: AlertSeverity::Warning,
            source: plot.station_name.clone(),
            sensor_key: MetricKey::BatteryLevel,
            impacts: AlertImpacts::new(Level::Medium, Level::Low, Level::Low),
        });
    }

    let tomorrow_stress = forecast.first().map_or(Level::Low, |day| day.temp_stress);
    if tomorrow_stress == Level::High && recommendation.action == IrrigationAction::Wait {
        rules.push(Rule {
            kind: AlertKind::HeatRiskWindow,
            severity: AlertSeverity::Warning,
            source: FORECAST_SOURCE.to_string(),
            sensor_key: MetricKey::AirTemperature,
            impacts: AlertImpacts::new(Level::High, Level::Medium, Level::Medium),
        });
    }

    if soil_health.status == HealthStatus::Degraded {
        rules.push(Rule {
            kind: AlertKind::SoilHealthDip,
            severity: AlertSeverity::Warning,
            source: plot.name.clone(),
            sensor_key: MetricKey::SoilMoisture,
            impacts: AlertImpacts::new(Level::Medium, Level::High, Level::Medium),
        });
    }

    if intelligence.trend_consistency == TrendConsistency::Volatile
        || trends.soil_moisture.direction == TrendDirection::Decreasing
    {
        rules.push(Rule {
            kind: AlertKind::TrendShift,
            severity: AlertSeverity::Info,
            source: plot.name.clone(),
            sensor_key: MetricKey::SoilMoisture,
            impacts: AlertImpacts::new(Level::Medium, Level::Medium, Level::Low),
        });
    }

    if rules.is_empty() {
        rules.push(Rule {
            kind: AlertKind::AllStable,
            severity: AlertSeverity::Info,
            source: plot.name.clone(),
            sensor_key: MetricKey::SoilMoisture,
            impacts: AlertImpacts::new(Level::Low, Level::Low, Level::Low),
        });
    }

    rules
}

/// Build the alert list. Timestamps step back six hours per position
/// from `now`, so the first alert is the most recent.
pub fn build_alerts(inputs: &AlertInputs<'_>, now: DateTime<Utc>) -> Vec<Alert> {
    let plot = inputs.plot;
    let recommendation = inputs.recommendation;

    fired_rules(inputs)
        .into_iter()
        .enumerate()
        .map(|(index, rule)| Alert {
            id: format!("{}-A{}", plot.id, rule.kind.rule_number()),
            severity: rule.severity,
            title_key: rule.kind,
            message_key: rule.kind.message_key(),
            source: rule.source,
            plot_id: plot.id.clone(),
            plot_name: plot.name.clone(),
            sensor_key: rule.sensor_key,
            impacts: rule.impacts,
            decision_reference: DecisionReference {
                action: recommendation.action,
                reason: recommendation.reason,
                dashboard_path: DASHBOARD_PATH.to_string(),
            },
            created_at: now - Duration::hours(ALERT_SPACING_HOURS * (index as i64 + 1)),
        })
        .collect()
}
