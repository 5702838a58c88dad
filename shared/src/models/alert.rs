//! Alert models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::recommendation::RecommendationReason;
use crate::types::{IrrigationAction, Level, MetricKey};

/// A prioritized plot alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    #[serde(rename = "titleKey")]
    pub title_key: AlertKind,
    #[serde(rename = "messageKey")]
    pub message_key: String,
    pub source: String,
    pub plot_id: String,
    pub plot_name: String,
    pub sensor_key: MetricKey,
    pub impacts: AlertImpacts,
    pub decision_reference: DecisionReference,
    /// Synthetic display timestamp, not an event time
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

/// Alert rule that fired; doubles as the title key
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    AllStable,
    SoilTooDry,
    BatteryDrop,
    HeatRiskWindow,
    SoilHealthDip,
    TrendShift,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::AllStable => "all_stable",
            AlertKind::SoilTooDry => "soil_too_dry",
            AlertKind::BatteryDrop => "battery_drop",
            AlertKind::HeatRiskWindow => "heat_risk_window",
            AlertKind::SoilHealthDip => "soil_health_dip",
            AlertKind::TrendShift => "trend_shift",
        }
    }

    /// Rule number used in alert ids (`<plot>-A<n>`)
    pub fn rule_number(&self) -> u8 {
        match self {
            AlertKind::AllStable => 0,
            AlertKind::SoilTooDry => 1,
            AlertKind::BatteryDrop => 2,
            AlertKind::HeatRiskWindow => 3,
            AlertKind::SoilHealthDip => 4,
            AlertKind::TrendShift => 5,
        }
    }

    pub fn message_key(&self) -> String {
        format!("{}_msg", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertImpacts {
    pub decision: Level,
    pub soil_health: Level,
    pub yield_risk: Level,
}

impl AlertImpacts {
    pub fn new(decision: Level, soil_health: Level, yield_risk: Level) -> Self {
        Self {
            decision,
            soil_health,
            yield_risk,
        }
    }
}

/// Echo of the current recommendation so the consumer can link back to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionReference {
    pub action: IrrigationAction,
    pub reason: RecommendationReason,
    pub dashboard_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_kind_keys() {
        assert_eq!(AlertKind::SoilTooDry.message_key(), "soil_too_dry_msg");
        assert_eq!(AlertKind::AllStable.rule_number(), 0);
        assert_eq!(
            serde_json::to_string(&AlertKind::HeatRiskWindow).unwrap(),
            "\"heat_risk_window\""
        );
    }
}
