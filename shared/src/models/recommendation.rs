//! Irrigation recommendation models

use serde::{Deserialize, Serialize};

use crate::types::{IrrigationAction, Level};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub action: IrrigationAction,
    /// Irrigation minutes, within 0-55
    pub duration: i32,
    pub reason: RecommendationReason,
    /// Within 0.52-0.95
    pub confidence: f64,
    pub factors: Vec<RecommendationFactor>,
    pub decision_input_note: DecisionInputNote,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationReason {
    SevereDryness,
    ModerateDeficit,
    RainIncoming,
    HeatPressure,
    MoistureOptimal,
}

impl RecommendationReason {
    /// Confidence assigned to the rule before scaling by data confidence
    pub fn base_confidence(&self) -> f64 {
        match self {
            RecommendationReason::SevereDryness => 0.88,
            RecommendationReason::ModerateDeficit => 0.79,
            RecommendationReason::RainIncoming => 0.74,
            RecommendationReason::HeatPressure => 0.71,
            RecommendationReason::MoistureOptimal => 0.9,
        }
    }
}

/// One signal that fed the recommendation, with its weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationFactor {
    pub key: FactorKey,
    pub impact: Level,
    pub value: i32,
    pub unit: FactorUnit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FactorKey {
    MoistureLevel,
    RainProbability,
    HeatForecast,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FactorUnit {
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "days")]
    Days,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DecisionInputNote {
    #[serde(rename = "decision_input_moisture_drop")]
    MoistureDrop,
    #[serde(rename = "decision_input_inconsistent")]
    Inconsistent,
    #[serde(rename = "decision_input_stable_signal")]
    StableSignal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_confidence_range() {
        let reasons = [
            RecommendationReason::SevereDryness,
            RecommendationReason::ModerateDeficit,
            RecommendationReason::RainIncoming,
            RecommendationReason::HeatPressure,
            RecommendationReason::MoistureOptimal,
        ];
        for reason in reasons {
            let base = reason.base_confidence();
            assert!((0.71..=0.9).contains(&base), "{:?} out of range", reason);
        }
    }

    #[test]
    fn test_factor_serialization() {
        let factor = RecommendationFactor {
            key: FactorKey::HeatForecast,
            impact: Level::Medium,
            value: 2,
            unit: FactorUnit::Days,
        };
        let json = serde_json::to_value(&factor).unwrap();
        assert_eq!(json["key"], "heat_forecast");
        assert_eq!(json["impact"], "medium");
        assert_eq!(json["unit"], "days");

        assert_eq!(serde_json::to_string(&FactorUnit::Percent).unwrap(), "\"%\"");
    }
}
