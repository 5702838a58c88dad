//! Decision log replay
//!
//! Replays the trailing week as simulated irrigate/wait decisions and
//! attributes an outcome to each from the following day's moisture.

use shared::{
    DecisionLogEntry, DecisionOutcome, DecisionReason, DecisionSummary, HistoryPoint,
    IrrigationAction, Plot, SensorHistory,
};

use super::stats::{round1, round_half_up};

/// Points replayed; consecutive pairs yield one decision each
const REPLAY_WINDOW: usize = 8;

/// Rain (mm) on the decision day that justifies holding irrigation
const RAIN_SUPPORT_MM: f64 = 2.4;

fn replay_day(plot: &Plot, current: &HistoryPoint, next: &HistoryPoint) -> DecisionLogEntry {
    let thresholds = &plot.thresholds;
    let moisture_gap = thresholds.moisture_target - current.soil_moisture;
    let severe_dryness = current.soil_moisture < thresholds.moisture_min;
    let heat_pressure = current.air_temperature >= f64::from(thresholds.heat_stress_temp);
    let rain_support = current.rain_mm >= RAIN_SUPPORT_MM;

    let action = if severe_dryness || (heat_pressure && moisture_gap > 2) {
        IrrigationAction::Irrigate
    } else {
        IrrigationAction::Wait
    };

    let duration = match action {
        IrrigationAction::Irrigate => round_half_up(
            (f64::from(plot.irrigation_profile.base_minutes) + f64::from(moisture_gap) * 1.2)
                .clamp(10.0, 55.0),
        ) as i32,
        IrrigationAction::Wait => 0,
    };

    let reason = match action {
        IrrigationAction::Irrigate if severe_dryness => DecisionReason::RecoverMoisture,
        IrrigationAction::Irrigate => DecisionReason::HeatPreventive,
        IrrigationAction::Wait if rain_support => DecisionReason::HoldForRain,
        IrrigationAction::Wait => DecisionReason::Monitor,
    };

    let moisture_change = round1(f64::from(next.soil_moisture - current.soil_moisture));

    let outcome = match action {
        IrrigationAction::Irrigate => {
            if moisture_change >= 1.0 && next.soil_moisture <= thresholds.moisture_target + 9 {
                DecisionOutcome::Positive
            } else if moisture_change < -1.0
                || next.soil_moisture > thresholds.moisture_target + 14
            {
                DecisionOutcome::Negative
            } else {
                DecisionOutcome::Neutral
            }
        }
        IrrigationAction::Wait => {
            if rain_support && moisture_change >= -1.0 {
                DecisionOutcome::Positive
            } else if !rain_support && moisture_change <= -4.0 {
                DecisionOutcome::Negative
            } else {
                DecisionOutcome::Neutral
            }
        }
    };

    DecisionLogEntry {
        id: format!("{}-decision-{}", plot.id, current.date),
        date: current.date,
        action,
        duration,
        reason,
        outcome,
        moisture_change,
        soil_health_delta: outcome.soil_health_delta(),
    }
}

/// Replay the trailing eight days into seven decisions, newest first
pub fn build_decision_log(plot: &Plot, history: &SensorHistory) -> Vec<DecisionLogEntry> {
    let mut log: Vec<DecisionLogEntry> = history
        .trailing(REPLAY_WINDOW)
        .windows(2)
        .map(|pair| replay_day(plot, &pair[0], &pair[1]))
        .collect();
    log.reverse();
    log
}

pub fn summarize_decision_log(log: &[DecisionLogEntry]) -> DecisionSummary {
    let irrigate_count = log
        .iter()
        .filter(|entry| entry.action == IrrigationAction::Irrigate)
        .count();
    let wait_count = log.len() - irrigate_count;
    let positive_count = log
        .iter()
        .filter(|entry| entry.outcome == DecisionOutcome::Positive)
        .count();

    let positive_rate = if log.is_empty() {
        0
    } else {
        round_half_up(positive_count as f64 / log.len() as f64 * 100.0) as i32
    };

    DecisionSummary {
        irrigate_count,
        wait_count,
        positive_rate,
    }
}
