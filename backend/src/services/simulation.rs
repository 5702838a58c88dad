//! What-if comparison of irrigating today against waiting a day

use shared::{
    ForecastDay, HealthStatus, Level, Plot, ScenarioId, ScenarioSummary, Simulation,
    SimulationBaseline, SimulationScenario, Snapshot, SoilHealth, SoilType,
};

use super::stats::round1;

/// Rain chance assumed for the rain effect when no forecast day exists
const DEFAULT_RAIN_EFFECT_PROBABILITY: i32 = 35;

/// Rain chance above which waiting is expected to pay off
const RAIN_COVER_PROBABILITY: i32 = 65;

const MIN_SIMULATED_MOISTURE: f64 = 10.0;
const MAX_SIMULATED_MOISTURE: f64 = 92.0;

fn heat_penalty(stress: Level) -> f64 {
    match stress {
        Level::High => 4.8,
        Level::Medium => 3.1,
        Level::Low => 2.0,
    }
}

fn scenario(
    id: ScenarioId,
    snapshot: &Snapshot,
    soil_health: &SoilHealth,
    moisture: f64,
    health_delta: i32,
    summary: ScenarioSummary,
) -> SimulationScenario {
    let estimated_soil_health = (soil_health.score + health_delta).clamp(0, 100);
    SimulationScenario {
        id,
        estimated_soil_moisture: moisture,
        estimated_soil_health,
        delta_moisture: round1(moisture - f64::from(snapshot.soil_moisture)),
        delta_health: estimated_soil_health - soil_health.score,
        summary,
    }
}

pub fn build_simulation(
    plot: &Plot,
    snapshot: &Snapshot,
    forecast: &[ForecastDay],
    soil_health: &SoilHealth,
) -> Simulation {
    let next_day = forecast.first();
    let next_day_rain = next_day.map(|day| day.rain_probability);
    let rain_effect =
        f64::from(next_day_rain.unwrap_or(DEFAULT_RAIN_EFFECT_PROBABILITY)) * 0.035;
    let penalty = heat_penalty(next_day.map_or(Level::Low, |day| day.temp_stress));

    let sandy_bonus = if plot.soil_type == SoilType::Sandy { 1.8 } else { 0.8 };
    let irrigation_gain = plot.irrigation_profile.recovery_rate + sandy_bonus;
    let current = f64::from(snapshot.soil_moisture);

    let irrigate_moisture = round1(
        (current + irrigation_gain + rain_effect - penalty * 0.45)
            .clamp(MIN_SIMULATED_MOISTURE, MAX_SIMULATED_MOISTURE),
    );
    let wait_moisture = round1(
        (current + rain_effect - penalty).clamp(MIN_SIMULATED_MOISTURE, MAX_SIMULATED_MOISTURE),
    );

    let mut irrigate_delta = 3;
    if snapshot.soil_moisture < plot.thresholds.moisture_min {
        irrigate_delta += 3;
    }
    if soil_health.status == HealthStatus::Degraded {
        irrigate_delta += 1;
    }

    let rain_for_threshold = next_day_rain.unwrap_or(0);
    let wait_delta = if wait_moisture < f64::from(plot.thresholds.moisture_min) {
        -6
    } else if rain_for_threshold > RAIN_COVER_PROBABILITY {
        2
    } else {
        -2
    };
    let wait_summary = if rain_for_threshold >= RAIN_COVER_PROBABILITY {
        ScenarioSummary::RainCouldCover
    } else {
        ScenarioSummary::DrynessRisk
    };

    Simulation {
        baseline: SimulationBaseline {
            soil_moisture: snapshot.soil_moisture,
            soil_health_score: soil_health.score,
        },
        scenarios: vec![
            scenario(
                ScenarioId::IrrigateToday,
                snapshot,
                soil_health,
                irrigate_moisture,
                irrigate_delta,
                ScenarioSummary::StabilizeMoisture,
            ),
            scenario(
                ScenarioId::Wait24h,
                snapshot,
                soil_health,
                wait_moisture,
                wait_delta,
                wait_summary,
            ),
        ],
    }
}
