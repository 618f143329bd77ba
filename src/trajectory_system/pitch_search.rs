use tracing::{debug, info};

use super::kinematics::{AscentIntegrator, FlightOutcome, FlightResult};
use crate::constants::MAX_PITCH_SEARCH_ITERATIONS;
use crate::control::mission::MissionConfig;
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchSearchResult {
    pub angle: f64, // degrees
    pub apogee_altitude: f64,
    pub cutoff_altitude: f64,
    pub iterations: usize,
}

fn fly(mission: &MissionConfig, angle: f64) -> Result<FlightResult, SimulationError> {
    let pitch_program = mission.pitch_program.with_override_angle(angle);
    AscentIntegrator::new(mission.with_pitch_program(pitch_program))?.run()
}

// A flight that hits the ground reaches nothing
fn effective_apogee(result: &FlightResult) -> f64 {
    match result.outcome {
        FlightOutcome::Burnout => result.report.apogee_altitude,
        FlightOutcome::GroundImpact => 0.0,
    }
}

/// Bisects over [0°, 90°] for the pitchover override angle whose apogee is
/// within `tolerance` of `target_apogee`. The pitch program trigger is kept.
pub fn find_pitchover_angle(
    mission: &MissionConfig,
    target_apogee: f64,
    tolerance: f64,
) -> Result<PitchSearchResult, SimulationError> {
    if !target_apogee.is_finite() || target_apogee <= 0.0 {
        return Err(SimulationError::PitchSearch(format!(
            "target apogee must be positive, got {} m",
            target_apogee
        )));
    }
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(SimulationError::PitchSearch(format!(
            "tolerance must be positive, got {} m",
            tolerance
        )));
    }
    mission.validate()?;

    let vertical = fly(mission, 90.0)?;
    let ceiling = effective_apogee(&vertical);
    if ceiling < target_apogee - tolerance {
        return Err(SimulationError::PitchSearch(format!(
            "target apogee {:.1} m exceeds vertical-ascent apogee {:.1} m",
            target_apogee, ceiling
        )));
    }

    let mut low = 0.0_f64;
    let mut high = 90.0_f64;
    let mut angle = 90.0;
    let mut result = vertical;
    for iteration in 1..=MAX_PITCH_SEARCH_ITERATIONS {
        let apogee = effective_apogee(&result);
        debug!(iteration, angle, apogee, "pitch search");

        if (apogee - target_apogee).abs() <= tolerance {
            info!(angle, apogee, iterations = iteration, "pitch search converged");
            return Ok(PitchSearchResult {
                angle,
                apogee_altitude: apogee,
                cutoff_altitude: result.report.altitude,
                iterations: iteration,
            });
        }
        if apogee < target_apogee {
            low = angle;
        } else {
            high = angle;
        }
        angle = (low + high) / 2.0;
        if angle <= low || angle >= high {
            break;
        }
        result = fly(mission, angle)?;
    }

    Err(SimulationError::PitchSearch(format!(
        "no pitchover angle reaches {:.1} m within ±{} m (bracket [{}, {}] degrees)",
        target_apogee, tolerance, low, high
    )))
}
