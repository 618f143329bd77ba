use tracing::{debug, info, warn};

use super::ballistics::BurnoutReport;
use crate::constants::LIFTOFF_PITCH;
use crate::control::guidance::{gravity_turn_pitch, PitchPhase};
use crate::control::mission::MissionConfig;
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

// velocity and altitude are running sums, only ever incremented by one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub time: f64, // s, always step_index / frequency
    pub step_index: u64,
    pub pitch_angle: f64, // degrees above the horizontal
    pub velocity: Vector2D, // m/s
    pub altitude: f64, // m above the pad
    pub frequency: f64, // Hz
}

impl SimulationState {
    pub fn liftoff(frequency: f64) -> Self {
        SimulationState {
            time: 0.0,
            step_index: 0,
            pitch_angle: LIFTOFF_PITCH,
            velocity: Vector2D::zero(),
            altitude: 0.0,
            frequency,
        }
    }

    pub fn vertical_velocity(&self) -> f64 {
        self.velocity.y
    }

    pub fn horizontal_velocity(&self) -> f64 {
        self.velocity.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightOutcome {
    Burnout,
    GroundImpact, // altitude went negative before burnout
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    pub time: f64, // s, start of the step
    pub pitch_angle: f64, // degrees, applied during the step
    pub mass: f64, // kg
    pub thrust: f64, // N
    pub acceleration: Vector2D, // m/s², net of gravity
    pub velocity: Vector2D, // m/s, after the step
    pub altitude: f64, // m, after the step
}

#[derive(Debug, Clone)]
pub struct FlightResult {
    pub mission: MissionConfig,
    pub outcome: FlightOutcome,
    pub final_state: SimulationState,
    pub report: BurnoutReport,
    pub trajectory: Vec<StepRecord>,
}

impl FlightResult {
    pub fn pitch_log(&self) -> Vec<f64> {
        self.trajectory.iter().map(|r| r.pitch_angle).collect()
    }
}

pub struct AscentIntegrator {
    mission: MissionConfig,
    state: SimulationState,
    phase: PitchPhase,
    outcome: Option<FlightOutcome>,
    trajectory: Vec<StepRecord>,
}

impl AscentIntegrator {
    pub fn new(mission: MissionConfig) -> Result<Self, SimulationError> {
        mission.validate()?;

        let thrust_to_weight = mission.vehicle.liftoff_thrust_to_weight(mission.gravity);
        info!(
            wet_mass = mission.vehicle.wet_mass,
            dry_mass = mission.vehicle.dry_mass,
            burn_duration = mission.vehicle.burn_duration,
            frequency = mission.frequency,
            thrust_to_weight,
            pressure_corrected = mission.vehicle.thrust.is_pressure_corrected(),
            "ascent integrator initialized"
        );
        if thrust_to_weight <= 1.0 {
            warn!(thrust_to_weight, "vehicle cannot lift off the pad");
        }

        Ok(AscentIntegrator {
            state: SimulationState::liftoff(mission.frequency),
            phase: PitchPhase::PitchProgram,
            outcome: None,
            trajectory: Vec::new(),
            mission,
        })
    }

    pub fn mission(&self) -> &MissionConfig {
        &self.mission
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> PitchPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<FlightOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn trajectory(&self) -> &[StepRecord] {
        &self.trajectory
    }

    pub fn current_mass(&self, t: f64) -> f64 {
        self.mission.vehicle.current_mass(t)
    }

    pub fn current_thrust(&self, altitude: f64) -> f64 {
        self.mission.vehicle.thrust.current_thrust(altitude)
    }

    // Before gravity losses
    pub fn total_acceleration(&self, t: f64) -> f64 {
        self.current_thrust(self.state.altitude) / self.current_mass(t)
    }

    pub fn vertical_acceleration(&self, t: f64) -> f64 {
        self.total_acceleration(t) * self.state.pitch_angle.to_radians().sin()
            - self.mission.gravity
    }

    pub fn horizontal_acceleration(&self, t: f64) -> f64 {
        self.total_acceleration(t) * self.state.pitch_angle.to_radians().cos()
    }

    /// Advances the state by one time step: pitchover if due, accelerations,
    /// velocity sums, altitude from the updated vertical velocity, then the
    /// pitch for the next step. Nothing is committed if a sum goes non-finite.
    pub fn step(&mut self) -> Result<StepRecord, SimulationError> {
        if self.outcome.is_some() {
            return Err(SimulationError::Terminated {
                time: self.state.time,
            });
        }

        let t = self.state.time;
        if self.phase == PitchPhase::PitchProgram
            && self
                .mission
                .pitch_program
                .pitchover_due(t, self.state.altitude)
        {
            self.state.pitch_angle = self.mission.pitch_program.override_angle;
            self.phase = PitchPhase::Burn;
            info!(
                time = t,
                altitude = self.state.altitude,
                vertical_velocity = self.state.vertical_velocity(),
                pitch = self.state.pitch_angle,
                "pitchover"
            );
        }

        let mass = self.current_mass(t);
        let thrust = self.current_thrust(self.state.altitude);
        let acceleration = Vector2D::new(
            self.horizontal_acceleration(t),
            self.vertical_acceleration(t),
        );

        let frequency = self.mission.frequency;
        let velocity = self.state.velocity + acceleration / frequency;
        let altitude = self.state.altitude + velocity.y / frequency;
        if !velocity.is_finite() || !altitude.is_finite() {
            return Err(SimulationError::NumericSingularity {
                time: t,
                detail: format!(
                    "velocity ({}, {}) altitude {} at pitch {}",
                    velocity.x, velocity.y, altitude, self.state.pitch_angle
                ),
            });
        }

        let record = StepRecord {
            time: t,
            pitch_angle: self.state.pitch_angle,
            mass,
            thrust,
            acceleration,
            velocity,
            altitude,
        };

        self.state.velocity = velocity;
        self.state.altitude = altitude;
        if let Some(pitch) = gravity_turn_pitch(velocity.y, velocity.x) {
            self.state.pitch_angle = pitch;
        }
        self.state.step_index += 1;
        self.state.time = self.state.step_index as f64 / frequency;

        debug!(
            time = t,
            pitch = record.pitch_angle,
            altitude,
            vertical_velocity = velocity.y,
            horizontal_velocity = velocity.x,
            "step"
        );

        if altitude < 0.0 {
            warn!(time = self.state.time, "ground impact before burnout");
            self.outcome = Some(FlightOutcome::GroundImpact);
        } else if self.state.time >= self.mission.vehicle.burn_duration {
            info!(
                time = self.state.time,
                altitude,
                vertical_velocity = velocity.y,
                "burnout"
            );
            self.outcome = Some(FlightOutcome::Burnout);
        }

        self.trajectory.push(record);
        Ok(record)
    }

    pub fn run(mut self) -> Result<FlightResult, SimulationError> {
        let outcome = loop {
            if let Some(outcome) = self.outcome {
                break outcome;
            }
            self.step()?;
        };
        Ok(self.into_result(outcome))
    }

    fn into_result(self, outcome: FlightOutcome) -> FlightResult {
        let report = BurnoutReport::from_state(&self.state, self.mission.gravity);
        FlightResult {
            mission: self.mission,
            outcome,
            final_state: self.state,
            report,
            trajectory: self.trajectory,
        }
    }
}
