use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PITCHOVER_ANGLE, HORIZONTAL_VELOCITY_FLOOR};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PitchoverTrigger {
    Time { seconds: f64 },
    Altitude { meters: f64 }, // typically clearance of the pad structures
}

impl PitchoverTrigger {
    fn threshold(&self) -> f64 {
        match *self {
            PitchoverTrigger::Time { seconds } => seconds,
            PitchoverTrigger::Altitude { meters } => meters,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchProgram {
    pub trigger: PitchoverTrigger,
    #[serde(default = "default_override_angle")]
    pub override_angle: f64, // degrees from horizontal
}

fn default_override_angle() -> f64 {
    DEFAULT_PITCHOVER_ANGLE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchPhase {
    PitchProgram, // liftoff until the trigger fires
    Burn,
}

impl PitchProgram {
    pub fn at_time(seconds: f64, override_angle: f64) -> Self {
        PitchProgram {
            trigger: PitchoverTrigger::Time { seconds },
            override_angle,
        }
    }

    pub fn at_altitude(meters: f64, override_angle: f64) -> Self {
        PitchProgram {
            trigger: PitchoverTrigger::Altitude { meters },
            override_angle,
        }
    }

    pub fn with_override_angle(self, override_angle: f64) -> Self {
        PitchProgram {
            override_angle,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let threshold = self.trigger.threshold();
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "pitchover trigger must be non-negative, got {}",
                threshold
            )));
        }
        if !(0.0..=90.0).contains(&self.override_angle) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "pitchover angle must be within [0, 90] degrees, got {}",
                self.override_angle
            )));
        }
        Ok(())
    }

    pub fn pitchover_due(&self, time: f64, altitude: f64) -> bool {
        match self.trigger {
            PitchoverTrigger::Time { seconds } => time >= seconds,
            PitchoverTrigger::Altitude { meters } => altitude >= meters,
        }
    }
}

/// Pitch (degrees) aligned with the velocity vector. `None` while the
/// horizontal velocity is effectively zero; callers hold the previous pitch.
pub fn gravity_turn_pitch(vertical_velocity: f64, horizontal_velocity: f64) -> Option<f64> {
    if horizontal_velocity.abs() < HORIZONTAL_VELOCITY_FLOOR {
        return None;
    }
    let pitch = (vertical_velocity / horizontal_velocity).atan().to_degrees();
    pitch.is_finite().then_some(pitch)
}
