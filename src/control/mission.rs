use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::guidance::PitchProgram;
use super::propulsion::ThrustModel;
use super::vehicle::VehicleConfig;
use crate::constants::{
    DEFAULT_PITCHOVER_ANGLE, DEFAULT_SAMPLING_FREQUENCY, GRAVITY, MAX_INTEGRATION_STEPS,
};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    pub vehicle: VehicleConfig,
    pub pitch_program: PitchProgram,
    #[serde(default = "default_gravity")]
    pub gravity: f64, // m/s²
    #[serde(default = "default_frequency")]
    pub frequency: f64, // Hz
}

fn default_gravity() -> f64 {
    GRAVITY
}

fn default_frequency() -> f64 {
    DEFAULT_SAMPLING_FREQUENCY
}

impl MissionConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.vehicle.validate()?;
        self.pitch_program.validate()?;
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "gravity must be positive, got {} m/s²",
                self.gravity
            )));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "sampling frequency must be positive, got {} Hz",
                self.frequency
            )));
        }
        let steps = (self.vehicle.burn_duration * self.frequency).ceil();
        if steps > MAX_INTEGRATION_STEPS {
            return Err(SimulationError::InvalidConfiguration(format!(
                "{} s at {} Hz needs {:e} steps, limit is {:e}",
                self.vehicle.burn_duration, self.frequency, steps, MAX_INTEGRATION_STEPS
            )));
        }
        Ok(())
    }

    pub fn with_pitch_program(self, pitch_program: PitchProgram) -> Self {
        MissionConfig {
            pitch_program,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MissionPreset {
    ConstantThrust,    // 1 Hz, pitchover at t=11 s
    PressureCorrected, // 5 Hz, pitchover at t=9 s
    PadClearance,      // 20 Hz, pitchover once clear of the pad at 20 m
}

pub struct MissionFactory;

impl MissionFactory {
    pub fn create(preset: MissionPreset) -> MissionConfig {
        match preset {
            MissionPreset::ConstantThrust => Self::create_constant_thrust(),
            MissionPreset::PressureCorrected => Self::create_pressure_corrected(),
            MissionPreset::PadClearance => Self::create_pad_clearance(),
        }
    }

    pub fn create_constant_thrust() -> MissionConfig {
        MissionConfig {
            vehicle: VehicleConfig::new(
                9_714.0,
                3_122.0,
                142.0,
                ThrustModel::Constant { thrust: 113_000.0 },
            ),
            pitch_program: PitchProgram::at_time(11.0, DEFAULT_PITCHOVER_ANGLE),
            gravity: GRAVITY,
            frequency: 1.0,
        }
    }

    pub fn create_pressure_corrected() -> MissionConfig {
        MissionConfig {
            vehicle: VehicleConfig::new(
                9_714.0,
                3_122.0,
                142.0,
                ThrustModel::PressureCorrected {
                    vacuum: 123_600.0,
                    sea_level: 112_900.0,
                },
            ),
            pitch_program: PitchProgram::at_time(9.0, DEFAULT_PITCHOVER_ANGLE),
            gravity: GRAVITY,
            frequency: 5.0,
        }
    }

    pub fn create_pad_clearance() -> MissionConfig {
        MissionConfig {
            vehicle: VehicleConfig::new(
                9_665.0,
                3_072.0,
                142.0,
                ThrustModel::PressureCorrected {
                    vacuum: 123_600.0,
                    sea_level: 112_900.0,
                },
            ),
            pitch_program: PitchProgram::at_altitude(20.0, DEFAULT_PITCHOVER_ANGLE),
            gravity: GRAVITY,
            frequency: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::guidance::PitchoverTrigger;

    #[test]
    fn test_presets_are_valid() {
        for preset in [
            MissionPreset::ConstantThrust,
            MissionPreset::PressureCorrected,
            MissionPreset::PadClearance,
        ] {
            let mission = MissionFactory::create(preset);
            assert!(mission.validate().is_ok(), "{:?} failed validation", preset);
            assert!(mission.vehicle.liftoff_thrust_to_weight(mission.gravity) > 1.0);
        }
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(
            MissionPreset::from_str("pad-clearance", false),
            Ok(MissionPreset::PadClearance)
        );
        assert!(MissionPreset::from_str("two-stage", false).is_err());
    }

    #[test]
    fn test_constant_thrust_preset() {
        let mission = MissionFactory::create_constant_thrust();
        assert_eq!(mission.frequency, 1.0);
        assert_eq!(mission.gravity, 9.8);
        assert_eq!(
            mission.pitch_program.trigger,
            PitchoverTrigger::Time { seconds: 11.0 }
        );
        assert_eq!(mission.pitch_program.override_angle, 89.9);
    }

    #[test]
    fn test_validate_rejects_bad_frequency_and_gravity() {
        let mut mission = MissionFactory::create_pressure_corrected();
        mission.frequency = 0.0;
        assert!(matches!(
            mission.validate(),
            Err(SimulationError::InvalidConfiguration(_))
        ));

        let mut mission = MissionFactory::create_pressure_corrected();
        mission.frequency = -5.0;
        assert!(mission.validate().is_err());

        let mut mission = MissionFactory::create_pressure_corrected();
        mission.gravity = 0.0;
        assert!(mission.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_excessive_step_count() {
        let mut mission = MissionFactory::create_constant_thrust();
        mission.frequency = 1.0e300;
        assert!(matches!(
            mission.validate(),
            Err(SimulationError::InvalidConfiguration(_))
        ));

        // 142 s at 1e6 Hz is within the limit
        mission.frequency = 1.0e6;
        assert!(mission.validate().is_ok());
    }

    #[test]
    fn test_with_pitch_program() {
        let mission = MissionFactory::create_pad_clearance()
            .with_pitch_program(PitchProgram::at_time(3.0, 80.0));
        assert_eq!(mission.pitch_program, PitchProgram::at_time(3.0, 80.0));
        assert_eq!(mission.frequency, 20.0);
    }
}
