use serde::{Deserialize, Serialize};

use super::environment::pressure_ratio;
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThrustModel {
    Constant { thrust: f64 }, // N
    PressureCorrected { vacuum: f64, sea_level: f64 }, // N, interpolated by pressure ratio
}

impl ThrustModel {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let ratings = match *self {
            ThrustModel::Constant { thrust } => vec![("thrust", thrust)],
            ThrustModel::PressureCorrected { vacuum, sea_level } => {
                vec![("vacuum thrust", vacuum), ("sea-level thrust", sea_level)]
            }
        };
        for (name, value) in ratings {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn current_thrust(&self, altitude: f64) -> f64 {
        match *self {
            ThrustModel::Constant { thrust } => thrust,
            ThrustModel::PressureCorrected { vacuum, sea_level } => {
                // vacuum - (vacuum - sea_level) * ratio, written so both ends are exact
                let ratio = pressure_ratio(altitude);
                sea_level * ratio + vacuum * (1.0 - ratio)
            }
        }
    }

    pub fn is_pressure_corrected(&self) -> bool {
        matches!(self, ThrustModel::PressureCorrected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ENGINE: ThrustModel = ThrustModel::PressureCorrected {
        vacuum: 123_600.0,
        sea_level: 112_900.0,
    };

    #[test]
    fn test_constant_thrust_ignores_altitude() {
        let model = ThrustModel::Constant { thrust: 113_000.0 };
        assert_eq!(model.current_thrust(0.0), 113_000.0);
        assert_eq!(model.current_thrust(80_000.0), 113_000.0);
        assert!(!model.is_pressure_corrected());
    }

    #[test]
    fn test_sea_level_thrust_at_pad() {
        assert_eq!(ENGINE.current_thrust(0.0), 112_900.0);
    }

    #[test]
    fn test_thrust_approaches_vacuum() {
        let mut previous = ENGINE.current_thrust(0.0);
        for km in [1.0, 5.0, 10.0, 20.0, 30.0, 40.0] {
            let thrust = ENGINE.current_thrust(km * 1_000.0);
            assert!(thrust > previous);
            assert!(thrust < 123_600.0);
            previous = thrust;
        }
        assert_eq!(ENGINE.current_thrust(50_000.0), 123_600.0);
        assert_relative_eq!(ENGINE.current_thrust(40_000.0), 123_600.0, max_relative = 1e-3);
    }

    #[test]
    fn test_validate_rejects_non_positive_ratings() {
        assert!(ThrustModel::Constant { thrust: 0.0 }.validate().is_err());
        assert!(ThrustModel::PressureCorrected {
            vacuum: 1.0,
            sea_level: -1.0
        }
        .validate()
        .is_err());
        assert!(ThrustModel::Constant { thrust: f64::NAN }.validate().is_err());
        assert!(ENGINE.validate().is_ok());
    }
}
