use serde::{Deserialize, Serialize};

use super::propulsion::ThrustModel;
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub wet_mass: f64, // kg
    pub dry_mass: f64, // kg
    pub burn_duration: f64, // s
    pub thrust: ThrustModel,
}

impl VehicleConfig {
    pub fn new(wet_mass: f64, dry_mass: f64, burn_duration: f64, thrust: ThrustModel) -> Self {
        VehicleConfig {
            wet_mass,
            dry_mass,
            burn_duration,
            thrust,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.dry_mass.is_finite() || self.dry_mass <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "dry mass must be positive, got {} kg",
                self.dry_mass
            )));
        }
        if !self.wet_mass.is_finite() || self.wet_mass <= self.dry_mass {
            return Err(SimulationError::InvalidConfiguration(format!(
                "wet mass ({} kg) must exceed dry mass ({} kg)",
                self.wet_mass, self.dry_mass
            )));
        }
        if !self.burn_duration.is_finite() || self.burn_duration <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "burn duration must be positive, got {} s",
                self.burn_duration
            )));
        }
        self.thrust.validate()
    }

    // kg/s
    pub fn burn_rate(&self) -> f64 {
        (self.wet_mass - self.dry_mass) / self.burn_duration
    }

    // Never below dry mass, a final partial step may run past burn_duration
    pub fn current_mass(&self, t: f64) -> f64 {
        debug_assert!(t >= 0.0, "mass requested before liftoff: t={}", t);
        (self.wet_mass - self.burn_rate() * t).max(self.dry_mass)
    }

    pub fn liftoff_thrust_to_weight(&self, gravity: f64) -> f64 {
        self.thrust.current_thrust(0.0) / (self.wet_mass * gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_vehicle() -> VehicleConfig {
        VehicleConfig::new(9_714.0, 3_122.0, 142.0, ThrustModel::Constant { thrust: 113_000.0 })
    }

    #[test]
    fn test_burn_rate() {
        let vehicle = reference_vehicle();
        assert_relative_eq!(vehicle.burn_rate(), 6_592.0 / 142.0);
    }

    #[test]
    fn test_mass_endpoints() {
        let vehicle = reference_vehicle();
        assert_eq!(vehicle.current_mass(0.0), 9_714.0);
        assert_relative_eq!(vehicle.current_mass(142.0), 3_122.0, epsilon = 1e-9);
        assert_relative_eq!(vehicle.current_mass(71.0), (9_714.0 + 3_122.0) / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mass_strictly_decreasing_during_burn() {
        let vehicle = reference_vehicle();
        let mut previous = vehicle.current_mass(0.0);
        for step in 1..=1_420 {
            let mass = vehicle.current_mass(step as f64 * 0.1);
            assert!(mass < previous, "mass did not decrease at step {}", step);
            assert!(mass >= vehicle.dry_mass);
            previous = mass;
        }
    }

    #[test]
    fn test_mass_floor_at_dry_mass() {
        let vehicle = reference_vehicle();
        assert_eq!(vehicle.current_mass(142.5), 3_122.0);
    }

    #[test]
    fn test_validate() {
        assert!(reference_vehicle().validate().is_ok());

        let mut swapped = reference_vehicle();
        swapped.dry_mass = 9_714.0;
        assert!(matches!(
            swapped.validate(),
            Err(SimulationError::InvalidConfiguration(_))
        ));

        let mut no_dry_mass = reference_vehicle();
        no_dry_mass.dry_mass = 0.0;
        assert!(no_dry_mass.validate().is_err());

        let mut no_burn = reference_vehicle();
        no_burn.burn_duration = 0.0;
        assert!(no_burn.validate().is_err());

        let mut no_thrust = reference_vehicle();
        no_thrust.thrust = ThrustModel::Constant { thrust: -5.0 };
        assert!(no_thrust.validate().is_err());
    }

    #[test]
    fn test_liftoff_thrust_to_weight() {
        let twr = reference_vehicle().liftoff_thrust_to_weight(9.8);
        assert_relative_eq!(twr, 113_000.0 / (9_714.0 * 9.8));
        assert!(twr > 1.0);
    }
}
