use crate::constants::{BAROMETRIC_EXPONENT, BAROMETRIC_LAPSE_COEFFICIENT, SEA_LEVEL_PRESSURE};

// Pa. Zero above ~44.3 km where the base of the power reaches zero
pub fn atmospheric_pressure(altitude: f64) -> f64 {
    let base = 1.0 - BAROMETRIC_LAPSE_COEFFICIENT * altitude;
    if base <= 0.0 {
        return 0.0;
    }
    SEA_LEVEL_PRESSURE * base.powf(BAROMETRIC_EXPONENT)
}

pub fn pressure_ratio(altitude: f64) -> f64 {
    atmospheric_pressure(altitude) / SEA_LEVEL_PRESSURE
}
