use super::kinematics::SimulationState;

// vf² = vi² - 2·g·Δy with vf = 0
pub fn altitude_to_apogee(vertical_velocity: f64, gravity: f64) -> f64 {
    vertical_velocity.powi(2) / (2.0 * gravity)
}

pub fn apogee_altitude(altitude: f64, vertical_velocity: f64, gravity: f64) -> f64 {
    altitude + altitude_to_apogee(vertical_velocity, gravity)
}

// None when the pitch is horizontal
pub fn total_speed_at_cutoff(vertical_velocity: f64, pitch_angle: f64) -> Option<f64> {
    let sine = pitch_angle.to_radians().sin();
    if sine.abs() < f64::EPSILON {
        return None;
    }
    Some(vertical_velocity / sine)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnoutReport {
    pub time: f64, // s
    pub altitude: f64, // m
    pub vertical_velocity: f64, // m/s
    pub horizontal_velocity: f64, // m/s
    pub pitch_angle: f64, // degrees
    pub total_speed: Option<f64>, // m/s
    pub altitude_to_apogee: f64, // m
    pub apogee_altitude: f64, // m
}

impl BurnoutReport {
    pub fn from_state(state: &SimulationState, gravity: f64) -> Self {
        let vertical_velocity = state.vertical_velocity();
        BurnoutReport {
            time: state.time,
            altitude: state.altitude,
            vertical_velocity,
            horizontal_velocity: state.horizontal_velocity(),
            pitch_angle: state.pitch_angle,
            total_speed: total_speed_at_cutoff(vertical_velocity, state.pitch_angle),
            altitude_to_apogee: altitude_to_apogee(vertical_velocity, gravity),
            apogee_altitude: apogee_altitude(state.altitude, vertical_velocity, gravity),
        }
    }
}
