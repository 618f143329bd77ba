// Physical Constants
pub const GRAVITY: f64 = 9.8; // m/s²
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa

// Barometric model: P(h) = P0 * (1 - k * h)^n
pub const BAROMETRIC_LAPSE_COEFFICIENT: f64 = 2.25577e-5; // 1/m
pub const BAROMETRIC_EXPONENT: f64 = 5.25588;

// Pitch Program
pub const LIFTOFF_PITCH: f64 = 90.0; // degrees from horizontal
pub const DEFAULT_PITCHOVER_ANGLE: f64 = 89.9; // degrees from horizontal

// Below this the velocity vector is treated as purely vertical
pub const HORIZONTAL_VELOCITY_FLOOR: f64 = 1e-9; // m/s

// Simulation Parameters
pub const DEFAULT_SAMPLING_FREQUENCY: f64 = 1.0; // Hz
pub const MAX_INTEGRATION_STEPS: f64 = 1.0e8; // burn_duration * frequency

// Pitchover search
pub const MAX_PITCH_SEARCH_ITERATIONS: usize = 200;
pub const DEFAULT_APOGEE_TOLERANCE: f64 = 1.0; // m
