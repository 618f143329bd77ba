pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::guidance::{PitchPhase, PitchProgram, PitchoverTrigger};
pub use control::mission::{MissionConfig, MissionFactory, MissionPreset};
pub use control::propulsion::ThrustModel;
pub use control::vehicle::VehicleConfig;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::ballistics::BurnoutReport;
pub use trajectory_system::kinematics::{
    AscentIntegrator, FlightOutcome, FlightResult, SimulationState, StepRecord,
};
pub use trajectory_system::pitch_search::{find_pitchover_angle, PitchSearchResult};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{Telemetry, TrajectoryFormat};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
