use std::path::Path;

use crate::control::mission::MissionConfig;
use crate::errors::SimulationError;

pub fn parse_mission(contents: &str) -> Result<MissionConfig, SimulationError> {
    let mission: MissionConfig = toml::from_str(contents)?;
    mission.validate()?;
    Ok(mission)
}

pub fn load_mission<P: AsRef<Path>>(path: P) -> Result<MissionConfig, SimulationError> {
    let contents = std::fs::read_to_string(path)?;
    parse_mission(&contents)
}
