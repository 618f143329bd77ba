use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Numeric singularity at t={time:.3}s: {detail}")]
    NumericSingularity { time: f64, detail: String },

    #[error("Simulation already terminated at t={time:.3}s")]
    Terminated { time: f64 },

    #[error("Pitch search error: {0}")]
    PitchSearch(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
