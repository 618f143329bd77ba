use std::path::PathBuf;

use anyhow::Context;
use ascent_simulation::config::load_mission;
use ascent_simulation::*;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Open-loop gravity-turn ascent simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Integrate one ascent to burnout and report cutoff/apogee conditions
    Simulate {
        #[command(flatten)]
        mission: MissionArgs,

        /// Write the trajectory log to this file (overwritten)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Trajectory log format
        #[arg(long, value_enum, default_value_t = TrajectoryFormat::PitchLog)]
        format: TrajectoryFormat,
    },
    /// Search for the pitchover angle that yields a target apogee
    FindPitch {
        #[command(flatten)]
        mission: MissionArgs,

        /// Target apogee (m)
        #[arg(long)]
        target_apogee: f64,

        /// Accepted apogee error (m)
        #[arg(long, default_value_t = DEFAULT_APOGEE_TOLERANCE)]
        tolerance: f64,
    },
}

#[derive(Args)]
struct MissionArgs {
    /// Mission TOML file
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in mission (used when no config file is given)
    #[arg(long, value_enum, default_value_t = MissionPreset::ConstantThrust)]
    preset: MissionPreset,
}

impl MissionArgs {
    fn resolve(&self) -> anyhow::Result<MissionConfig> {
        match &self.config {
            Some(path) => load_mission(path)
                .with_context(|| format!("failed to load mission from {}", path.display())),
            None => Ok(MissionFactory::create(self.preset)),
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate {
            mission,
            output,
            format,
        } => {
            let mission = mission.resolve()?;
            let result = AscentIntegrator::new(mission)?.run()?;
            let telemetry = Telemetry::from_flight(&result);
            telemetry.display_summary(&result);

            if let Some(path) = output {
                telemetry
                    .write_trajectory_file(&path, format)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), steps = telemetry.log.len(), "trajectory written");
            }
        }
        Command::FindPitch {
            mission,
            target_apogee,
            tolerance,
        } => {
            let mission = mission.resolve()?;
            let found = find_pitchover_angle(&mission, target_apogee, tolerance)?;
            println!("Pitchover Angle: {:.4}°", found.angle);
            println!("Apogee: {:.2} m", found.apogee_altitude);
            println!("Cutoff Altitude: {:.2} m", found.cutoff_altitude);
        }
    }

    Ok(())
}
