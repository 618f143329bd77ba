use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::errors::SimulationError;
use crate::trajectory_system::ballistics::BurnoutReport;
use crate::trajectory_system::kinematics::{FlightOutcome, FlightResult, StepRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrajectoryFormat {
    /// Comma-separated pitch angles, one per step.
    PitchLog,
    /// One CSV row per step with the full record.
    Csv,
}

#[derive(Serialize)]
struct CsvRow {
    time: f64,
    pitch_deg: f64,
    mass: f64,
    thrust: f64,
    accel_horizontal: f64,
    accel_vertical: f64,
    vel_horizontal: f64,
    vel_vertical: f64,
    altitude: f64,
}

impl From<&StepRecord> for CsvRow {
    fn from(record: &StepRecord) -> Self {
        CsvRow {
            time: record.time,
            pitch_deg: record.pitch_angle,
            mass: record.mass,
            thrust: record.thrust,
            accel_horizontal: record.acceleration.x,
            accel_vertical: record.acceleration.y,
            vel_horizontal: record.velocity.x,
            vel_vertical: record.velocity.y,
            altitude: record.altitude,
        }
    }
}

pub struct Telemetry {
    pub log: Vec<StepRecord>,
    max_velocity: f64,
    max_altitude: f64,
    max_acceleration: f64,
    min_pitch: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_velocity: 0.0,
            max_altitude: 0.0,
            max_acceleration: 0.0,
            min_pitch: f64::MAX,
        }
    }

    pub fn from_flight(result: &FlightResult) -> Self {
        let mut telemetry = Telemetry::new();
        for record in &result.trajectory {
            telemetry.collect_data(record);
        }
        telemetry
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(&mut self, record: &StepRecord) {
        self.max_velocity = self.max_velocity.max(record.velocity.magnitude());
        self.max_altitude = self.max_altitude.max(record.altitude);
        self.max_acceleration = self.max_acceleration.max(record.acceleration.magnitude());
        self.min_pitch = self.min_pitch.min(record.pitch_angle);
        self.log.push(*record);
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    pub fn min_pitch(&self) -> Option<f64> {
        (!self.log.is_empty()).then_some(self.min_pitch)
    }

    pub fn pitch_log(&self) -> String {
        self.log
            .iter()
            .map(|record| record.pitch_angle.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn write_pitch_log<W: Write>(&self, writer: &mut W) -> Result<(), SimulationError> {
        writer.write_all(self.pitch_log().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), SimulationError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &self.log {
            csv_writer.serialize(CsvRow::from(record))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    // Replaces any existing file
    pub fn write_trajectory_file<P: AsRef<Path>>(
        &self,
        path: P,
        format: TrajectoryFormat,
    ) -> Result<(), SimulationError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        match format {
            TrajectoryFormat::PitchLog => self.write_pitch_log(&mut writer),
            TrajectoryFormat::Csv => self.write_csv(writer),
        }
    }

    pub fn summary(result: &FlightResult) -> Vec<String> {
        let report: &BurnoutReport = &result.report;
        let mut lines = Vec::new();
        if result.outcome == FlightOutcome::GroundImpact {
            lines.push(format!("Ground impact at t+ {:.2}s", report.time));
        }
        lines.push(format!(
            "Altitude at cutoff: {}",
            Self::format_altitude(report.altitude)
        ));
        lines.push(format!(
            "Vertical speed at cutoff: {:.2} m/s",
            report.vertical_velocity
        ));
        lines.push(match report.total_speed {
            Some(speed) => format!("Total speed at cutoff: {:.2} m/s", speed),
            None => "Total speed at cutoff: undefined".to_string(),
        });
        lines.push(format!(
            "Alt to apogee: {}",
            Self::format_altitude(report.altitude_to_apogee)
        ));
        lines.push(format!(
            "Apogee altitude: {}",
            Self::format_altitude(report.apogee_altitude)
        ));
        lines
    }

    pub fn display_summary(&self, result: &FlightResult) {
        println!("--- Burnout Report ---");
        for line in Self::summary(result) {
            println!("{}", line);
        }
        println!("\n--- Flight Extremes ---");
        println!("Max Velocity: {:.2} m/s", self.max_velocity);
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        println!("Max Acceleration: {:.2} m/s²", self.max_acceleration);
        if let Some(pitch) = self.min_pitch() {
            println!("Min Pitch: {:.2}°", pitch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::mission::MissionFactory;
    use crate::trajectory_system::kinematics::AscentIntegrator;
    use crate::utils::vector2d::Vector2D;

    fn record(time: f64, pitch_angle: f64, altitude: f64) -> StepRecord {
        StepRecord {
            time,
            pitch_angle,
            mass: 1_000.0,
            thrust: 20_000.0,
            acceleration: Vector2D::new(3.0, 4.0),
            velocity: Vector2D::new(6.0, 8.0),
            altitude,
        }
    }

    #[test]
    fn test_collect_tracks_extremes() {
        let mut telemetry = Telemetry::new();
        assert_eq!(telemetry.min_pitch(), None);
        telemetry.collect_data(&record(0.0, 90.0, 10.0));
        telemetry.collect_data(&record(1.0, 60.5, 25.0));
        assert_eq!(telemetry.max_altitude(), 25.0);
        assert_eq!(telemetry.max_velocity(), 10.0);
        assert_eq!(telemetry.max_acceleration(), 5.0);
        assert_eq!(telemetry.min_pitch(), Some(60.5));
    }

    #[test]
    fn test_pitch_log_format() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&record(0.0, 90.0, 1.0));
        telemetry.collect_data(&record(1.0, 89.9, 2.0));
        telemetry.collect_data(&record(2.0, 89.25, 3.0));
        assert_eq!(telemetry.pitch_log(), "90, 89.9, 89.25");

        let mut buffer = Vec::new();
        telemetry.write_pitch_log(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "90, 89.9, 89.25");
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&record(0.0, 90.0, 1.0));
        telemetry.collect_data(&record(1.0, 89.9, 2.0));

        let mut buffer = Vec::new();
        telemetry.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("time,pitch_deg,mass,thrust"));
        assert!(lines[2].starts_with("1.0,89.9,"));
    }

    #[test]
    fn test_write_trajectory_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simOutput.txt");
        std::fs::write(&path, "stale contents that are longer than the log").unwrap();

        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&record(0.0, 90.0, 1.0));
        telemetry
            .write_trajectory_file(&path, TrajectoryFormat::PitchLog)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "90");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("simOutput.txt");
        let telemetry = Telemetry::new();
        assert!(matches!(
            telemetry.write_trajectory_file(&path, TrajectoryFormat::Csv),
            Err(SimulationError::Io(_))
        ));
    }

    #[test]
    fn test_summary_lines() {
        let result = AscentIntegrator::new(MissionFactory::create_constant_thrust())
            .unwrap()
            .run()
            .unwrap();
        let lines = Telemetry::summary(&result);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Altitude at cutoff: "));
        assert!(lines[2].starts_with("Total speed at cutoff: "));
        assert!(lines[4].starts_with("Apogee altitude: "));

        let telemetry = Telemetry::from_flight(&result);
        assert_eq!(telemetry.log.len(), result.trajectory.len());
    }
}
