use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::impact::{ImpactParameters, ImpactResult};
use crate::orbital::OrbitalState;
use crate::physics::PerturbationConfig;
use crate::types::Vec3;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { field, value })
    }
}

fn finite_vec(fields: [&'static str; 3], v: &Vec3) -> Result<()> {
    finite(fields[0], v.x)?;
    finite(fields[1], v.y)?;
    finite(fields[2], v.z)
}

/// Reject NaN/infinite entry conditions.
pub fn validate_impact_parameters(p: &ImpactParameters) -> Result<()> {
    finite("diameter", p.diameter)?;
    finite("velocity", p.velocity)?;
    finite("angle", p.angle)?;
    finite("altitude", p.altitude)
}

pub fn validate_orbital_state(s: &OrbitalState) -> Result<()> {
    finite_vec(["position.x", "position.y", "position.z"], &s.position)?;
    finite_vec(["velocity.x", "velocity.y", "velocity.z"], &s.velocity)
}

pub fn validate_perturbation_config(cfg: &PerturbationConfig) -> Result<()> {
    let props = &cfg.object_properties;
    finite("objectProperties.mass", props.mass)?;
    finite("objectProperties.area", props.area)?;
    finite("objectProperties.dragCoefficient", props.drag_coefficient)?;
    finite("objectProperties.reflectivity", props.reflectivity)
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn parse<T: DeserializeOwned>(json: &str, validate: fn(&T) -> Result<()>) -> Result<T> {
    let value: T = serde_json::from_str(json)?;
    validate(&value)?;
    Ok(value)
}

pub fn parse_impact_parameters(json: &str) -> Result<ImpactParameters> {
    parse(json, validate_impact_parameters)
}

pub fn parse_orbital_state(json: &str) -> Result<OrbitalState> {
    parse(json, validate_orbital_state)
}

pub fn parse_perturbation_config(json: &str) -> Result<PerturbationConfig> {
    parse(json, validate_perturbation_config)
}

pub fn read_impact_parameters<P: AsRef<Path>>(path: P) -> Result<ImpactParameters> {
    let text = std::fs::read_to_string(path)?;
    parse_impact_parameters(&text)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Write an impact report as pretty-printed JSON.
pub fn write_report<W: Write>(writer: &mut W, result: &ImpactResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_report_file<P: AsRef<Path>>(path: P, result: &ImpactResult) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_report(&mut file, result)?;
    file.flush()?;
    Ok(())
}

/// Write a trajectory as a JSON array of `{position, velocity}` objects.
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[OrbitalState]) -> Result<()> {
    serde_json::to_writer(&mut *writer, trajectory)?;
    writeln!(writer)?;
    Ok(())
}
