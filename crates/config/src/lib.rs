//! Configuration models and loaders for the transit engine.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Body configuration parsed from world manifests.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    /// Name of the body this one orbits; absent means it orbits the
    /// primary star directly.
    #[serde(default)]
    pub parent: Option<String>,
    pub motion: BodyMotionConfig,
}

/// Motion variants in world manifests. Legacy bodies keep a fixed plot.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum BodyMotionConfig {
    #[serde(rename = "orbiting")]
    Orbiting {
        orbital_radius_km: f64,
        #[serde(default)]
        eccentricity: f64,
        orbital_period_s: f64,
        #[serde(default)]
        initial_angle_rad: f64,
    },
    #[serde(rename = "fixed")]
    Fixed { x_km: f64, y_km: f64 },
}

/// Ship-class configuration parsed from fleet catalogs.
#[derive(Debug, Deserialize, Clone)]
pub struct ShipClassConfig {
    pub name: String,
    pub dry_mass_kg: f64,
    pub propellant_mass_kg: f64,
    pub thrust_newtons: f64,
    pub isp_seconds: f64,
    /// Rated delta-v ceiling; absent means the mass ratio is the only limit.
    #[serde(default)]
    pub max_delta_v_m_s: Option<f64>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load body configurations from a YAML file, a TOML file, or a directory
/// of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load ship-class configurations from a YAML file, a TOML file, or a
/// directory of TOML files.
pub fn load_ship_classes<P: AsRef<Path>>(path: P) -> Result<Vec<ShipClassConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
