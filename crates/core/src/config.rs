//! Configuration for seeding and presenting a dashboard

use crate::Result;
use crate::validation::{ValidateConfig, validators};
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CamgridConfig {
    /// Mock data generation
    pub seed: SeedConfig,

    /// How results are printed
    pub output: OutputConfig,
}

/// Mock data generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Fixed RNG seed; a random one is drawn when absent
    pub rng_seed: Option<u64>,

    /// Number of locations
    pub locations: usize,

    /// Smallest number of cameras per location
    pub min_cameras_per_location: usize,

    /// Largest number of cameras per location
    pub max_cameras_per_location: usize,

    /// Number of seeded users
    pub users: usize,

    /// Chance that a camera has cloud recording enabled
    pub cloud_recording_probability: f64,

    /// Chance that a camera has license-plate detection enabled
    pub plate_detection_probability: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            locations: 3,
            min_cameras_per_location: 3,
            max_cameras_per_location: 6,
            users: 3,
            cloud_recording_probability: 0.5,
            plate_detection_probability: 0.3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

impl ValidateConfig for CamgridConfig {
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.seed.validate()
    }
}

impl ValidateConfig for SeedConfig {
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        validators::validate_min(self.locations, 1, "seed.locations")?;
        validators::validate_ordered(
            self.min_cameras_per_location,
            self.max_cameras_per_location,
            "seed.min_cameras_per_location",
            "seed.max_cameras_per_location",
        )?;
        validators::validate_probability(
            self.cloud_recording_probability,
            "seed.cloud_recording_probability",
        )?;
        validators::validate_probability(
            self.plate_detection_probability,
            "seed.plate_detection_probability",
        )?;
        Ok(())
    }
}

impl CamgridConfig {
    /// Load configuration from defaults, an optional file and `CAMGRID_*` environment variables
    ///
    /// Nested keys use a double underscore, e.g. `CAMGRID_SEED__LOCATIONS=5`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the result fails validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Self::environment())
    }

    /// `CAMGRID_SEED__LOCATIONS` maps to `seed.locations`
    fn environment() -> config::Environment {
        config::Environment::with_prefix("CAMGRID")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("seed.locations", defaults.seed.locations as u64)?
            .set_default(
                "seed.min_cameras_per_location",
                defaults.seed.min_cameras_per_location as u64,
            )?
            .set_default(
                "seed.max_cameras_per_location",
                defaults.seed.max_cameras_per_location as u64,
            )?
            .set_default("seed.users", defaults.seed.users as u64)?
            .set_default(
                "seed.cloud_recording_probability",
                defaults.seed.cloud_recording_probability,
            )?
            .set_default(
                "seed.plate_detection_probability",
                defaults.seed.plate_detection_probability,
            )?
            .set_default("output.format", "table")?
            .set_default("output.pretty", defaults.output.pretty)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder.add_source(environment).build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
