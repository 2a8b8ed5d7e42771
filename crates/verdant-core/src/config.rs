//! Configuration loading and typed config structures for Verdant.
//!
//! The optional configuration file is `verdant-config.yaml`. Every section
//! and field has a default, so an empty or missing file yields a working
//! garden.

use std::path::Path;

use serde::Deserialize;

/// Why `verdant-config.yaml` could not be turned into a [`GardenConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The garden config file exists but could not be read.
    #[error("cannot read garden config: {source}")]
    Io {
        /// Error from the filesystem.
        #[from]
        source: std::io::Error,
    },

    /// The garden config is not valid YAML or has a field of the wrong type.
    #[error("invalid garden config: {source}")]
    Yaml {
        /// Error from the YAML deserializer.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GardenConfig {
    /// Engine settings.
    #[serde(default)]
    pub garden: GardenSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Headless run boundaries.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Autopilot thresholds for the headless runner.
    #[serde(default)]
    pub caretaker: CaretakerConfig,
}

impl GardenConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GardenSettings {
    /// Seed for the daily dice. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Boundaries for a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Stop after this many days even if the plant is still alive.
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
        }
    }
}

/// Thresholds the headless caretaker acts on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaretakerConfig {
    /// Water while the level is below this.
    #[serde(default = "default_water_below")]
    pub water_below: u32,

    /// Feed while nutrients are below this.
    #[serde(default = "default_nutrients_below")]
    pub nutrients_below: u32,

    /// Cut diseased leaves at or above this progress.
    #[serde(default = "default_cut_at_progress")]
    pub cut_at_progress: u32,

    /// Spray pesticide when infested.
    #[serde(default = "default_true")]
    pub treat_pests: bool,
}

impl Default for CaretakerConfig {
    fn default() -> Self {
        Self {
            water_below: default_water_below(),
            nutrients_below: default_nutrients_below(),
            cut_at_progress: default_cut_at_progress(),
            treat_pests: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_max_days() -> u32 {
    120
}

const fn default_water_below() -> u32 {
    40
}

const fn default_nutrients_below() -> u32 {
    35
}

const fn default_cut_at_progress() -> u32 {
    50
}

const fn default_true() -> bool {
    true
}
