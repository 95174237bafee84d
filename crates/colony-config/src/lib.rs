//! Configuration system for the colony allocator.
//!
//! Load run settings from TOML or YAML files to control limits, output and
//! logging without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use colony_config::{ColonyConfig, OutputFormat};
//!
//! let config = ColonyConfig::from_toml_str(r#"
//!     input = "colony.txt"
//!
//!     [limits]
//!     max_colonists = 10
//!
//!     [output]
//!     format = "json"
//!     color = false
//! "#).unwrap();
//!
//! assert_eq!(config.limits.max_colonists, 10);
//! assert_eq!(config.output.format, OutputFormat::Json);
//! ```
//!
//! Use the defaults when the file does not exist:
//!
//! ```
//! use colony_config::ColonyConfig;
//!
//! let config = ColonyConfig::load_optional("no-such-colony.toml").unwrap();
//! assert_eq!(config.limits.max_colonists, 26);
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use colony_core::MAX_COLONISTS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ColonyConfig {
    /// Colony fact file used when none is given on the command line.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Size limits.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Output rendering.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging setup.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ColonyConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or holds
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Like [`ColonyConfig::load`], but returns the defaults when the file
    /// does not exist. Any other failure is still reported.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()
    }

    /// Sets the default input file.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Sets the colonist limit.
    pub fn with_max_colonists(mut self, max: usize) -> Self {
        self.limits.max_colonists = max;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }

    /// Enables or disables colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.output.color = color;
        self
    }

    /// Sets the default log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let max = self.limits.max_colonists;
        if max == 0 || max > MAX_COLONISTS {
            return Err(ConfigError::Invalid(format!(
                "limits.max_colonists must be between 1 and {MAX_COLONISTS}, got {max}"
            )));
        }
        Ok(self)
    }
}

/// Size limits applied when reading or entering a colony.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LimitsConfig {
    /// Maximum number of colonists in one colony.
    #[serde(default = "default_max_colonists")]
    pub max_colonists: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_colonists: default_max_colonists(),
        }
    }
}

fn default_max_colonists() -> usize {
    MAX_COLONISTS
}

/// Output format for allocation reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Text,

    /// Machine-readable JSON document.
    Json,
}

/// Output rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether to use ANSI colors in text output.
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "colony_core=info".to_string()
}
