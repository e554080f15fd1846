//! Configuration loading and typed config structures.
//!
//! Configuration lives in a YAML file (`robocheck.yaml` by default). Every
//! field has a default, so an empty file, or no file at all, yields the
//! standard initial world with a full battery.
//!
//! ```yaml
//! world:
//!   initial_facts: [powered_off, battery_full, object_detected]
//!   starting_battery: 100
//! logging:
//!   level: info
//!   format: pretty
//! ```

use std::path::Path;

use robocheck_types::Fact;
use robocheck_world::{BatteryGauge, FULL_CHARGE, INITIAL_FACTS, WorldError, WorldState};
use serde::Deserialize;

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "ROBOCHECK_LOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configured world is inconsistent.
    #[error("invalid world configuration: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level verifier configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerifierConfig {
    /// Starting world for every verification run.
    #[serde(default)]
    pub world: WorldConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VerifierConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `ROBOCHECK_LOG` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::World`] if the configured world is inconsistent.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::World`] if the configured world is inconsistent.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.world.validate()?;
        Ok(config)
    }
}

/// The world each verification run starts from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Facts holding before the first action.
    #[serde(default = "default_initial_facts")]
    pub initial_facts: Vec<Fact>,

    /// Battery percentage before the first action (0--100).
    #[serde(default = "default_starting_battery")]
    pub starting_battery: u32,
}

impl WorldConfig {
    /// Check the configured world without building it.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the facts contradict each other or the
    /// battery level is out of range.
    pub fn validate(&self) -> Result<(), WorldError> {
        self.initial_world()?;
        self.starting_gauge()?;
        Ok(())
    }

    /// Build a fresh world from the configured facts.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ContradictoryFacts`] if both power facts are
    /// listed.
    pub fn initial_world(&self) -> Result<WorldState, WorldError> {
        WorldState::from_facts(self.initial_facts.iter().copied())
    }

    /// Build a battery gauge at the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BatteryOutOfRange`] above 100.
    pub const fn starting_gauge(&self) -> Result<BatteryGauge, WorldError> {
        BatteryGauge::new(self.starting_battery)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            initial_facts: default_initial_facts(),
            starting_battery: default_starting_battery(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Override the level from `ROBOCHECK_LOG` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_level_override(std::env::var(LOG_LEVEL_ENV).ok());
    }

    /// Replace the level with `level` if it is present and non-blank.
    pub fn apply_level_override(&mut self, level: Option<String>) {
        if let Some(level) = level.filter(|value| !value.trim().is_empty()) {
            self.level = level;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_initial_facts() -> Vec<Fact> {
    INITIAL_FACTS.to_vec()
}

const fn default_starting_battery() -> u32 {
    FULL_CHARGE
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_initial_world() {
        let config = VerifierConfig::default();
        assert_eq!(config.world.initial_world().ok(), Some(WorldState::new()));
        assert_eq!(config.world.starting_battery, 100);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = VerifierConfig::parse("").ok();
        assert_eq!(config, Some(VerifierConfig::default()));
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
world:
  initial_facts: [powered_on, scanned]
  starting_battery: 40
logging:
  level: debug
  format: json
";
        let config = VerifierConfig::parse(yaml).ok();
        let config = config.unwrap_or_default();
        assert_eq!(config.world.initial_facts, vec![Fact::PoweredOn, Fact::Scanned]);
        assert_eq!(config.world.starting_battery, 40);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "logging:\n  level: warn\n";
        let config = VerifierConfig::parse(yaml).unwrap_or_default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.world, WorldConfig::default());
    }

    #[test]
    fn unknown_fact_is_a_yaml_error() {
        let yaml = "world:\n  initial_facts: [levitating]\n";
        assert!(matches!(
            VerifierConfig::parse(yaml),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn contradictory_power_facts_rejected() {
        let yaml = "world:\n  initial_facts: [powered_on, powered_off]\n";
        assert!(matches!(
            VerifierConfig::parse(yaml),
            Err(ConfigError::World {
                source: WorldError::ContradictoryFacts { .. }
            })
        ));
    }

    #[test]
    fn overfull_battery_rejected() {
        let yaml = "world:\n  starting_battery: 150\n";
        assert!(matches!(
            VerifierConfig::parse(yaml),
            Err(ConfigError::World {
                source: WorldError::BatteryOutOfRange(150)
            })
        ));
    }

    #[test]
    fn level_override_ignores_blank_values() {
        let mut logging = LoggingConfig::default();
        logging.apply_level_override(Some(String::from("  ")));
        assert_eq!(logging.level, "info");
        logging.apply_level_override(None);
        assert_eq!(logging.level, "info");
        logging.apply_level_override(Some(String::from("trace")));
        assert_eq!(logging.level, "trace");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = VerifierConfig::from_file(Path::new("/nonexistent/robocheck.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
