//! Simulator configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock simulator: five rows `P1..P5` and a 500-unit limit.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inclusive upper bound for arrival and burst times.
pub const MAX_TIME_UNIT: i64 = 500;

/// Largest `max_time_unit` a configuration may set.
///
/// Keeps every completion time (at most `2 * limit * rows`) far from `i64`
/// overflow and the rendered chart within a terminal's reach.
pub const MAX_TIME_UNIT_CEILING: i64 = 1_000_000;

/// Number of blank rows in a fresh process table.
pub const DEFAULT_PROCESS_ROWS: usize = 5;

/// Prefix of generated process ids (`P1`, `P2`, ...).
pub const DEFAULT_ID_PREFIX: &str = "P";

/// Tunable simulator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Inclusive upper bound for arrival and burst times.
    pub max_time_unit: i64,
    /// Rows created on startup and on reset.
    pub default_rows: usize,
    /// Prefix for generated process ids.
    pub id_prefix: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_time_unit: MAX_TIME_UNIT,
            default_rows: DEFAULT_PROCESS_ROWS,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl SimulatorConfig {
    /// Sets the time unit limit.
    pub fn with_max_time_unit(mut self, max_time_unit: i64) -> Self {
        self.max_time_unit = max_time_unit;
        self
    }

    /// Sets the number of default rows.
    pub fn with_default_rows(mut self, rows: usize) -> Self {
        self.default_rows = rows;
        self
    }

    /// Sets the generated id prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks that the settings describe a usable simulator.
    pub fn validate(&self) -> Result<()> {
        if self.max_time_unit < 1 {
            return Err(Error::Config(format!(
                "max_time_unit must be at least 1, got {}",
                self.max_time_unit
            )));
        }
        if self.max_time_unit > MAX_TIME_UNIT_CEILING {
            return Err(Error::Config(format!(
                "max_time_unit must be at most {MAX_TIME_UNIT_CEILING}, got {}",
                self.max_time_unit
            )));
        }
        if self.default_rows == 0 {
            return Err(Error::Config("default_rows must be at least 1".into()));
        }
        if self.id_prefix.trim().is_empty() {
            return Err(Error::Config("id_prefix cannot be empty".into()));
        }
        Ok(())
    }

    /// Generated id for the 0-based row `index`.
    pub fn process_id(&self, index: usize) -> String {
        format!("{}{}", self.id_prefix, index + 1)
    }

    /// Maximum number of characters a time field may hold.
    pub fn max_field_len(&self) -> usize {
        self.max_time_unit.to_string().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulatorConfig::default();
        assert_eq!(c.max_time_unit, 500);
        assert_eq!(c.default_rows, 5);
        assert_eq!(c.process_id(0), "P1");
        assert_eq!(c.max_field_len(), 3);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c = SimulatorConfig::from_json_str(r#"{"max_time_unit": 1000}"#).unwrap();
        assert_eq!(c.max_time_unit, 1000);
        assert_eq!(c.default_rows, 5);
        assert_eq!(c.id_prefix, "P");
        assert_eq!(c.max_field_len(), 4);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            SimulatorConfig::from_json_str(r#"{"max_time_unit": 0}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            SimulatorConfig::from_json_str(r#"{"default_rows": 0}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            SimulatorConfig::default().with_id_prefix(" ").validate(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_time_limit_ceiling() {
        assert!(matches!(
            SimulatorConfig::from_json_str(r#"{"max_time_unit": 1000000000000}"#),
            Err(Error::Config(_))
        ));
        assert!(SimulatorConfig::default()
            .with_max_time_unit(MAX_TIME_UNIT_CEILING)
            .validate()
            .is_ok());
        assert!(SimulatorConfig::default()
            .with_max_time_unit(MAX_TIME_UNIT_CEILING + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SimulatorConfig::from_json_str("{"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_custom_prefix() {
        let c = SimulatorConfig::default().with_id_prefix("Job");
        assert_eq!(c.process_id(2), "Job3");
    }
}
