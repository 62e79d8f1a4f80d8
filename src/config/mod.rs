//! Board configuration
//!
//! Runtime knobs loaded from an optional JSON file. Every field has a
//! default, so a partial file (or no file at all) always yields a working
//! configuration.

mod loader;

pub use loader::{config_path, load_config, load_config_from};

use serde::{Deserialize, Serialize};

use crate::domain::CreationRules;
use crate::errors::{LanekitError, Result};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "lanekit.json";

/// Main configuration for the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Milliseconds between event polls in the board loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Constants behind the project-creation rules
    #[serde(default)]
    pub rules: CreationRules,
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            tick_rate_ms: default_tick_rate_ms(),
            rules: CreationRules::default(),
        }
    }
}

impl BoardConfig {
    /// Check cross-field consistency serde defaults cannot express
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(LanekitError::ConfigError(
                "tick_rate_ms must be at least 1".to_string(),
            ));
        }
        if self.rules.people_min > self.rules.people_max {
            return Err(LanekitError::ConfigError(format!(
                "people_min ({}) exceeds people_max ({})",
                self.rules.people_min, self.rules.people_max
            )));
        }
        // The model stores the head count as an unsigned number
        if self.rules.people_min < 0 {
            return Err(LanekitError::ConfigError(format!(
                "people_min ({}) must not be negative",
                self.rules.people_min
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.rules.description_min_length, 5);
        assert_eq!(config.rules.people_min, 1);
        assert_eq!(config.rules.people_max, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"rules": {"people_max": 9}}"#;
        let config: BoardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.rules.people_max, 9);
        assert_eq!(config.rules.people_min, 1);
    }

    #[test]
    fn test_empty_json_is_all_defaults() {
        let config: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_validate_rejects_inverted_people_range() {
        let config = BoardConfig {
            rules: CreationRules {
                people_min: 6,
                people_max: 2,
                ..Default::default()
            },
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert_eq!(error.code(), "CONFIG_ERROR");
        assert!(error.to_string().contains("exceeds"));
    }

    #[test]
    fn test_validate_rejects_zero_tick_rate() {
        let config = BoardConfig {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_people_min() {
        let config = BoardConfig {
            rules: CreationRules {
                people_min: -1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = BoardConfig {
            tick_rate_ms: 50,
            rules: CreationRules {
                description_min_length: 10,
                people_min: 2,
                people_max: 8,
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
