//! Typed Taskboard configuration

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use taskboard_dnd::SensorConfig;

/// Default root of the board API
pub const DEFAULT_API_ROOT: &str = "http://localhost:8017";

/// Effective Taskboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    /// Root URL of the board API, without a trailing slash
    pub api_root: String,
    /// Drag activation constraints
    pub sensors: SensorConfig,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            sensors: SensorConfig::default(),
        }
    }
}

impl TaskboardConfig {
    /// Check every value, normalizing `api_root`
    pub fn validate(mut self) -> ConfigResult<Self> {
        let trimmed = self.api_root.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::invalid_value("api_root", "must not be empty"));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::invalid_value(
                "api_root",
                format!("must be an http(s) URL, got '{}'", trimmed),
            ));
        }
        self.api_root = trimmed.to_string();
        self.sensors.validate()?;
        Ok(self)
    }
}

/// Values given on the command line; `None` fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_root: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.api_root.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TaskboardConfig::default().validate().unwrap();
        assert_eq!(config.api_root, DEFAULT_API_ROOT);
        assert_eq!(config.sensors.pointer.distance, 10.0);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = TaskboardConfig {
            api_root: "https://boards.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap().api_root,
            "https://boards.example.com"
        );
    }

    #[test]
    fn test_rejects_bad_api_root() {
        for root in ["", "  ", "ftp://nope"] {
            let config = TaskboardConfig {
                api_root: root.into(),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidValue { key, .. }) if key == "api_root"
            ));
        }
    }

    #[test]
    fn test_rejects_bad_sensor() {
        let mut config = TaskboardConfig::default();
        config.sensors.touch.tolerance = -3.0;
        assert!(config.validate().is_err());
    }
}
