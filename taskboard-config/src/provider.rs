//! Configuration provider using Figment for Taskboard

use crate::discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
use crate::error::{ConfigError, ConfigResult};
use crate::types::{ConfigOverrides, TaskboardConfig};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::Path;
use tracing::{debug, trace};

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Loads configuration from every source in precedence order.
///
/// Nothing is cached; each load reads the files again.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
    explicit: Option<ConfigFile>,
    overrides: ConfigOverrides,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom file discovery
    pub fn with_discovery(mut self, discovery: FileDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Also load this file, above every discovered one
    pub fn with_file(mut self, path: &Path) -> ConfigResult<Self> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = ConfigFile::from_path(path, ConfigScope::Explicit).ok_or_else(|| {
            ConfigError::invalid_value(
                "config",
                format!("unsupported file format: {}", path.display()),
            )
        })?;
        self.explicit = Some(file);
        Ok(self)
    }

    /// Command-line values, applied last
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load and validate the effective configuration
    pub fn load(&self) -> ConfigResult<TaskboardConfig> {
        let config: TaskboardConfig = self.build_figment().extract()?;
        let config = config.validate()?;
        debug!(api_root = %config.api_root, "configuration loaded");
        Ok(config)
    }

    /// Sources in precedence order (later sources override earlier ones):
    /// 1. Default values
    /// 2. Discovered configuration files (global, then project)
    /// 3. An explicit configuration file
    /// 4. Environment variables (`TASKBOARD_` prefix, `__` for nesting)
    /// 5. Command line overrides
    pub fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(TaskboardConfig::default()));

        let discovered = self.discovery.discover_all();
        for file in discovered.iter().chain(&self.explicit) {
            trace!(
                "Loading config file: {} ({:?})",
                file.path.display(),
                file.format
            );
            figment = figment.merge(file_provider(file));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if !self.overrides.is_empty() {
            figment = figment.merge(Serialized::defaults(&self.overrides));
        }
        figment
    }
}

fn file_provider(file: &ConfigFile) -> Figment {
    match file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(&file.path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(&file.path)),
        ConfigFormat::Json => Figment::from(Json::file(&file.path)),
    }
}

/// Load configuration from the standard locations
pub fn load_configuration() -> ConfigResult<TaskboardConfig> {
    ConfigProvider::new().load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn isolated(project: &TempDir, global: &TempDir) -> ConfigProvider {
        ConfigProvider::new().with_discovery(FileDiscovery::with_directories(
            Some(project.path().to_path_buf()),
            Some(global.path().to_path_buf()),
        ))
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let config = isolated(&project, &global).load().unwrap();
        assert_eq!(config, TaskboardConfig::default());
    }

    #[test]
    #[serial]
    fn test_project_overrides_global() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            global.path().join("config.toml"),
            "api_root = \"http://global:1\"\n[sensors.pointer]\ndistance = 4\n",
        )
        .unwrap();
        fs::write(
            project.path().join("config.yaml"),
            "api_root: http://project:2\n",
        )
        .unwrap();

        let config = isolated(&project, &global).load().unwrap();
        assert_eq!(config.api_root, "http://project:2");
        assert_eq!(config.sensors.pointer.distance, 4.0);
        assert_eq!(config.sensors.touch.delay_ms, 250);
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            project.path().join("config.json"),
            r#"{"api_root": "http://file"}"#,
        )
        .unwrap();

        std::env::set_var("TASKBOARD_API_ROOT", "http://env:9");
        std::env::set_var("TASKBOARD_SENSORS__TOUCH__DELAY_MS", "100");
        let result = isolated(&project, &global).load();
        std::env::remove_var("TASKBOARD_API_ROOT");
        std::env::remove_var("TASKBOARD_SENSORS__TOUCH__DELAY_MS");

        let config = result.unwrap();
        assert_eq!(config.api_root, "http://env:9");
        assert_eq!(config.sensors.touch.delay_ms, 100);
    }

    #[test]
    #[serial]
    fn test_overrides_win() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let config = isolated(&project, &global)
            .with_overrides(ConfigOverrides {
                api_root: Some("https://cli.example".into()),
            })
            .load()
            .unwrap();
        assert_eq!(config.api_root, "https://cli.example");
    }

    #[test]
    #[serial]
    fn test_explicit_file() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let extra = project.path().join("custom.yml");
        fs::write(&extra, "sensors:\n  pointer:\n    distance: 2.5\n").unwrap();

        let config = isolated(&project, &global)
            .with_file(&extra)
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(config.sensors.pointer.distance, 2.5);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = ConfigProvider::new().with_file(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    #[serial]
    fn test_invalid_value_is_reported() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(project.path().join("config.toml"), "api_root = \"\"\n").unwrap();
        assert!(matches!(
            isolated(&project, &global).load(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_a_parse_error() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(project.path().join("config.toml"), "sensors = 12\n").unwrap();
        assert!(matches!(
            isolated(&project, &global).load(),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
