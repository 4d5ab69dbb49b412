//! Taskboard configuration management using Figment
//!
//! Settings are layered with clear precedence:
//! defaults → global → project → explicit file → env → CLI.
//!
//! - Global: `~/.taskboard/config.{toml,yaml,yml,json}`
//! - Project: `./.taskboard/config.{toml,yaml,yml,json}`
//! - Environment: `TASKBOARD_` prefix, `__` for nesting
//!   (`TASKBOARD_SENSORS__TOUCH__DELAY_MS=300`)
//!
//! Nothing is cached: every load reads the sources again.
//!
//! ```no_run
//! use taskboard_config::load_configuration;
//!
//! let config = load_configuration()?;
//! println!("boards are served from {}", config.api_root);
//! # Ok::<(), taskboard_config::ConfigError>(())
//! ```
//!
//! ## Example TOML configuration
//!
//! ```toml
//! api_root = "https://boards.example.com"
//!
//! [sensors.pointer]
//! distance = 10
//!
//! [sensors.touch]
//! delay_ms = 250
//! tolerance = 500
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery, CONFIG_DIR_NAME};
pub use error::{ConfigError, ConfigResult};
pub use provider::{load_configuration, ConfigProvider, ENV_PREFIX};
pub use types::{ConfigOverrides, TaskboardConfig, DEFAULT_API_ROOT};
