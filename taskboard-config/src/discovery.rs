//! Configuration file discovery
//!
//! Looks for `config.{toml,yaml,yml,json}` in the global `~/.taskboard/`
//! directory and the project `./.taskboard/` directory.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Name of the configuration directory in both scopes
pub const CONFIG_DIR_NAME: &str = ".taskboard";

const FILE_NAMES: [&str; 4] = ["config.toml", "config.yaml", "config.yml", "config.json"];

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
}

impl ConfigFile {
    /// Classify a path by extension; `None` if the format is unknown
    pub fn from_path(path: impl Into<PathBuf>, scope: ConfigScope) -> Option<Self> {
        let path = path.into();
        let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
        Some(Self {
            path,
            format,
            scope,
        })
    }
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where a configuration file was found. Later scopes override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    Global,
    Project,
    /// Given explicitly on the command line
    Explicit,
}

/// Finds configuration files in the global and project directories
#[derive(Debug, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Discovery rooted at the current directory and the home directory,
    /// resolved when [`discover_all`](Self::discover_all) runs
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery with fixed directories
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// All configuration files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let global_dir = self.global_dir.clone().or_else(resolve_global_dir);
        let project_dir = self.project_dir.clone().or_else(resolve_project_dir);

        let mut files = Vec::new();
        if let Some(dir) = &global_dir {
            files.extend(search_directory(dir, ConfigScope::Global));
        }
        if let Some(dir) = &project_dir {
            files.extend(search_directory(dir, ConfigScope::Project));
        }

        debug!("Discovered {} configuration files", files.len());
        for file in &files {
            trace!("Found config: {} ({:?})", file.path.display(), file.format);
        }
        files
    }
}

fn search_directory(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
    if !dir.exists() {
        trace!("Directory does not exist: {}", dir.display());
        return Vec::new();
    }
    if !dir.is_dir() {
        warn!("Path exists but is not a directory: {}", dir.display());
        return Vec::new();
    }

    FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .filter(|candidate| candidate.is_file())
        .filter_map(|candidate| ConfigFile::from_path(candidate, scope))
        .collect()
}

fn resolve_project_dir() -> Option<PathBuf> {
    let dir = std::env::current_dir().ok()?.join(CONFIG_DIR_NAME);
    dir.is_dir().then_some(dir)
}

fn resolve_global_dir() -> Option<PathBuf> {
    let dir = dirs::home_dir()?.join(CONFIG_DIR_NAME);
    dir.is_dir().then_some(dir)
}
