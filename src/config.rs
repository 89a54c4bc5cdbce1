use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Registry defaults
// =============================================================================

/// Google's Maven repository, consulted first
pub const DEFAULT_PRIMARY_URL: &str = "https://dl.google.com/dl/android/maven2";

/// Maven Central, consulted for groups or artifacts the primary lacks
pub const DEFAULT_SECONDARY_URL: &str = "https://repo1.maven.org/maven2";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Per-project configuration file, looked up in the scanned root
pub const PROJECT_CONFIG_FILE: &str = ".gradle-bump.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub registries: RegistriesConfig,
    pub files: FilesConfig,
}

/// Registry endpoints and transport settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistriesConfig {
    /// Base URL of the registry publishing group indexes
    pub primary: String,
    /// Base URL of the per-artifact fallback registry
    pub secondary: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RegistriesConfig {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_URL.to_string(),
            secondary: DEFAULT_SECONDARY_URL.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

/// Which files to scan
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FilesConfig {
    /// Exact file names treated as build files
    pub names: Vec<String>,
    /// Directory names never descended into
    pub skip_dirs: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            names: vec!["build.gradle".to_string()],
            skip_dirs: vec!["build".to_string(), "src".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configuration for a run rooted at `root`
    ///
    /// Uses `explicit` if given, otherwise the project file in `root`, otherwise
    /// the user config file, otherwise defaults.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidates = [root.join(PROJECT_CONFIG_FILE), user_config_path()];
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Returns the path to the user-wide config file.
/// Uses $XDG_CONFIG_HOME/gradle-bump/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/gradle-bump/config.json,
/// or ./gradle-bump/config.json if neither is available.
pub fn user_config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir()).join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("gradle-bump")
}
