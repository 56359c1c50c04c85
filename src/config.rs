use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config file: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// Network constants
// =============================================================================

/// Site advertising the supported Pokemon Go version
pub const PGSHARP_URL: &str = "https://pgsharp.com";

/// Path of the fallback page on the same host
pub const DOWNLOAD_PATH: &str = "/download";

/// Timeout for a single page fetch in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 15;

/// Browser-like user agent; the site blocks obvious automated clients
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// =============================================================================
// Scheduling constants
// =============================================================================

/// Default interval between automatic checks in hours
pub const DEFAULT_CHECK_INTERVAL_HOURS: u64 = 12;

// =============================================================================
// Device constants
// =============================================================================

/// Candidate package names for the installed Pokemon Go app, in probe order.
/// PGSharp patches the official app in place, so most devices carry the
/// official package id.
pub const POKEMON_GO_PACKAGES: &[&str] = &[
    "com.nianticlabs.pokemongo",
    "com.pgsharp.pokemongo",
    "com.nianticproject.holoholo",
];

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Base URL of the site to scrape
    pub site_url: String,
    /// Interval between automatic checks in hours
    pub check_interval_hours: u64,
    /// Path to the adb binary used to query the device
    pub adb_path: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            site_url: PGSHARP_URL.to_string(),
            check_interval_hours: DEFAULT_CHECK_INTERVAL_HOURS,
            adb_path: "adb".to_string(),
        }
    }
}

impl CheckerConfig {
    /// Loads configuration from the given JSON file, falling back to defaults
    /// when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Returns the path to the data directory for pgsharp-checker.
/// Uses $XDG_DATA_HOME/pgsharp-checker if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/pgsharp-checker,
/// or ./pgsharp-checker if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Returns the path to the preferences file.
pub fn prefs_path() -> PathBuf {
    data_dir().join("prefs.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("pgsharp-checker.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("pgsharp-checker")
}
