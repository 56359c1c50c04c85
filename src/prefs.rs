//! Persisted user preferences

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to access preferences file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed preferences file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// User preferences, stored as JSON in the data directory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// Whether the watch loop should run checks
    pub auto_check_enabled: bool,
}

impl Preferences {
    /// Loads preferences from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Stores preferences at `path`, creating parent directories as needed.
    pub fn store(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let prefs = Preferences::load(Path::new("/nonexistent/prefs.json")).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert!(!prefs.auto_check_enabled);
    }

    #[test]
    fn store_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/prefs.json");

        let prefs = Preferences {
            auto_check_enabled: true,
        };
        prefs.store(&path).unwrap();

        let loaded = Preferences::load(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Preferences::load(&path);
        assert!(matches!(result, Err(PrefsError::Malformed(_))));
    }
}
