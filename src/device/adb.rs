//! adb-backed installed-version lookup
//!
//! Queries the connected device with `adb shell dumpsys package <pkg>` for
//! each candidate package in order and takes the first one that reports a
//! `versionName=`. A missing adb binary or an unreachable device resolves to
//! no version, the same as no candidate being installed.

use std::process::Command;

use tracing::{debug, warn};

use crate::config::POKEMON_GO_PACKAGES;
use crate::device::provider::InstalledVersionProvider;

pub struct AdbVersionProvider {
    adb_path: String,
    packages: Vec<String>,
}

impl AdbVersionProvider {
    pub fn new(adb_path: &str) -> Self {
        Self {
            adb_path: adb_path.to_string(),
            packages: POKEMON_GO_PACKAGES.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn query_package(&self, package: &str) -> Option<String> {
        let output = Command::new(&self.adb_path)
            .args(["shell", "dumpsys", "package", package])
            .output()
            .inspect_err(|e| warn!("Failed to run {}: {}", self.adb_path, e))
            .ok()?;

        if !output.status.success() {
            debug!("dumpsys for {} exited with {}", package, output.status);
            return None;
        }

        parse_version_name(&String::from_utf8_lossy(&output.stdout))
    }
}

impl Default for AdbVersionProvider {
    fn default() -> Self {
        Self::new("adb")
    }
}

impl InstalledVersionProvider for AdbVersionProvider {
    fn installed_version(&self) -> Option<String> {
        for package in &self.packages {
            if let Some(version) = self.query_package(package) {
                debug!("Found package {} with version {}", package, version);
                return Some(version);
            }
            debug!("Package {} not found, trying next", package);
        }
        warn!("No Pokemon Go package found on device");
        None
    }
}

/// Pull the `versionName=` value out of dumpsys output. dumpsys prints
/// nothing useful for unknown packages, so absence of the line means the
/// package is not installed.
fn parse_version_name(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        line.trim()
            .strip_prefix("versionName=")
            .map(|v| v.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMPSYS_OUTPUT: &str = "\
Packages:
  Package [com.nianticlabs.pokemongo] (a1b2c3):
    userId=10234
    versionCode=2024111100 minSdk=26 targetSdk=33
    versionName=0.385.2
    splits=[base]
";

    #[test]
    fn parse_version_name_finds_the_indented_line() {
        assert_eq!(
            parse_version_name(DUMPSYS_OUTPUT),
            Some("0.385.2".to_string())
        );
    }

    #[test]
    fn parse_version_name_returns_none_for_unknown_package_output() {
        assert_eq!(parse_version_name("Unable to find package: foo\n"), None);
        assert_eq!(parse_version_name(""), None);
    }

    #[test]
    fn parse_version_name_ignores_version_code() {
        let output = "versionCode=2024111100\n";
        assert_eq!(parse_version_name(output), None);
    }

    #[test]
    fn missing_adb_binary_resolves_to_no_version() {
        let provider = AdbVersionProvider::new("/nonexistent/adb");
        assert_eq!(provider.installed_version(), None);
    }
}
