//! Installed-version lookup seam

#[cfg(test)]
use mockall::automock;

/// Trait for looking up the installed Pokemon Go version
#[cfg_attr(test, automock)]
pub trait InstalledVersionProvider: Send + Sync {
    /// Returns the version of the first candidate package found on the
    /// device, or `None` when no candidate is installed.
    fn installed_version(&self) -> Option<String>;
}

/// Provider that always reports a fixed version, for the `--installed`
/// override and for tests.
pub struct FixedVersionProvider {
    version: String,
}

impl FixedVersionProvider {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
        }
    }
}

impl InstalledVersionProvider for FixedVersionProvider {
    fn installed_version(&self) -> Option<String> {
        Some(self.version.clone())
    }
}
