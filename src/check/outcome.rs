use thiserror::Error;

/// Result of one version check
///
/// Created once per pipeline invocation and never mutated. Nothing is
/// persisted between runs; callers act on the value and drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Version of the installed Pokemon Go app
    pub installed_version: String,
    /// Version advertised as supported by the site
    pub latest_version: String,
    /// True when the advertised version is strictly newer
    pub update_available: bool,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("could not determine latest version")]
    LatestVersionUnavailable,

    #[error("Pokemon Go app not found")]
    InstalledVersionNotFound,
}
