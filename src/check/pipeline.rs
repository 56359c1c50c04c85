//! Version check orchestration
//!
//! One run is strictly sequential: fetch the primary page, reduce it to
//! visible text, extract; only when that definitively fails, fetch the
//! fallback page and extract again with the same pattern set; then compare
//! against the installed version. No retries and no side effects beyond the
//! network reads.

use std::sync::Arc;

use tracing::{info, warn};

use crate::check::outcome::{CheckError, CheckOutcome};
use crate::config::DOWNLOAD_PATH;
use crate::version::extract::{ExtractionPattern, default_patterns, extract_version};
use crate::version::ordering::is_update_available;
use crate::web::fetcher::PageFetcher;
use crate::web::text::visible_text;

pub struct VersionCheckPipeline {
    fetcher: Arc<dyn PageFetcher>,
    primary_url: String,
    fallback_url: String,
    patterns: Vec<ExtractionPattern>,
}

impl VersionCheckPipeline {
    /// Creates a pipeline for the given site. The fallback source is the
    /// site's download page.
    pub fn new(fetcher: Arc<dyn PageFetcher>, site_url: &str) -> Self {
        let base = site_url.trim_end_matches('/');
        Self::with_sources(fetcher, base.to_string(), format!("{base}{DOWNLOAD_PATH}"))
    }

    /// Creates a pipeline with explicit primary and fallback URLs.
    pub fn with_sources(
        fetcher: Arc<dyn PageFetcher>,
        primary_url: String,
        fallback_url: String,
    ) -> Self {
        Self {
            fetcher,
            primary_url,
            fallback_url,
            patterns: default_patterns(),
        }
    }

    /// Runs one check against the given installed version.
    ///
    /// # Returns
    /// * `Ok(CheckOutcome)` - A version was found on either source
    /// * `Err(CheckError::LatestVersionUnavailable)` - Both sources failed,
    ///   terminal for this run
    pub async fn run(&self, installed_version: &str) -> Result<CheckOutcome, CheckError> {
        let latest_version = match self.latest_from(&self.primary_url).await {
            Some(version) => version,
            None => {
                warn!("Primary source yielded no version, trying fallback");
                self.latest_from(&self.fallback_url)
                    .await
                    .ok_or(CheckError::LatestVersionUnavailable)?
            }
        };

        let update_available = is_update_available(installed_version, &latest_version);
        info!(
            "Installed: {}, Latest: {}, Update available: {}",
            installed_version, latest_version, update_available
        );

        Ok(CheckOutcome {
            installed_version: installed_version.to_string(),
            latest_version,
            update_available,
        })
    }

    /// Fetch one source and extract a version from its visible text.
    /// A failed fetch and an extraction miss are both `None` here; the
    /// distinction only matters for logging.
    async fn latest_from(&self, url: &str) -> Option<String> {
        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Fetch of {} failed: {}", url, e);
                return None;
            }
        };

        let text = visible_text(&body);
        let version = extract_version(&text, &self.patterns);
        if version.is_none() {
            warn!(
                "No version token found at {} ({} chars of visible text)",
                url,
                text.len()
            );
        }
        version
    }
}
