//! Check cycle driving and periodic scheduling
//!
//! The pipeline itself is a pure fetch-and-compare; this module wires it to
//! its collaborators (installed-version provider, notifier, preferences) and
//! owns the retry-by-next-interval policy.

use std::path::Path;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info};

use crate::check::outcome::{CheckError, CheckOutcome};
use crate::check::pipeline::VersionCheckPipeline;
use crate::device::provider::InstalledVersionProvider;
use crate::notify::Notifier;
use crate::prefs::Preferences;

/// Run one full check cycle: resolve the installed version, run the
/// pipeline, and alert when an update is available.
///
/// A missing installed version is fatal for the cycle and no fetch happens.
/// The notifier is invoked only on a successful outcome with
/// `update_available`.
pub async fn run_check_cycle(
    pipeline: &VersionCheckPipeline,
    provider: &dyn InstalledVersionProvider,
    notifier: &dyn Notifier,
) -> Result<CheckOutcome, CheckError> {
    let installed_version = provider
        .installed_version()
        .ok_or(CheckError::InstalledVersionNotFound)?;

    let outcome = pipeline.run(&installed_version).await?;

    if outcome.update_available {
        notifier.notify_update_available(&outcome.installed_version, &outcome.latest_version);
    }

    Ok(outcome)
}

/// Run check cycles on a fixed interval until the task is cancelled.
///
/// The first cycle runs immediately. The stored auto-check preference is
/// consulted at every tick, so `enable`/`disable` from another shell takes
/// effect without restarting the loop. Failed cycles are logged and the loop
/// continues; there is no synchronous retry.
pub async fn run_watch(
    pipeline: &VersionCheckPipeline,
    provider: &dyn InstalledVersionProvider,
    notifier: &dyn Notifier,
    prefs_path: &Path,
    period: Duration,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let enabled = Preferences::load(prefs_path)
            .inspect_err(|e| error!("Failed to load preferences: {}", e))
            .map(|prefs| prefs.auto_check_enabled)
            .unwrap_or(true);
        if !enabled {
            info!("Automatic checks disabled, skipping cycle");
            continue;
        }

        match run_check_cycle(pipeline, provider, notifier).await {
            Ok(outcome) => info!(
                "Check complete: installed {}, latest {}, update available: {}",
                outcome.installed_version, outcome.latest_version, outcome.update_available
            ),
            Err(e) => error!("Check failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::provider::MockInstalledVersionProvider;
    use crate::notify::MockNotifier;
    use crate::web::fetcher::MockPageFetcher;
    use std::sync::Arc;

    fn pipeline_with_page(page: &'static str) -> VersionCheckPipeline {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().returning(move |_| Ok(page.to_string()));
        VersionCheckPipeline::new(Arc::new(fetcher), "https://pgsharp.test")
    }

    fn provider_with(version: Option<&'static str>) -> MockInstalledVersionProvider {
        let mut provider = MockInstalledVersionProvider::new();
        provider
            .expect_installed_version()
            .returning(move || version.map(|v| v.to_string()));
        provider
    }

    #[tokio::test]
    async fn cycle_notifies_when_an_update_is_available() {
        let pipeline = pipeline_with_page("<p>(0.386.0-G)</p>");
        let provider = provider_with(Some("0.385.2"));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify_update_available()
            .withf(|installed, latest| installed == "0.385.2" && latest == "0.386.0")
            .times(1)
            .return_const(());

        let outcome = run_check_cycle(&pipeline, &provider, &notifier)
            .await
            .unwrap();
        assert!(outcome.update_available);
    }

    #[tokio::test]
    async fn cycle_stays_quiet_when_up_to_date() {
        let pipeline = pipeline_with_page("<p>(0.385.2-G)</p>");
        let provider = provider_with(Some("0.385.2"));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify_update_available().times(0);

        let outcome = run_check_cycle(&pipeline, &provider, &notifier)
            .await
            .unwrap();
        assert!(!outcome.update_available);
    }

    #[tokio::test]
    async fn cycle_fails_before_fetching_when_no_app_is_installed() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(0);
        let pipeline = VersionCheckPipeline::new(Arc::new(fetcher), "https://pgsharp.test");

        let provider = provider_with(None);
        let mut notifier = MockNotifier::new();
        notifier.expect_notify_update_available().times(0);

        let result = run_check_cycle(&pipeline, &provider, &notifier).await;
        assert!(matches!(result, Err(CheckError::InstalledVersionNotFound)));
    }

    #[tokio::test]
    async fn cycle_does_not_notify_on_pipeline_failure() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Ok("<p>nothing to see</p>".to_string()));
        let pipeline = VersionCheckPipeline::new(Arc::new(fetcher), "https://pgsharp.test");

        let provider = provider_with(Some("0.385.2"));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify_update_available().times(0);

        let result = run_check_cycle(&pipeline, &provider, &notifier).await;
        assert!(matches!(result, Err(CheckError::LatestVersionUnavailable)));
    }
}
