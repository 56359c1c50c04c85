//! User-facing update alerting

#[cfg(test)]
use mockall::automock;

use tracing::info;

/// Trait for delivering an update alert to the user.
///
/// Callers invoke this only when an update is available; deciding *whether*
/// to alert stays with the check cycle, the notifier owns *how*.
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    fn notify_update_available(&self, installed_version: &str, latest_version: &str);
}

/// Notifier that prints the mismatch to the terminal
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_update_available(&self, installed_version: &str, latest_version: &str) {
        info!(
            "Update available: installed {}, supported {}",
            installed_version, latest_version
        );
        println!("PGSharp supports a different Pokemon Go version!");
        println!("  Your Pokemon Go:   {installed_version}");
        println!("  PGSharp supports:  {latest_version}");
        println!("Visit https://pgsharp.com for details.");
    }
}
