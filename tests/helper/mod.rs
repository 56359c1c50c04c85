//! Shared test collaborators

use std::sync::Mutex;

use pgsharp_checker::device::provider::InstalledVersionProvider;
use pgsharp_checker::notify::Notifier;

/// Notifier that records every alert it receives
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_update_available(&self, installed_version: &str, latest_version: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((installed_version.to_string(), latest_version.to_string()));
    }
}

/// Provider for a device without any candidate package installed
pub struct NoDeviceProvider;

impl InstalledVersionProvider for NoDeviceProvider {
    fn installed_version(&self) -> Option<String> {
        None
    }
}
