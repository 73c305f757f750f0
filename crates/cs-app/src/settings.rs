//! Policy layer over the raw `ViewerConfig` DTO: defaults and fallbacks
//! live here, not in `cs-core`.

use std::time::Duration;

use cs_core::{ChangeDetection, ViewerConfig};
use tracing::warn;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSettings {
    pub poll_interval: Duration,
    pub change_detection: ChangeDetection,
    pub sync_on_activate: bool,
    pub log_to_file: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            change_detection: ChangeDetection::Length,
            sync_on_activate: true,
            log_to_file: true,
        }
    }
}

impl SyncSettings {
    pub fn from_config(config: &ViewerConfig) -> Self {
        let defaults = Self::default();

        let poll_interval = match config.poll_interval_ms {
            0 => defaults.poll_interval,
            ms => Duration::from_millis(ms),
        };

        let change_detection = if config.change_detection.is_empty() {
            defaults.change_detection
        } else {
            ChangeDetection::parse(&config.change_detection).unwrap_or_else(|| {
                warn!(
                    value = %config.change_detection,
                    "Unknown change_detection, falling back to length"
                );
                defaults.change_detection
            })
        };

        Self {
            poll_interval,
            change_detection,
            sync_on_activate: config.sync_on_activate.unwrap_or(defaults.sync_on_activate),
            log_to_file: config.log_to_file.unwrap_or(defaults.log_to_file),
        }
    }
}
