//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation (see `cs_app::settings` for that)
//!
//! Missing keys map to "empty" facts: `0`, `""`, or `None`.

/// Viewer configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Polling period in milliseconds; `0` when not configured.
    pub poll_interval_ms: u64,

    /// Raw change-detection spelling; empty when not configured.
    pub change_detection: String,

    /// Whether to sync immediately on activation; `None` when not configured.
    pub sync_on_activate: Option<bool>,

    /// Whether to also write a log file; `None` when not configured.
    pub log_to_file: Option<bool>,
}

impl ViewerConfig {
    /// Create ViewerConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation or
    /// default value logic. Negative intervals are truncated, not rejected.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let sync = toml_value.get("sync");
        let logging = toml_value.get("logging");

        Ok(Self {
            poll_interval_ms: sync
                .and_then(|s| s.get("poll_interval_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            change_detection: sync
                .and_then(|s| s.get("change_detection"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            sync_on_activate: sync
                .and_then(|s| s.get("sync_on_activate"))
                .and_then(|v| v.as_bool()),
            log_to_file: logging
                .and_then(|l| l.get("file"))
                .and_then(|v| v.as_bool()),
        })
    }

    /// Create empty ViewerConfig (all empty values)
    pub fn empty() -> Self {
        Self {
            poll_interval_ms: 0,
            change_detection: String::new(),
            sync_on_activate: None,
            log_to_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [sync]
            poll_interval_ms = 500
            change_detection = "content"
            sync_on_activate = false

            [logging]
            file = true
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = ViewerConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.change_detection, "content");
        assert_eq!(config.sync_on_activate, Some(false));
        assert_eq!(config.log_to_file, Some(true));
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[sync]\n").unwrap();

        let config = ViewerConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, ViewerConfig::empty());
    }

    #[test]
    fn test_from_toml_does_not_validate_detection_spelling() {
        let toml_value: Value = toml::from_str(
            r#"
            [sync]
            change_detection = "sha256"
        "#,
        )
        .unwrap();

        let config = ViewerConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.change_detection, "sha256");
    }

    #[test]
    fn test_from_toml_clamps_negative_interval_to_zero() {
        let toml_value: Value = toml::from_str(
            r#"
            [sync]
            poll_interval_ms = -5
        "#,
        )
        .unwrap();

        let config = ViewerConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.poll_interval_ms, 0);
    }
}
