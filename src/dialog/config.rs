//! Labels and timing for the trigger and the inspection dialog.

use crate::base::snaperror::SnapError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the copy button shows its acknowledgment label.
pub const DEFAULT_ACK_DURATION_MS: u64 = 2000;

/// User-visible strings and the acknowledgment duration.
///
/// Every field has a default, so a JSON override only needs the keys it changes.
///
/// # Example
/// ```rust
/// use cookiesnap::dialog::DialogConfig;
///
/// let config = DialogConfig::from_json(r#"{"copy_label": "Copy JSON"}"#)?;
/// assert_eq!(config.copy_label, "Copy JSON");
/// assert_eq!(config.close_label, "Close");
/// # Ok::<(), cookiesnap::base::snaperror::SnapError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub title: String,
    pub trigger_label: String,
    pub copy_label: String,
    pub copied_label: String,
    pub close_label: String,
    pub ack_duration_ms: u64,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: "Cookies".to_string(),
            trigger_label: "Get Cookies".to_string(),
            copy_label: "Copy".to_string(),
            copied_label: "Copied!".to_string(),
            close_label: "Close".to_string(),
            ack_duration_ms: DEFAULT_ACK_DURATION_MS,
        }
    }
}

impl DialogConfig {
    /// Simplified Chinese labels.
    pub fn chinese() -> Self {
        Self {
            title: "Cookies 数据".to_string(),
            trigger_label: "获取Cookies".to_string(),
            copy_label: "复制".to_string(),
            copied_label: "已复制!".to_string(),
            close_label: "关闭".to_string(),
            ack_duration_ms: DEFAULT_ACK_DURATION_MS,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SnapError> {
        serde_json::from_str(json).map_err(|e| SnapError::invalid_config(e.to_string()))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_trigger_label(mut self, label: impl Into<String>) -> Self {
        self.trigger_label = label.into();
        self
    }

    pub fn with_copy_labels(mut self, copy: impl Into<String>, copied: impl Into<String>) -> Self {
        self.copy_label = copy.into();
        self.copied_label = copied.into();
        self
    }

    pub fn with_close_label(mut self, label: impl Into<String>) -> Self {
        self.close_label = label.into();
        self
    }

    pub fn with_ack_duration(mut self, duration: Duration) -> Self {
        self.ack_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn ack_duration(&self) -> Duration {
        Duration::from_millis(self.ack_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DialogConfig::default();
        assert_eq!(config.ack_duration(), Duration::from_secs(2));
        assert_eq!(config.copy_label, "Copy");
    }

    #[test]
    fn test_partial_json_override() {
        let config = DialogConfig::from_json(r#"{"ack_duration_ms": 500, "title": "Jar"}"#).unwrap();
        assert_eq!(config.ack_duration(), Duration::from_millis(500));
        assert_eq!(config.title, "Jar");
        assert_eq!(config.copied_label, "Copied!");
    }

    #[test]
    fn test_invalid_json() {
        let err = DialogConfig::from_json(r#"{"ack_duration_ms": "soon"}"#).unwrap_err();
        assert!(matches!(err, SnapError::InvalidConfig { .. }));
    }

    #[test]
    fn test_builder_setters() {
        let config = DialogConfig::chinese()
            .with_copy_labels("Copy", "Done")
            .with_ack_duration(Duration::from_millis(1500));
        assert_eq!(config.title, "Cookies 数据");
        assert_eq!(config.copied_label, "Done");
        assert_eq!(config.ack_duration_ms, 1500);
    }
}
