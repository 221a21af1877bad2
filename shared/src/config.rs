use serde::{Deserialize, Serialize};

use crate::controller::ResponsePolicy;
use crate::error::ConfigError;

pub const DEFAULT_PREDICT_URL: &str = "http://localhost:5000/predict";
pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;
pub const DEFAULT_FAILURE_MESSAGE: &str = "API error";

/// Dashboard settings. Every field falls back to its default when absent,
/// so a partial JSON override is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub predict_url: String,
    /// `None` waits for the service forever.
    pub request_timeout_ms: Option<u32>,
    pub response_policy: ResponsePolicy,
    pub failure_message: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            predict_url: DEFAULT_PREDICT_URL.to_string(),
            request_timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            response_policy: ResponsePolicy::default(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.predict_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        if self.failure_message.is_empty() {
            return Err(ConfigError::EmptyFailureMessage);
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.predict_url, "http://localhost:5000/predict");
        assert_eq!(config.response_policy, ResponsePolicy::Lenient);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"response_policy": "strict", "request_timeout_ms": null}"#,
        )
        .unwrap();
        assert_eq!(config.response_policy, ResponsePolicy::Strict);
        assert_eq!(config.request_timeout_ms, None);
        assert_eq!(config.failure_message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{"predict_url": "  "}"#),
            Err(ConfigError::EmptyUrl)
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{"failure_message": ""}"#),
            Err(ConfigError::EmptyFailureMessage)
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{"request_timeout_ms": 0}"#),
            Err(ConfigError::ZeroTimeout)
        ));
        assert!(matches!(
            DashboardConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
