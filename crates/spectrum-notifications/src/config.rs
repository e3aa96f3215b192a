//! Panel and API client configuration.
//!
//! # Design
//! - Every field has a default so an empty document (`{}`) is valid.
//! - Unknown fields are rejected to surface typos early.
//! - Validation runs after decoding and reports the first offending field.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::feedback::DEFAULT_TOAST_CAPACITY;

/// Default success toast text.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Settings saved!";
/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4_000;
/// Default GraphQL endpoint path.
pub const DEFAULT_GRAPHQL_PATH: &str = "/api";

/// Feedback behaviour of the email preferences panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Text of the toast shown after a successful toggle.
    pub success_message: String,
    /// How long a toast stays visible.
    pub toast_timeout_ms: u32,
    /// Maximum number of toasts visible at once.
    pub toast_capacity: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            toast_capacity: DEFAULT_TOAST_CAPACITY,
        }
    }
}

impl PanelConfig {
    /// Decode and validate a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::InvalidField`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.success_message.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "success_message",
                value: self.success_message.clone(),
                reason: "must not be blank",
            });
        }
        if self.toast_timeout_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "toast_timeout_ms",
                value: self.toast_timeout_ms.to_string(),
                reason: "must be greater than zero",
            });
        }
        if self.toast_capacity == 0 {
            return Err(ConfigError::InvalidField {
                field: "toast_capacity",
                value: self.toast_capacity.to_string(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// Location of the GraphQL API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Scheme and authority, e.g. `https://spectrum.chat`. Empty means
    /// same-origin.
    pub base_url: String,
    /// Endpoint path, starting with `/`.
    pub graphql_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            graphql_path: DEFAULT_GRAPHQL_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Same-origin config with a base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Decode and validate a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::InvalidField`] for an invalid endpoint path.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the endpoint path.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] when `graphql_path` is not
    /// absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.graphql_path.starts_with('/') {
            return Err(ConfigError::InvalidField {
                field: "graphql_path",
                value: self.graphql_path.clone(),
                reason: "must start with '/'",
            });
        }
        Ok(())
    }

    /// Full endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.graphql_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PanelConfig::from_json("{}").expect("defaults are valid");
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.success_message, "Settings saved!");
        assert_eq!(config.toast_timeout_ms, 4_000);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = PanelConfig::from_json(r#"{"toast_timeout_ms":0}"#).expect_err("invalid");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "toast_timeout_ms",
                ..
            }
        ));
    }

    #[test]
    fn blank_success_message_is_rejected() {
        let err = PanelConfig::from_json(r#"{"success_message":"  "}"#).expect_err("invalid");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "success_message",
                ..
            }
        ));
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        let err = PanelConfig::from_json(r#"{"toast_timout_ms":10}"#).expect_err("typo");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = ClientConfig::with_base_url("https://spectrum.chat/");
        assert_eq!(config.endpoint(), "https://spectrum.chat/api");
        assert_eq!(ClientConfig::default().endpoint(), "/api");
    }

    #[test]
    fn relative_graphql_path_is_rejected() {
        let err = ClientConfig::from_json(r#"{"graphql_path":"api"}"#).expect_err("relative");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "graphql_path",
                ..
            }
        ));
    }
}
