//! Error types for mutations and configuration.

use thiserror::Error;

/// Failure of a settings mutation.
///
/// `Display` is exactly the message text so it can be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The server answered with a GraphQL error.
    #[error("{message}")]
    Rejected {
        /// First error message reported by the server.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("{message}")]
    Transport {
        /// Network or decoding failure detail.
        message: String,
    },
}

impl MutationError {
    /// Server-side rejection.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Network or decoding failure.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Message text carried by the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message } | Self::Transport { message } => message,
        }
    }
}

/// Errors raised while loading panel or client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON for the target type.
    #[error("invalid configuration document")]
    Parse {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// A field held an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_errors_display_only_their_message() {
        assert_eq!(MutationError::rejected("boom").to_string(), "boom");
        assert_eq!(MutationError::transport("offline").to_string(), "offline");
        assert_eq!(MutationError::transport("offline").message(), "offline");
    }

    #[test]
    fn config_error_keeps_field_detail() {
        let err = ConfigError::InvalidField {
            field: "toast_capacity",
            value: "0".to_string(),
            reason: "must be at least 1",
        };
        assert_eq!(err.to_string(), "invalid configuration field");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "toast_capacity",
                ..
            }
        ));
    }
}
