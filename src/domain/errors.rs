//! Domain errors for REST client configuration resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or coercing configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value was found for `key` but could not be converted to `expected`.
    #[error("Invalid value for {key}: '{value}' is not a valid {expected}")]
    InvalidValue {
        /// Fully-qualified key
        key: String,
        /// Raw text found under the key
        value: String,
        /// Name of the target type
        expected: &'static str,
    },

    /// The client name or type name was blank.
    #[error("Client identifier cannot be empty")]
    EmptyIdentifier,

    /// `${expression}` inside the value of `key` named no property and had no default.
    #[error("Unresolved property expression ${{{expression}}} in {key}")]
    UnresolvedExpression {
        /// Key whose value holds the expression
        key: String,
        /// Expression text between `${` and `}`
        expression: String,
    },

    /// Expansion of the given key exceeded the nesting or expansion limit.
    #[error("Property expression nesting or expansion count exceeded while expanding {0}")]
    ExpressionDepth(String),

    /// A properties file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// The fully-qualified key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { key, .. }
            | Self::UnresolvedExpression { key, .. }
            | Self::ExpressionDepth(key) => Some(key.as_str()),
            Self::EmptyIdentifier | Self::Io { .. } => None,
        }
    }
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_key_and_value() {
        let err = ConfigError::InvalidValue {
            key: "quarkus.rest-client.test-client.connect-timeout".to_string(),
            value: "soon".to_string(),
            expected: "integer",
        };
        let msg = err.to_string();
        assert!(msg.contains("quarkus.rest-client.test-client.connect-timeout"));
        assert!(msg.contains("'soon'"));
        assert_eq!(
            err.key(),
            Some("quarkus.rest-client.test-client.connect-timeout")
        );
    }

    #[test]
    fn test_unresolved_expression_message() {
        let err = ConfigError::UnresolvedExpression {
            key: "a.url".to_string(),
            expression: "host".to_string(),
        };
        assert_eq!(err.to_string(), "Unresolved property expression ${host} in a.url");
    }
}
