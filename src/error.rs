//! Error types for Mindspace.

use std::time::Duration;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Validation errors raised by the check-in classifier.
///
/// All variants are recoverable by re-prompting the user; a complete,
/// well-formed answer set never fails classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("Incomplete answers: expected {expected} responses, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("Incomplete answers: question {index} is unanswered")]
    Unanswered { index: usize },

    #[error("Invalid level {value:?} for question {index}: expected one of A, B, C, D")]
    InvalidLevel { index: usize, value: String },
}

/// Hosted generative-text API errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} rate limited, retry after {retry_after:?}")]
    RateLimited {
        provider: String,
        retry_after: Option<Duration>,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("Provider {provider} returned empty content")]
    EmptyResponse { provider: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Profile/check-in store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Entity not found: {entity} for user {user_id}")]
    NotFound { entity: String, user_id: String },

    #[error("Invalid field {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("Terms & Conditions must be accepted to register")]
    TermsNotAccepted,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Gateway errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Failed to bind {addr}: {reason}")]
    BindFailed { addr: String, reason: String },

    #[error("Invalid bearer token")]
    InvalidToken,

    #[error("Rate limit exceeded for user {user_id}")]
    RateLimited { user_id: String },

    #[error("Server error: {0}")]
    Serve(String),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingRequired {
            key: "GEMINI_API_KEY".to_string(),
            hint: "Set GEMINI_API_KEY in the environment or .env".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("GEMINI_API_KEY"),
            "Should mention the key: {msg}"
        );
        assert!(msg.contains("Set GEMINI_API_KEY"), "Should include the hint: {msg}");

        let err = ConfigError::InvalidValue {
            key: "MINDSPACE_ADDR".to_string(),
            message: "must be host:port".to_string(),
        };
        assert!(err.to_string().contains("MINDSPACE_ADDR"));
    }

    #[test]
    fn assessment_error_display() {
        let err = AssessmentError::WrongLength {
            expected: 12,
            got: 11,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"), "Should mention expected count: {msg}");
        assert!(msg.contains("11"), "Should mention actual count: {msg}");

        let err = AssessmentError::Unanswered { index: 7 };
        assert!(err.to_string().contains("7"));

        let err = AssessmentError::InvalidLevel {
            index: 3,
            value: "E".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"E\""), "Should mention the bad value: {msg}");
        assert!(msg.contains("3"), "Should mention the index: {msg}");
    }

    #[test]
    fn llm_error_display() {
        let err = LlmError::RateLimited {
            provider: "gemini".to_string(),
            retry_after: Some(Duration::from_secs(30)),
        };
        let msg = err.to_string();
        assert!(msg.contains("gemini"), "Should mention provider: {msg}");

        let err = LlmError::EmptyResponse {
            provider: "gemini".to_string(),
        };
        assert!(err.to_string().contains("empty content"));
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::NotFound {
            entity: "profile".to_string(),
            user_id: "user-1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("profile"), "Should mention entity: {msg}");
        assert!(msg.contains("user-1"), "Should mention user: {msg}");
    }

    #[test]
    fn top_level_error_from_conversions() {
        let config_err = ConfigError::ParseError("test".to_string());
        let err: Error = config_err.into();
        assert!(matches!(err, Error::Config(_)));

        let assess_err = AssessmentError::Unanswered { index: 0 };
        let err: Error = assess_err.into();
        assert!(matches!(err, Error::Assessment(_)));

        let store_err = StoreError::TermsNotAccepted;
        let err: Error = store_err.into();
        assert!(matches!(err, Error::Store(_)));
    }
}
