//! Structured error types for Solace
//!
//! Provides type-safe error handling with context for debugging and
//! user-friendly messages. Nothing in the core is fatal: every failure
//! is local and recoverable by retrying the user action.

use thiserror::Error;

/// Primary error type for Solace operations
#[derive(Error, Debug)]
pub enum SolaceError {
    // =========================================================================
    // Completion Service Errors
    // =========================================================================
    /// Authentication/authorization errors
    #[error("authentication failed: {message}")]
    Unauthorized { message: String },

    /// Rate limit exceeded (429)
    #[error("rate limit exceeded, please try again later")]
    RateLimited,

    /// Completion service returned an error
    #[error("completion request failed ({status}): {message}")]
    Completion { status: u16, message: String },

    /// Completion service returned no candidates
    #[error("completion response contained no text")]
    EmptyCompletion,

    /// Unknown model identifier
    #[error("unknown model: {0}")]
    UnknownModel(String),

    // =========================================================================
    // Speech Capture Errors
    // =========================================================================
    /// Audio was captured but could not be transcribed
    #[error("could not understand the audio")]
    SpeechUnintelligible,

    /// Speech capture backend is missing or failed to run
    #[error("speech capture unavailable: {reason}")]
    SpeechUnavailable { reason: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Missing required config
    #[error("missing required configuration: {key}")]
    MissingConfig { key: String },

    // =========================================================================
    // External Error Wrappers
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SolaceError {
    /// Whether the failure warrants prompting the user to fix their setup
    /// rather than simply retrying the action.
    pub fn requires_user_action(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::UnknownModel(_)
                | Self::InvalidConfig { .. }
                | Self::MissingConfig { .. }
        )
    }

    /// User-facing message for status lines and CLI output.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => {
                "Authentication failed. Check your API key with `solace setup`.".to_string()
            }
            Self::MissingConfig { key } => {
                format!("Missing configuration `{}`. Run `solace setup`.", key)
            }
            Self::SpeechUnintelligible => {
                "Sorry, I couldn't understand the audio.".to_string()
            }
            Self::SpeechUnavailable { .. } => {
                "Error with the speech capture service.".to_string()
            }
            other => format!("An error occurred: {}", other),
        }
    }
}

/// Convenience result alias for core operations
pub type Result<T> = std::result::Result<T, SolaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_requires_user_action() {
        let err = SolaceError::Unauthorized {
            message: "bad key".to_string(),
        };
        assert!(err.requires_user_action());
        assert!(err.user_message().contains("solace setup"));
    }

    #[test]
    fn completion_failure_is_retryable() {
        let err = SolaceError::Completion {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert!(!err.requires_user_action());
        assert!(err.user_message().contains("overloaded"));
    }
}
