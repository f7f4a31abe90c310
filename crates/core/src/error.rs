//! Error types for slide-deck generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a call to the text generation provider failed.
///
/// Assigned where the failure happens, so callers never have to guess the
/// cause from the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationFailureKind {
    /// Connection refused, DNS failure, timeout.
    Network,
    /// Missing, invalid or unauthorized API key.
    Credential,
    /// Any other provider-side failure (bad response, quota, empty output).
    Upstream,
}

/// User-facing category an error is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    Network,
    Credential,
    Generic,
}

/// Errors that can occur while generating and writing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// The generative text provider failed.
    #[error("AI generation failed: {message}")]
    GenerationError {
        kind: GenerationFailureKind,
        message: String,
    },

    /// No slide survived filtering, so there is nothing to write.
    #[error("PPT file could not be created: no slide had both a title and body text")]
    EmptyArtifact,

    /// Failed to write the output file.
    #[error("Failed to write file: {0}")]
    PersistenceError(#[from] std::io::Error),

    /// ZIP archive error while packaging the deck.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML serialization error while packaging the deck.
    #[error("XML writing error: {0}")]
    XmlError(String),

    /// The generation request failed validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No API key was configured for the text generation provider.
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Configuration is malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Shorthand for a generation failure of the given kind.
    pub fn generation(kind: GenerationFailureKind, message: impl Into<String>) -> Self {
        Self::GenerationError {
            kind,
            message: message.into(),
        }
    }

    /// The category this error is reported under.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GenerationError { kind, .. } => match kind {
                GenerationFailureKind::Network => ErrorCategory::Network,
                GenerationFailureKind::Credential => ErrorCategory::Credential,
                GenerationFailureKind::Upstream => ErrorCategory::Generic,
            },
            Self::MissingCredential(_) => ErrorCategory::Credential,
            _ => ErrorCategory::Generic,
        }
    }

    /// Message shown to the person who asked for the deck.
    pub fn user_message(&self) -> String {
        match (self, self.category()) {
            (Self::EmptyArtifact, _) => {
                "PPT file could not be created. Please try again.".to_string()
            }
            (_, ErrorCategory::Network) => {
                "Network issue! Please check your internet and try again.".to_string()
            }
            (_, ErrorCategory::Credential) => {
                format!("API key error: check your .env configuration ({})", self)
            }
            (_, ErrorCategory::Generic) => format!("Unexpected Error: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_kind_maps_to_category() {
        let network = Error::generation(GenerationFailureKind::Network, "connection refused");
        let credential = Error::generation(GenerationFailureKind::Credential, "API key invalid");
        let upstream = Error::generation(GenerationFailureKind::Upstream, "quota exceeded");

        assert_eq!(network.category(), ErrorCategory::Network);
        assert_eq!(credential.category(), ErrorCategory::Credential);
        assert_eq!(upstream.category(), ErrorCategory::Generic);
    }

    #[test]
    fn test_category_does_not_depend_on_message_text() {
        // "Timeout" in the text of an upstream failure must not turn it into
        // a network error.
        let err = Error::generation(GenerationFailureKind::Upstream, "Timeout while thinking");
        assert_eq!(err.category(), ErrorCategory::Generic);
    }

    #[test]
    fn test_persistence_error_is_generic_and_verbatim() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let err = Error::from(io);

        assert_eq!(err.category(), ErrorCategory::Generic);
        assert!(err.user_message().contains("read-only volume"));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            Error::EmptyArtifact.user_message(),
            "PPT file could not be created. Please try again."
        );
        assert!(Error::generation(GenerationFailureKind::Network, "x")
            .user_message()
            .starts_with("Network issue!"));
        assert!(Error::MissingCredential("API_KEY not set".into())
            .user_message()
            .starts_with("API key error"));
        assert_eq!(
            Error::InvalidRequest("slide count must be at least 1".into()).user_message(),
            "Unexpected Error: Invalid request: slide count must be at least 1"
        );
    }
}
