//! Error types for Fynd.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the Fynd domain and its adapters.
///
/// Malformed stored records (e.g. an unparseable date of birth) are not
/// represented here: they degrade to defaults at read time and never surface.
/// An empty candidate set is likewise a normal outcome, not an error.
#[derive(Error, Debug, Clone, Serialize)]
pub enum FyndError {
    /// The caller's profile lacks data required for the operation
    /// (e.g. gender or language missing before matching).
    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    /// A call to the remote store or identity provider failed.
    #[error("Network failure: {0}")]
    Network(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// No user is signed in with the identity provider.
    #[error("No user is signed in")]
    NotSignedIn,

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (local preference files, config)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FyndError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionNotMet(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::PreconditionNotMet(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_not_signed_in(&self) -> bool {
        matches!(self, Self::NotSignedIn)
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FyndError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FyndError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FyndError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error, used by adapters wrapping foreign SDK errors.
impl From<anyhow::Error> for FyndError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, FyndError>`.
pub type Result<T> = std::result::Result<T, FyndError>;
