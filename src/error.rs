//! Error types for token generation and validation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned by [`TokenSigner`](crate::jwt::TokenSigner) operations.
///
/// Every validation failure is reported as its own variant so callers can
/// tell a malformed token from a forged or expired one. Collaborators facing
/// untrusted clients should collapse them (see [`crate::bearer`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token does not split into exactly three non-empty segments.
    #[error("invalid token format")]
    Format,

    /// Recomputed signature does not match the supplied one.
    #[error("invalid token signature")]
    Signature,

    /// Claims segment cannot be decoded or deserialized.
    #[error("invalid token payload: {0}")]
    Payload(String),

    /// Signature and structure are valid but the token has expired.
    #[error("token expired at {expired_at}")]
    Expired {
        /// Expiry instant carried by the token
        expired_at: DateTime<Utc>,
    },

    /// Header or claims could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Create a payload error.
    #[must_use]
    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable error code for logs and API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Format => TOKEN_FORMAT_INVALID,
            Self::Signature => TOKEN_SIGNATURE_INVALID,
            Self::Payload(_) => TOKEN_PAYLOAD_INVALID,
            Self::Expired { .. } => TOKEN_EXPIRED,
            Self::Serialization(_) => TOKEN_SERIALIZATION_FAILED,
            Self::Config(_) => TOKEN_CONFIG_INVALID,
        }
    }

    /// Whether this error came out of validating a presented token.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Format | Self::Signature | Self::Payload(_) | Self::Expired { .. }
        )
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Serialization(err.to_string())
    }
}

// Error codes
pub const TOKEN_FORMAT_INVALID: &str = "TOKEN_FORMAT_INVALID";
pub const TOKEN_SIGNATURE_INVALID: &str = "TOKEN_SIGNATURE_INVALID";
pub const TOKEN_PAYLOAD_INVALID: &str = "TOKEN_PAYLOAD_INVALID";
pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
pub const TOKEN_SERIALIZATION_FAILED: &str = "TOKEN_SERIALIZATION_FAILED";
pub const TOKEN_CONFIG_INVALID: &str = "TOKEN_CONFIG_INVALID";
