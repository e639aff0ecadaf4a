//! Bearer-token authentication for HTTP-facing callers.
//!
//! Framework-agnostic: callers pass the raw `Authorization` header value and
//! turn an [`AuthRejection`] into their own 401 response. Validation failures
//! are collapsed into one rejection so responses do not reveal whether a
//! token was forged, malformed or merely expired.

use crate::error::TokenError;
use crate::jwt::{Claims, TokenSigner};
use thiserror::Error;
use tracing::debug;

/// Prefix stripped from the `Authorization` header value.
pub const BEARER_PREFIX: &str = "Bearer ";

/// HTTP status for every rejection.
pub const UNAUTHORIZED: u16 = 401;

/// Why a request was not authenticated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No `Authorization` header on the request
    #[error("Authorization header not provided")]
    MissingHeader,

    /// Header present but carries no token
    #[error("Token not provided")]
    MissingToken,

    /// Token failed validation for any reason
    #[error("Invalid or expired token")]
    InvalidToken,
}

impl AuthRejection {
    /// HTTP status code to respond with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        UNAUTHORIZED
    }

    /// Response body text. Never includes the validation error detail.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingHeader => "Authorization header not provided",
            Self::MissingToken => "Token not provided",
            Self::InvalidToken => "Invalid or expired token",
        }
    }
}

impl From<TokenError> for AuthRejection {
    fn from(err: TokenError) -> Self {
        debug!(code = err.code(), "Token rejected");
        AuthRejection::InvalidToken
    }
}

/// Extract the token from an `Authorization` header value.
///
/// A value without the `Bearer ` prefix is taken as the token itself.
pub fn extract_bearer(authorization: Option<&str>) -> Result<&str, AuthRejection> {
    let value = authorization
        .filter(|v| !v.is_empty())
        .ok_or(AuthRejection::MissingHeader)?;
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();

    if token.is_empty() {
        return Err(AuthRejection::MissingToken);
    }
    Ok(token)
}

/// Authenticate a request from its `Authorization` header value.
///
/// On success the returned claims' subject is the authenticated identity.
pub fn authenticate(
    signer: &TokenSigner,
    authorization: Option<&str>,
) -> Result<Claims, AuthRejection> {
    let token = extract_bearer(authorization)?;
    Ok(signer.validate(token)?)
}
