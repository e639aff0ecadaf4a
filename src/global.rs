//! Process-wide signer for callers that do not thread a [`TokenSigner`].
//!
//! Starts with [`DEFAULT_SECRET`](crate::jwt::DEFAULT_SECRET). Every function
//! here delegates to the shared signer; prefer an owned [`TokenSigner`] where
//! isolation between keys matters (tests in particular).

use crate::error::TokenError;
use crate::jwt::{Claims, Header, TokenSigner};
use once_cell::sync::Lazy;

static SIGNER: Lazy<TokenSigner> = Lazy::new(TokenSigner::default);

/// The shared signer.
pub fn signer() -> &'static TokenSigner {
    &SIGNER
}

/// Replace the process-wide secret.
pub fn set_secret(secret: impl AsRef<[u8]>) {
    SIGNER.set_key(secret);
}

/// Generate a token with the process-wide key.
///
/// # Errors
///
/// See [`TokenSigner::generate`].
pub fn generate(claims: &Claims, header: Option<&Header>) -> Result<String, TokenError> {
    SIGNER.generate(claims, header)
}

/// Validate a token with the process-wide key.
///
/// # Errors
///
/// See [`TokenSigner::validate_at`].
pub fn validate(token: &str) -> Result<Claims, TokenError> {
    SIGNER.validate(token)
}

/// See [`TokenSigner::simple_generate`].
#[must_use]
pub fn simple_generate(subject: &str, lifetime_secs: i64) -> String {
    SIGNER.simple_generate(subject, lifetime_secs)
}

/// See [`TokenSigner::simple_validate`].
#[must_use]
pub fn simple_validate(token: &str) -> String {
    SIGNER.simple_validate(token)
}
