//! Token generation and validation against a swappable signing key.

use crate::config::Config;
use crate::error::TokenError;
use crate::jwt::claims::Claims;
use crate::jwt::codec;
use crate::jwt::header::Header;
use crate::jwt::key::{SigningKey, DEFAULT_SECRET};
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Generates and validates tokens with the key current at call time.
///
/// The key lives in an atomically swapped snapshot: [`set_key`](Self::set_key)
/// replaces it without blocking readers, and each `generate`/`validate` call
/// loads exactly one snapshot. Changing the key invalidates every token
/// issued under the previous one.
pub struct TokenSigner {
    key: ArcSwap<SigningKey>,
}

impl TokenSigner {
    /// Create a signer with the given secret.
    #[must_use]
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let key = signing_key(secret.as_ref());
        Self {
            key: ArcSwap::from_pointee(key),
        }
    }

    /// Create a signer from the configured secret.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.secret.as_bytes())
    }

    /// Replace the signing key. Tokens signed under the old key stop
    /// validating immediately.
    pub fn set_key(&self, secret: impl AsRef<[u8]>) {
        self.key.store(Arc::new(signing_key(secret.as_ref())));
        debug!("Replaced signing key");
    }

    /// Generate a token for `claims`, using `header` if given and the default
    /// `HS256`/`JWT` header otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Serialization`] if the header or claims cannot be
    /// serialized.
    pub fn generate(&self, claims: &Claims, header: Option<&Header>) -> Result<String, TokenError> {
        let default_header = Header::default();
        let header = header.unwrap_or(&default_header);

        let header_segment = codec::encode_segment(&serde_json::to_vec(header)?);
        let claims_segment = codec::encode_segment(&serde_json::to_vec(claims)?);

        let input = codec::signing_input(&header_segment, &claims_segment);
        let key = self.key.load();
        let signature_segment = codec::sign(&key, &input);

        debug!(
            subject = %claims.subject(),
            expires_at = %claims.expires_at(),
            alg = %header.alg,
            "Generated token"
        );

        Ok(format!("{input}{}{signature_segment}", codec::SEPARATOR))
    }

    /// Validate `token` against the current key and the current time.
    ///
    /// # Errors
    ///
    /// See [`validate_at`](Self::validate_at).
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate `token` against the current key, treating `now` as the
    /// current instant.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Format`] unless the token has three non-empty segments
    /// - [`TokenError::Signature`] if the signature does not match
    /// - [`TokenError::Payload`] if the claims segment cannot be decoded
    /// - [`TokenError::Expired`] if `now` is past the expiry
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let [header_segment, claims_segment, signature_segment] = codec::split_token(token)?;

        let input = codec::signing_input(header_segment, claims_segment);
        let expected = codec::sign(&self.key.load(), &input);
        if !codec::signatures_match(&expected, signature_segment) {
            debug!("Rejected token with invalid signature");
            return Err(TokenError::Signature);
        }

        let payload = codec::decode_segment(claims_segment)
            .map_err(|e| TokenError::payload(e.to_string()))?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|e| TokenError::payload(e.to_string()))?;

        if claims.is_expired_at(now) {
            debug!(subject = %claims.subject(), expires_at = %claims.expires_at(), "Rejected expired token");
            return Err(TokenError::Expired {
                expired_at: claims.expires_at(),
            });
        }

        Ok(claims)
    }

    /// Generate a token for `subject` valid for `lifetime_secs` seconds.
    ///
    /// Returns an empty string on any failure.
    #[must_use]
    pub fn simple_generate(&self, subject: &str, lifetime_secs: i64) -> String {
        Claims::with_lifetime(subject, lifetime_secs)
            .and_then(|claims| self.generate(&claims, None))
            .unwrap_or_default()
    }

    /// Validate `token` and return its subject.
    ///
    /// Returns an empty string on any failure.
    #[must_use]
    pub fn simple_validate(&self, token: &str) -> String {
        self.validate(token)
            .map(|claims| claims.subject().to_string())
            .unwrap_or_default()
    }
}

impl Default for TokenSigner {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET)
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &**self.key.load())
            .finish()
    }
}

fn signing_key(secret: &[u8]) -> SigningKey {
    let key = SigningKey::new(secret);
    if key.is_empty() {
        warn!("Signing key is empty; tokens can be forged by anyone");
    } else if key.is_default() {
        warn!("Signing key is the built-in default; set a secret before issuing real tokens");
    } else if key.is_weak() {
        debug!(len = key.len(), "Signing key is shorter than recommended");
    }
    key
}
