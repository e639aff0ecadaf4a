//! HMAC signing key material.

use ring::hmac;
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Key used when no secret has been configured.
///
/// Publicly known. Anything signed with it can be forged by anyone.
pub const DEFAULT_SECRET: &str = "your-secret-key";

/// Secrets shorter than the HMAC-SHA256 output size give weaker integrity.
pub const RECOMMENDED_MIN_SECRET_LEN: usize = 32;

/// Immutable HMAC-SHA256 signing key.
///
/// The security of every token rests on this secret: short or low-entropy
/// secrets make signatures guessable. No length or entropy rule is enforced
/// here; that is left to deployment. The secret bytes are wiped on drop.
#[derive(Clone)]
pub struct SigningKey {
    /// Precomputed HMAC key
    key: hmac::Key,
    /// Raw secret, zeroized on drop
    secret: Zeroizing<Vec<u8>>,
}

impl SigningKey {
    /// Derive a signing key from raw secret bytes. Any length is accepted.
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret),
            secret: Zeroizing::new(secret.to_vec()),
        }
    }

    /// Compute the HMAC-SHA256 tag over `data`.
    #[must_use]
    pub fn sign(&self, data: &[u8]) -> hmac::Tag {
        hmac::sign(&self.key, data)
    }

    /// Length of the secret in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// Whether this key was built from `secret`, compared in constant time.
    #[must_use]
    pub fn matches(&self, secret: &[u8]) -> bool {
        self.secret.len() == secret.len() && bool::from(self.secret.as_slice().ct_eq(secret))
    }

    /// Whether this key was built from [`DEFAULT_SECRET`].
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.matches(DEFAULT_SECRET.as_bytes())
    }

    /// Whether the secret is shorter than [`RECOMMENDED_MIN_SECRET_LEN`].
    #[must_use]
    pub fn is_weak(&self) -> bool {
        self.len() < RECOMMENDED_MIN_SECRET_LEN
    }
}

impl Default for SigningKey {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET.as_bytes())
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey([REDACTED], len={})", self.len())
    }
}
