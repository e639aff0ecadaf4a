//! Segment encoding and signature primitives.
//!
//! Segments use the URL-safe base64 alphabet without padding, on both the
//! encode and decode paths. Padded input is rejected. Unpadded segments follow
//! the JWS compact serialization (RFC 7515), so tokens carry no `=` that would
//! need escaping in URLs; tokens minted by padded encoders do not validate here.

use crate::error::TokenError;
use crate::jwt::key::SigningKey;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use subtle::ConstantTimeEq;

/// Separator between token segments.
pub const SEPARATOR: char = '.';

/// Base64url-encode a segment.
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Base64url-decode a segment.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(segment)
}

/// Split a token into its header, claims and signature segments.
///
/// Fails with [`TokenError::Format`] unless there are exactly three
/// non-empty segments. Nothing is decoded here.
pub fn split_token(token: &str) -> Result<[&str; 3], TokenError> {
    let mut parts = token.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(claims), Some(signature), None)
            if !header.is_empty() && !claims.is_empty() && !signature.is_empty() =>
        {
            Ok([header, claims, signature])
        }
        _ => Err(TokenError::Format),
    }
}

/// Signing input: the raw header and claims segments joined by the separator.
pub fn signing_input(header: &str, claims: &str) -> String {
    format!("{header}{SEPARATOR}{claims}")
}

/// Compute the encoded signature segment for `input`.
pub fn sign(key: &SigningKey, input: &str) -> String {
    encode_segment(key.sign(input.as_bytes()).as_ref())
}

/// Compare an expected and a presented signature segment in constant time.
#[must_use]
pub fn signatures_match(expected: &str, presented: &str) -> bool {
    let expected = expected.as_bytes();
    let presented = presented.as_bytes();

    // Length is not secret: the encoded tag always has the same length.
    if expected.len() != presented.len() {
        return false;
    }

    expected.ct_eq(presented).into()
}
