//! Property-based tests for token generation and validation.
//!
//! Property 1: Claims Round-Trip Consistency
//! Property 2: Tamper Detection
//! Property 3: Key Sensitivity
//! Property 4: Format Rejection
//! Property 5: Expiry Enforcement

use proptest::prelude::*;
use simple_token::{Claims, TokenError, TokenSigner};

const BASE64URL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generate arbitrary subject strings, including non-ASCII.
fn arb_subject() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_@.-]{1,128}".prop_map(|s| s),
        "\\PC{0,64}".prop_map(|s| s),
    ]
}

/// Generate arbitrary TTL (1 minute to 1 year).
fn arb_ttl() -> impl Strategy<Value = i64> {
    60i64..31_536_000i64
}

/// Generate arbitrary secrets.
fn arb_secret() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..64)
}

/// Replacement characters for tampering: the segment alphabet plus the separator.
fn arb_replacement() -> impl Strategy<Value = char> {
    let mut chars: Vec<char> = BASE64URL_ALPHABET.chars().collect();
    chars.push('.');
    prop::sample::select(chars)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1: Claims Round-Trip Consistency
    ///
    /// Validating a freshly generated token returns exactly the claims
    /// it was generated from.
    #[test]
    fn prop_round_trip_consistency(
        secret in arb_secret(),
        subject in arb_subject(),
        ttl in arb_ttl(),
    ) {
        let signer = TokenSigner::new(&secret);
        let claims = Claims::with_lifetime(subject, ttl).unwrap();

        let token = signer.generate(&claims, None).unwrap();
        let decoded = signer.validate(&token).unwrap();

        prop_assert_eq!(decoded.subject(), claims.subject(), "Subject must match");
        prop_assert_eq!(decoded.expires_at(), claims.expires_at(), "Expiry must match");
        prop_assert_eq!(decoded, claims);
    }

    /// Property 2: Tamper Detection
    ///
    /// Changing any single character of a valid token never validates.
    /// Touching a separator yields a format error, anything else a
    /// signature error.
    #[test]
    fn prop_tamper_detection(
        subject in arb_subject(),
        index in any::<prop::sample::Index>(),
        replacement in arb_replacement(),
    ) {
        let signer = TokenSigner::new("testsecret");
        let token = signer.simple_generate(&subject, 3600);
        prop_assert!(!token.is_empty());

        let mut chars: Vec<char> = token.chars().collect();
        let position = index.index(chars.len());
        let original = chars[position];
        prop_assume!(original != replacement);
        chars[position] = replacement;
        let tampered: String = chars.into_iter().collect();

        let expected = if original == '.' || replacement == '.' {
            TokenError::Format
        } else {
            TokenError::Signature
        };
        prop_assert_eq!(signer.validate(&tampered), Err(expected));
    }

    /// Property 3: Key Sensitivity
    ///
    /// A token signed under one key fails with a signature error under any
    /// other key, including after the signer's own key is replaced.
    #[test]
    fn prop_key_sensitivity(
        first in arb_secret(),
        second in arb_secret(),
        subject in arb_subject(),
    ) {
        prop_assume!(first != second);

        let signer = TokenSigner::new(&first);
        let token = signer.simple_generate(&subject, 3600);

        let other = TokenSigner::new(&second);
        prop_assert_eq!(other.validate(&token), Err(TokenError::Signature));

        signer.set_key(&second);
        prop_assert_eq!(signer.validate(&token), Err(TokenError::Signature));
    }

    /// Property 4: Format Rejection
    ///
    /// Any string without exactly two separators is a format error.
    #[test]
    fn prop_format_rejection(input in "[a-zA-Z0-9_.-]{0,96}") {
        prop_assume!(input.matches('.').count() != 2);

        let signer = TokenSigner::new("testsecret");
        prop_assert_eq!(signer.validate(&input), Err(TokenError::Format));
    }

    /// Property 5: Expiry Enforcement
    ///
    /// A token whose expiry is in the past is rejected as expired even
    /// though its signature is valid.
    #[test]
    fn prop_expiry_enforcement(
        subject in arb_subject(),
        age in 1i64..31_536_000i64,
    ) {
        let signer = TokenSigner::new("testsecret");
        let claims = Claims::with_lifetime(subject, -age).unwrap();
        let token = signer.generate(&claims, None).unwrap();

        prop_assert_eq!(
            signer.validate(&token),
            Err(TokenError::Expired { expired_at: claims.expires_at() })
        );
    }
}
