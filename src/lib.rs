//! Simple signed tokens.
//!
//! Encodes a subject and an expiry into a compact three-segment string,
//! signs it with HMAC-SHA256 under a symmetric key, and verifies integrity
//! and expiry before handing the claims back. The claims are signed, not
//! encrypted: anyone holding a token can read them.
//!
//! ```
//! use simple_token::{Claims, TokenSigner};
//!
//! let signer = TokenSigner::new("testsecret");
//! let claims = Claims::with_lifetime("1234567890", 3600).unwrap();
//! let token = signer.generate(&claims, None).unwrap();
//!
//! assert_eq!(signer.validate(&token).unwrap(), claims);
//! ```

#![forbid(unsafe_code)]

pub mod bearer;
pub mod config;
pub mod error;
pub mod global;
pub mod jwt;
pub mod observability;

// Re-exports for convenience
pub use config::Config;
pub use error::TokenError;
pub use jwt::{Claims, Header, SigningKey, TokenSigner};
