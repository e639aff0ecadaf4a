pub mod claims;
pub mod codec;
pub mod header;
pub mod key;
pub mod signer;

pub use claims::Claims;
pub use header::{Header, DEFAULT_ALGORITHM, TOKEN_TYPE};
pub use key::{SigningKey, DEFAULT_SECRET};
pub use signer::TokenSigner;
