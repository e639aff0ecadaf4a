//! Configuration loaded from environment variables.

use crate::error::TokenError;
use crate::jwt::DEFAULT_SECRET;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use zeroize::Zeroizing;

/// Token configuration.
#[derive(Clone)]
pub struct Config {
    /// HMAC signing secret, zeroized on drop
    pub secret: Zeroizing<String>,
    /// Lifetime of generated tokens
    pub token_ttl: Duration,
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secret: Zeroizing::new(DEFAULT_SECRET.to_string()),
            token_ttl: Duration::from_secs(3600),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if a variable is present but invalid.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TokenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let secret = lookup("TOKEN_SECRET")
            .map(Zeroizing::new)
            .unwrap_or(defaults.secret);
        let ttl_secs: u64 = parse_var(&lookup, "TOKEN_TTL", defaults.token_ttl.as_secs())?;
        if ttl_secs == 0 || i64::try_from(ttl_secs).is_err() {
            return Err(TokenError::config(format!("Invalid TOKEN_TTL: {ttl_secs}")));
        }
        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);
        let log_json = parse_var(&lookup, "LOG_JSON", defaults.log_json)?;

        Ok(Self {
            secret,
            token_ttl: Duration::from_secs(ttl_secs),
            log_level,
            log_json,
        })
    }

    /// Token lifetime in whole seconds.
    #[must_use]
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}

/// Parse a variable, falling back to `default` when unset.
fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T, TokenError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(val) => val
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {name}: {e}"))),
        None => Ok(default),
    }
}
