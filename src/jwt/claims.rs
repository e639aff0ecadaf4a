use crate::error::TokenError;
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Token claims: the principal and an absolute expiry.
///
/// On the wire this is `{"sub":<string>,"exp":<epoch seconds>}`. The expiry
/// is kept at whole-second precision so a decoded token compares equal to the
/// claims it was generated from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    #[serde(rename = "sub")]
    subject: String,
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    expires_at: DateTime<Utc>,
}

impl Claims {
    /// Creates claims expiring at `expires_at`, truncated to the second.
    pub fn new(subject: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Claims {
            subject: subject.into(),
            expires_at: expires_at.trunc_subsecs(0),
        }
    }

    /// Creates claims expiring `lifetime_secs` seconds from now.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Serialization`] if the expiry falls outside the
    /// representable time range.
    pub fn with_lifetime(subject: impl Into<String>, lifetime_secs: i64) -> Result<Self, TokenError> {
        let expires_at = TimeDelta::try_seconds(lifetime_secs)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| {
                TokenError::serialization(format!("lifetime of {lifetime_secs}s is out of range"))
            })?;
        Ok(Claims::new(subject, expires_at))
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A token is expired once `now` is strictly past its expiry second.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.expires_at.timestamp()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
