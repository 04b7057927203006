/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use chrono::{DateTime, TimeDelta, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of the `/v1/auth/login` response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginBody {
    /// Bearer access token
    pub access_token: String,
    /// Lifetime of the token in seconds
    pub expires_in: i64,
}

/// Decoded login response
pub type LoginResponse = ApiResponse<LoginBody>;

/// Bearer token held by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Bearer access token
    pub access_token: String,
    /// Instant after which the token is considered expired
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Builds a token from a login body, expiring `expires_in` seconds after `issued_at`
    ///
    /// # Errors
    /// * `AppError::Decode` - if the expiry does not fit in a timestamp
    pub fn from_login(body: &LoginBody, issued_at: DateTime<Utc>) -> Result<Self, AppError> {
        let expires_at = TimeDelta::try_seconds(body.expires_in)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::Decode(serde::de::Error::custom(format!(
                    "expiresIn out of range: {}",
                    body.expires_in
                )))
            })?;
        Ok(Self {
            access_token: body.access_token.clone(),
            expires_at,
        })
    }

    /// Checks if the token has expired
    ///
    /// A token is expired strictly after `expires_at`.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Checks if the token is expired at the given instant
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Seconds until expiry, negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }
}
