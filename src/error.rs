/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types returned by every fallible operation of the client.

use thiserror::Error;

/// Result alias used across the crate
pub type MonnifyResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected configuration, detected before any network activity
    #[error("config error: {0}")]
    Config(String),

    /// The request could not be sent or its response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON for the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A response was received and decoded but its HTTP status was not 200
    #[error("request failed - http status: {status} | provider code: {code} | message: {message}")]
    RequestFailed {
        /// HTTP status code of the response
        status: u16,
        /// `responseCode` of the response envelope
        code: String,
        /// `responseMessage` of the response envelope
        message: String,
    },

    /// Request parameters could not be encoded as JSON
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An argument was rejected before any request was made
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// HTTP status of a failed request, if the error carries one
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AppError::RequestFailed { status, .. } => Some(*status),
            AppError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Provider response code of a failed request, if the error carries one
    #[must_use]
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            AppError::RequestFailed { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}
