/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Monnify Client
//!
//! An async Rust client for the Monnify payments API.
//!
//! The crate is organised around a single [`Session`](application::session::Session)
//! through which every outbound call passes. The session applies the right
//! authentication scheme per call (HTTP Basic with the API key and secret, or a
//! bearer token obtained from `/v1/auth/login`), refreshes the bearer token
//! lazily when it has expired, and returns raw bodies that the endpoint groups
//! decode into typed results.
//!
//! Endpoint groups:
//!
//! - [`ReservedAccounts`](application::services::ReservedAccounts): reserve,
//!   inspect and deallocate customer accounts (bearer auth)
//! - [`Disbursements`](application::services::Disbursements): single and bulk
//!   transfers, OTP authorisation, wallet balance (basic auth)
//! - [`General`](application::services::General): transaction status, bank list
//!   and webhook payload verification (bearer auth)
//!
//! ## Example
//!
//! ```rust,no_run
//! use monnify_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::default())?;
//! let balance = client
//!     .disbursements()
//!     .wallet_balance("WALLET_ID")
//!     .await?;
//! info!("available: {}", balance.response_body.available_balance);
//! # Ok(())
//! # }
//! ```

/// Core application layer: configuration, session and endpoint groups
pub mod application;
/// Library wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Helper utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
