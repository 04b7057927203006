/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Monnify Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ## Usage
//!
//! ```rust
//! use monnify_client::prelude::*;
//!
//! let config = Config::default();
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.session().environment(), Environment::Sandbox);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, Environment};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, MonnifyResult};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Entry point
pub use crate::application::client::Client;

/// Authenticated session
pub use crate::application::session::Session;

/// Authentication scheme and raw response
pub use crate::model::http::{AuthScheme, RawResponse};

/// Login models
pub use crate::model::auth::{LoginBody, LoginResponse, Token};

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::interfaces::{
    DisbursementService, GeneralService, ReservedAccountService,
};

/// Service implementations
pub use crate::application::services::{Disbursements, General, ReservedAccounts};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    AllowedPaymentSources, BankAccount, BulkTransferRequest, Currency, IncomeSplitConfig,
    NotificationInterval, ReserveAccountRequest, SingleTransferRequest, ValidationFailure,
};

/// Response models
pub use crate::model::responses::{
    AccountValidation, ApiResponse, Bank, BanksResponse, BulkTransfer, BulkTransferDetails,
    BulkTransferDetailsResponse, BulkTransferResponse, GeneralTransaction,
    GeneralTransactionResponse, Page, ReserveAccountResponse, ReservedAccount, ResendOtpResponse,
    SingleTransfer, SingleTransferDetailsResponse, SingleTransferResponse, Transaction,
    TransactionsResponse, TransferDetails, TransferTransactionsResponse,
    ValidAccountNumberResponse, WalletBalance, WalletBalanceResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging, reference and hash utilities
pub use crate::utils::{generate_prefixed_reference, generate_reference, setup_logger, transaction_hash};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for custom requests through [`Session`]
pub use reqwest::Method;
