/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::time::Duration;

/// Published API key of the Monnify sandbox merchant
pub const SANDBOX_API_KEY: &str = "MK_TEST_SAF7HR5F3F";
/// Published secret key of the Monnify sandbox merchant
pub const SANDBOX_SECRET_KEY: &str = "4SY6TNL8CK3VPRSBTHTRG2N8XXEGC6NL";
/// Contract code of the Monnify sandbox merchant
pub const DEFAULT_CONTRACT_CODE: &str = "4934121686";
/// Secret key substituted when a session targets a local test server
pub const TEST_SECRET_KEY: &str = "SECRET_KEY";

/// Base URL of the sandbox environment
pub const API_BASE_URL_SANDBOX: &str = "https://sandbox.monnify.com/api";
/// Base URL of the live environment
pub const API_BASE_URL_LIVE: &str = "https://api.monnify.com/api";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// User agent string used in HTTP requests to identify this client to the Monnify API
pub const USER_AGENT: &str = concat!("monnify-client/", env!("CARGO_PKG_VERSION"));

/// Payment completed in full
pub const PAYMENT_STATUS_PAID: &str = "PAID";
/// Payment not received yet
pub const PAYMENT_STATUS_PENDING: &str = "PENDING";
/// More than the payable amount was received
pub const PAYMENT_STATUS_OVERPAID: &str = "OVERPAID";
/// Less than the payable amount was received
pub const PAYMENT_STATUS_PARTIALLY_PAID: &str = "PARTIALLY_PAID";
/// Payment window elapsed
pub const PAYMENT_STATUS_EXPIRED: &str = "EXPIRED";
/// Payment failed
pub const PAYMENT_STATUS_FAILED: &str = "FAILED";
/// Payment cancelled
pub const PAYMENT_STATUS_CANCELLED: &str = "CANCELLED";
