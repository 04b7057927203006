/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    API_BASE_URL_LIVE, API_BASE_URL_SANDBOX, DEFAULT_CONTRACT_CODE, DEFAULT_REQUEST_TIMEOUT,
    SANDBOX_API_KEY, SANDBOX_SECRET_KEY,
};
use crate::error::AppError;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Deployment target of the Monnify API
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox environment for development
    #[default]
    Sandbox,
    /// Live environment
    Live,
    /// Local test server; only reachable through
    /// [`Session::with_base_url`](crate::application::session::Session::with_base_url)
    Test,
}

impl Environment {
    /// Fixed base URL of the environment, `None` for [`Environment::Test`]
    #[must_use]
    pub fn base_url(&self) -> Option<&'static str> {
        match self {
            Environment::Sandbox => Some(API_BASE_URL_SANDBOX),
            Environment::Live => Some(API_BASE_URL_LIVE),
            Environment::Test => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Live => write!(f, "live"),
            Environment::Test => write!(f, "test"),
        }
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "live" => Ok(Environment::Live),
            _ => Err(AppError::Config("unsupported environment".to_string())),
        }
    }
}

/// API credentials of a Monnify merchant
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// API key
    pub api_key: String,
    /// Secret key
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"***")
            .finish()
    }
}

/// Main configuration for the Monnify API client
///
/// `request_timeout` bounds every HTTP request. A zero duration disables the
/// deadline, which lets a request wait indefinitely.
///
/// `default_contract_code` is sent by endpoints that need a contract code
/// when the caller does not provide one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Target environment
    pub environment: Environment,
    /// Merchant credentials
    pub credentials: Credentials,
    /// Per-request timeout, zero for none
    pub request_timeout: Duration,
    /// Contract code used when a request leaves it empty
    pub default_contract_code: String,
}

impl Default for Config {
    /// Sandbox environment with the published sandbox merchant
    fn default() -> Self {
        Self {
            environment: Environment::Sandbox,
            credentials: Credentials {
                api_key: SANDBOX_API_KEY.to_string(),
                secret_key: SANDBOX_SECRET_KEY.to_string(),
            },
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            default_contract_code: DEFAULT_CONTRACT_CODE.to_string(),
        }
    }
}

impl Config {
    /// Creates a configuration for the given environment and credentials
    ///
    /// Timeout and contract code take their default values.
    pub fn new(environment: Environment, api_key: &str, secret_key: &str) -> Self {
        Self {
            environment,
            credentials: Credentials {
                api_key: api_key.to_string(),
                secret_key: secret_key.to_string(),
            },
            ..Self::default()
        }
    }

    /// Loads the configuration from the process environment and an optional `.env` file
    ///
    /// Recognised variables:
    ///
    /// * `MONNIFY_ENVIRONMENT` - `sandbox` or `live`
    /// * `MONNIFY_API_KEY`
    /// * `MONNIFY_SECRET_KEY`
    /// * `MONNIFY_REQUEST_TIMEOUT_SECS`
    /// * `MONNIFY_CONTRACT_CODE`
    ///
    /// Missing variables fall back to the sandbox defaults. The result is
    /// validated before it is returned.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let defaults = Self::default();
        let environment: Environment = get_env_or_default::<String>(
            "MONNIFY_ENVIRONMENT",
            defaults.environment.to_string(),
        )
        .parse()?;

        let api_key = get_env_or_default("MONNIFY_API_KEY", defaults.credentials.api_key);
        let secret_key = get_env_or_default("MONNIFY_SECRET_KEY", defaults.credentials.secret_key);
        if api_key == SANDBOX_API_KEY {
            warn!("MONNIFY_API_KEY not set, using the sandbox merchant");
        }

        let timeout_secs = get_env_or_default(
            "MONNIFY_REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
        );

        let config = Config {
            environment,
            credentials: Credentials {
                api_key,
                secret_key,
            },
            request_timeout: Duration::from_secs(timeout_secs),
            default_contract_code: get_env_or_default(
                "MONNIFY_CONTRACT_CODE",
                defaults.default_contract_code,
            ),
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the per-request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the default contract code
    #[must_use]
    pub fn with_default_contract_code(mut self, contract_code: &str) -> Self {
        self.default_contract_code = contract_code.to_string();
        self
    }

    /// Checks that the configuration is well formed
    ///
    /// Only sandbox and live environments are accepted, both keys must be
    /// present, and the published sandbox keys are refused in live mode.
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.environment, Environment::Sandbox | Environment::Live) {
            return Err(AppError::Config("unsupported environment".to_string()));
        }
        if self.credentials.api_key.is_empty() {
            return Err(AppError::Config("apiKey required".to_string()));
        }
        if self.credentials.secret_key.is_empty() {
            return Err(AppError::Config("secretKey required".to_string()));
        }
        if self.environment == Environment::Live
            && (self.credentials.api_key == SANDBOX_API_KEY
                || self.credentials.secret_key == SANDBOX_SECRET_KEY)
        {
            return Err(AppError::Config(
                "sandbox credentials not permitted in live mode".to_string(),
            ));
        }
        Ok(())
    }
}
