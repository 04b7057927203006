/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::services::{Disbursements, General, ReservedAccounts};
use crate::application::session::Session;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Entry point of the library
///
/// Owns one [`Session`] and hands out the endpoint groups built on it. Every
/// group shares the session, so a bearer token obtained by one is reused by
/// the others.
#[derive(Debug, Clone)]
pub struct Client {
    session: Arc<Session>,
    general: Arc<General>,
}

impl Client {
    /// Creates a client for the sandbox or live environment
    ///
    /// # Errors
    /// * `AppError::Config` - if the configuration is rejected
    pub fn new(config: Config) -> Result<Self, AppError> {
        let session = Session::new(config)?;
        info!("Monnify client ready for {}", session.environment());
        Ok(Self::from_session(Arc::new(session)))
    }

    /// Creates a client in test mode against the given server
    ///
    /// See [`Session::with_base_url`].
    pub fn with_base_url(config: Config, base_url: &str) -> Result<Self, AppError> {
        let session = Session::with_base_url(config, base_url)?;
        Ok(Self::from_session(Arc::new(session)))
    }

    /// Creates a client on top of an existing session
    pub fn from_session(session: Arc<Session>) -> Self {
        let general = Arc::new(General::new(session.clone()));
        Self { session, general }
    }

    /// Shared session
    #[must_use]
    pub fn session(&self) -> Arc<Session> {
        self.session.clone()
    }

    /// Reserved account endpoints
    #[must_use]
    pub fn reserved_accounts(&self) -> ReservedAccounts {
        ReservedAccounts::new(self.session.clone())
    }

    /// Disbursement endpoints
    #[must_use]
    pub fn disbursements(&self) -> Disbursements {
        Disbursements::new(self.session.clone())
    }

    /// General endpoints; the same instance is returned on every call so
    /// its bank cache is kept
    #[must_use]
    pub fn general(&self) -> Arc<General> {
        self.general.clone()
    }
}
