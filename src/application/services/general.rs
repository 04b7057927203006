/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::interfaces::GeneralService;
use crate::application::services::require_non_empty;
use crate::application::session::Session;
use crate::constants::PAYMENT_STATUS_PAID;
use crate::error::AppError;
use crate::model::http::AuthScheme;
use crate::model::responses::{Bank, BanksResponse, GeneralTransaction, GeneralTransactionResponse};
use crate::utils::transaction_hash;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Transaction status, bank list and payment notification checks
///
/// Authenticated with a bearer token. The bank list is cached per instance
/// once [`General::get_banks_cached`] has fetched it.
#[derive(Debug)]
pub struct General {
    session: Arc<Session>,
    banks: RwLock<Option<Vec<Bank>>>,
}

impl General {
    /// Creates the service on top of a shared session
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            banks: RwLock::new(None),
        }
    }

    /// Returns the cached bank list, fetching it on first use
    ///
    /// Failed fetches are not cached.
    pub async fn get_banks_cached(&self) -> Result<Vec<Bank>, AppError> {
        if let Some(banks) = self.banks.read().await.as_ref() {
            debug!("Bank list served from cache: {} banks", banks.len());
            return Ok(banks.clone());
        }

        let banks = self.get_banks().await?.into_body();
        *self.banks.write().await = Some(banks.clone());
        Ok(banks)
    }

    /// Drops the cached bank list so the next cached read fetches it again
    pub async fn invalidate_bank_cache(&self) {
        *self.banks.write().await = None;
        debug!("Bank list cache cleared");
    }

    fn hash_matches(&self, payload: &GeneralTransaction) -> bool {
        let expected = transaction_hash(
            &self.session.config().credentials.secret_key,
            &payload.payment_reference,
            &payload.amount_paid,
            &payload.paid_on,
            &payload.transaction_reference,
        );
        expected.eq_ignore_ascii_case(&payload.transaction_hash)
    }
}

#[async_trait]
impl GeneralService for General {
    async fn get_transaction(
        &self,
        transaction_reference: &str,
    ) -> Result<GeneralTransactionResponse, AppError> {
        require_non_empty("transaction reference", transaction_reference)?;
        let url = self
            .session
            .endpoint_url("/v2/transactions", &[transaction_reference], &[])?;
        debug!("Getting transaction: {}", transaction_reference);

        let response: GeneralTransactionResponse =
            self.session.get_json(&url, AuthScheme::Bearer).await?;
        debug!(
            "Transaction {} status: {}",
            transaction_reference, response.response_body.payment_status
        );
        Ok(response)
    }

    async fn get_banks(&self) -> Result<BanksResponse, AppError> {
        let response: BanksResponse = self.session.get_json("/v1/banks", AuthScheme::Bearer).await?;
        debug!("Banks obtained: {}", response.response_body.len());
        Ok(response)
    }

    async fn verify_transaction(&self, payload: &GeneralTransaction, two_step: bool) -> bool {
        if !self.hash_matches(payload) {
            warn!(
                "Transaction hash mismatch for {}",
                payload.transaction_reference
            );
            return false;
        }
        if !two_step {
            return true;
        }

        match self.get_transaction(&payload.transaction_reference).await {
            Ok(response) => {
                let paid = response.response_body.payment_status == PAYMENT_STATUS_PAID;
                info!(
                    "Transaction {} confirmed by the API as {}",
                    payload.transaction_reference, response.response_body.payment_status
                );
                paid
            }
            Err(e) => {
                warn!(
                    "Could not confirm transaction {}: {}",
                    payload.transaction_reference, e
                );
                false
            }
        }
    }
}
