/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::interfaces::ReservedAccountService;
use crate::application::services::require_non_empty;
use crate::application::session::Session;
use crate::error::AppError;
use crate::model::http::AuthScheme;
use crate::model::requests::ReserveAccountRequest;
use crate::model::responses::{ReserveAccountResponse, TransactionsResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

const RESERVED_ACCOUNTS_PATH: &str = "/v1/bank-transfer/reserved-accounts";

/// Reserved account endpoints, authenticated with a bearer token
#[derive(Debug, Clone)]
pub struct ReservedAccounts {
    session: Arc<Session>,
}

impl ReservedAccounts {
    /// Creates the service on top of a shared session
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ReservedAccountService for ReservedAccounts {
    async fn reserve_account(
        &self,
        request: ReserveAccountRequest,
    ) -> Result<ReserveAccountResponse, AppError> {
        let mut request = request;
        if request.contract_code.is_empty() {
            request.contract_code = self.session.config().default_contract_code.clone();
        }
        info!("Reserving account: {}", request.account_reference);

        let response: ReserveAccountResponse = self
            .session
            .post_json(RESERVED_ACCOUNTS_PATH, AuthScheme::Bearer, &request)
            .await?;

        debug!(
            "Account reserved: {} at {}",
            response.response_body.account_number, response.response_body.bank_name
        );
        Ok(response)
    }

    async fn details(&self, account_reference: &str) -> Result<ReserveAccountResponse, AppError> {
        require_non_empty("account reference", account_reference)?;
        let url = self
            .session
            .endpoint_url(RESERVED_ACCOUNTS_PATH, &[account_reference], &[])?;
        debug!("Getting reserved account details: {}", account_reference);

        self.session.get_json(&url, AuthScheme::Bearer).await
    }

    async fn deallocate(&self, account_number: &str) -> Result<(), AppError> {
        require_non_empty("account number", account_number)?;
        let url = self
            .session
            .endpoint_url(RESERVED_ACCOUNTS_PATH, &[account_number], &[])?;
        info!("Deallocating reserved account: {}", account_number);

        let _: ReserveAccountResponse = self.session.delete_json(&url, AuthScheme::Bearer).await?;
        Ok(())
    }

    async fn transactions(
        &self,
        account_reference: &str,
        page: u32,
        size: u32,
    ) -> Result<TransactionsResponse, AppError> {
        require_non_empty("account reference", account_reference)?;
        let url = self.session.url_with_query(
            &format!("{RESERVED_ACCOUNTS_PATH}/transactions"),
            &[
                ("accountReference", account_reference.to_string()),
                ("page", page.to_string()),
                ("size", size.to_string()),
            ],
        )?;

        let response: TransactionsResponse =
            self.session.get_json(&url, AuthScheme::Bearer).await?;
        debug!(
            "Reserved account transactions obtained: {} of {}",
            response.response_body.content.len(),
            response.response_body.total_elements
        );
        Ok(response)
    }
}
