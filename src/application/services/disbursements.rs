/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::interfaces::DisbursementService;
use crate::application::services::require_non_empty;
use crate::application::session::Session;
use crate::error::AppError;
use crate::model::http::AuthScheme;
use crate::model::requests::{
    AuthorizeTransferRequest, BulkTransferRequest, ResendOtpRequest, SingleTransferRequest,
};
use crate::model::responses::{
    BulkTransferDetailsResponse, BulkTransferResponse, ResendOtpResponse,
    SingleTransferDetailsResponse, SingleTransferResponse, TransferTransactionsResponse,
    ValidAccountNumberResponse, WalletBalanceResponse,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

const DISBURSEMENTS_PATH: &str = "/v1/disbursements";

/// Disbursement endpoints, authenticated with the API key and secret
#[derive(Debug, Clone)]
pub struct Disbursements {
    session: Arc<Session>,
}

impl Disbursements {
    /// Creates the service on top of a shared session
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    fn path(endpoint: &str) -> String {
        format!("{DISBURSEMENTS_PATH}/{endpoint}")
    }
}

#[async_trait]
impl DisbursementService for Disbursements {
    async fn single_transfer(
        &self,
        request: &SingleTransferRequest,
    ) -> Result<SingleTransferResponse, AppError> {
        info!(
            "Initiating transfer {} of {} to {}/{}",
            request.reference, request.amount, request.bank_code, request.account_number
        );

        let response: SingleTransferResponse = self
            .session
            .post_json(&Self::path("single"), AuthScheme::Basic, request)
            .await?;

        debug!("Transfer {} status: {}", request.reference, response.response_body.status);
        Ok(response)
    }

    async fn bulk_transfer(
        &self,
        request: &BulkTransferRequest,
    ) -> Result<BulkTransferResponse, AppError> {
        info!(
            "Initiating batch {} with {} transfers totalling {}",
            request.batch_reference,
            request.transaction_list.len(),
            request.total_amount()
        );

        let response: BulkTransferResponse = self
            .session
            .post_json(&Self::path("batch"), AuthScheme::Basic, request)
            .await?;

        debug!(
            "Batch {} status: {}",
            request.batch_reference, response.response_body.batch_status
        );
        Ok(response)
    }

    async fn authorize_single_transfer(
        &self,
        reference: &str,
        authorization_code: &str,
    ) -> Result<SingleTransferResponse, AppError> {
        info!("Authorizing transfer: {}", reference);
        let body = AuthorizeTransferRequest {
            reference,
            authorization_code,
        };
        self.session
            .post_json(&Self::path("single/validate-otp"), AuthScheme::Basic, &body)
            .await
    }

    async fn authorize_bulk_transfer(
        &self,
        reference: &str,
        authorization_code: &str,
    ) -> Result<BulkTransferResponse, AppError> {
        info!("Authorizing batch: {}", reference);
        let body = AuthorizeTransferRequest {
            reference,
            authorization_code,
        };
        self.session
            .post_json(&Self::path("batch/validate-otp"), AuthScheme::Basic, &body)
            .await
    }

    async fn single_transfer_details(
        &self,
        reference: &str,
    ) -> Result<SingleTransferDetailsResponse, AppError> {
        require_non_empty("reference", reference)?;
        let url = self.session.url_with_query(
            &Self::path("single/summary"),
            &[("reference", reference.to_string())],
        )?;
        self.session.get_json(&url, AuthScheme::Basic).await
    }

    async fn bulk_transfer_details(
        &self,
        batch_reference: &str,
    ) -> Result<BulkTransferDetailsResponse, AppError> {
        require_non_empty("batch reference", batch_reference)?;
        let url = self.session.url_with_query(
            &Self::path("batch/summary"),
            &[("reference", batch_reference.to_string())],
        )?;
        self.session.get_json(&url, AuthScheme::Basic).await
    }

    async fn bulk_transfer_transactions(
        &self,
        batch_reference: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<TransferTransactionsResponse, AppError> {
        require_non_empty("batch reference", batch_reference)?;
        let url = self.session.endpoint_url(
            &Self::path("bulk"),
            &[batch_reference, "transactions"],
            &[("pageNo", page_no.to_string()), ("pageSize", page_size.to_string())],
        )?;

        let response: TransferTransactionsResponse =
            self.session.get_json(&url, AuthScheme::Basic).await?;
        debug!(
            "Batch {} transfers obtained: {}",
            batch_reference,
            response.response_body.content.len()
        );
        Ok(response)
    }

    async fn single_transfer_transactions(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<TransferTransactionsResponse, AppError> {
        let url = self.session.url_with_query(
            &Self::path("single/transactions"),
            &[("pageNo", page_no.to_string()), ("pageSize", page_size.to_string())],
        )?;

        let response: TransferTransactionsResponse =
            self.session.get_json(&url, AuthScheme::Basic).await?;
        debug!("Transfers obtained: {}", response.response_body.content.len());
        Ok(response)
    }

    async fn validate_account_number(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<ValidAccountNumberResponse, AppError> {
        require_non_empty("account number", account_number)?;
        require_non_empty("bank code", bank_code)?;
        let url = self.session.url_with_query(
            &Self::path("account/validate"),
            &[
                ("accountNumber", account_number.to_string()),
                ("bankCode", bank_code.to_string()),
            ],
        )?;
        self.session.get_json(&url, AuthScheme::Basic).await
    }

    async fn wallet_balance(&self, wallet_id: &str) -> Result<WalletBalanceResponse, AppError> {
        require_non_empty("wallet id", wallet_id)?;
        let url = self
            .session
            .url_with_query(&Self::path("wallet-balance"), &[("walletId", wallet_id.to_string())])?;

        let response: WalletBalanceResponse =
            self.session.get_json(&url, AuthScheme::Basic).await?;
        debug!(
            "Wallet {} available balance: {}",
            wallet_id, response.response_body.available_balance
        );
        Ok(response)
    }

    async fn resend_otp(&self, reference: &str) -> Result<ResendOtpResponse, AppError> {
        info!("Requesting new OTP for transfer: {}", reference);
        self.session
            .post_json(
                &Self::path("single/resend-otp"),
                AuthScheme::Basic,
                &ResendOtpRequest { reference },
            )
            .await
    }
}
