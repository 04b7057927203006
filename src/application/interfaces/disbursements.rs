use crate::error::AppError;
use crate::model::requests::{BulkTransferRequest, SingleTransferRequest};
use crate::model::responses::{
    BulkTransferDetailsResponse, BulkTransferResponse, ResendOtpResponse,
    SingleTransferDetailsResponse, SingleTransferResponse, TransferTransactionsResponse,
    ValidAccountNumberResponse, WalletBalanceResponse,
};
use async_trait::async_trait;

/// Interface for the disbursement service
#[async_trait]
pub trait DisbursementService: Send + Sync {
    /// Sends money to a single recipient
    async fn single_transfer(
        &self,
        request: &SingleTransferRequest,
    ) -> Result<SingleTransferResponse, AppError>;

    /// Sends money to every recipient of a batch
    async fn bulk_transfer(
        &self,
        request: &BulkTransferRequest,
    ) -> Result<BulkTransferResponse, AppError>;

    /// Authorises a pending single transfer with its OTP
    async fn authorize_single_transfer(
        &self,
        reference: &str,
        authorization_code: &str,
    ) -> Result<SingleTransferResponse, AppError>;

    /// Authorises a pending batch with its OTP
    async fn authorize_bulk_transfer(
        &self,
        reference: &str,
        authorization_code: &str,
    ) -> Result<BulkTransferResponse, AppError>;

    /// Gets the status of a single transfer
    async fn single_transfer_details(
        &self,
        reference: &str,
    ) -> Result<SingleTransferDetailsResponse, AppError>;

    /// Gets the summary of a batch
    async fn bulk_transfer_details(
        &self,
        batch_reference: &str,
    ) -> Result<BulkTransferDetailsResponse, AppError>;

    /// Lists the transfers of a batch
    async fn bulk_transfer_transactions(
        &self,
        batch_reference: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<TransferTransactionsResponse, AppError>;

    /// Lists every single transfer
    async fn single_transfer_transactions(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<TransferTransactionsResponse, AppError>;

    /// Resolves the name registered on a bank account
    async fn validate_account_number(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<ValidAccountNumberResponse, AppError>;

    /// Gets the balance of a disbursement wallet
    async fn wallet_balance(&self, wallet_id: &str) -> Result<WalletBalanceResponse, AppError>;

    /// Asks for a new OTP for a pending transfer
    async fn resend_otp(&self, reference: &str) -> Result<ResendOtpResponse, AppError>;
}
