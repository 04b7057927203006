use crate::error::AppError;
use crate::model::responses::{BanksResponse, GeneralTransaction, GeneralTransactionResponse};
use async_trait::async_trait;

/// Interface for transaction status and reference data
#[async_trait]
pub trait GeneralService: Send + Sync {
    /// Gets a transaction by its Monnify transaction reference
    async fn get_transaction(
        &self,
        transaction_reference: &str,
    ) -> Result<GeneralTransactionResponse, AppError>;

    /// Gets the banks supported for transfers and USSD payments
    async fn get_banks(&self) -> Result<BanksResponse, AppError>;

    /// Checks that a payment notification was signed with the merchant secret
    ///
    /// With `two_step` the transaction is also fetched from the API and must
    /// be `PAID`. Returns `false` on any failure.
    async fn verify_transaction(&self, payload: &GeneralTransaction, two_step: bool) -> bool;
}
