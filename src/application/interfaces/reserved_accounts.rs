use crate::error::AppError;
use crate::model::requests::ReserveAccountRequest;
use crate::model::responses::{ReserveAccountResponse, TransactionsResponse};
use async_trait::async_trait;

/// Interface for the reserved account service
#[async_trait]
pub trait ReservedAccountService: Send + Sync {
    /// Reserves an account number for a customer
    ///
    /// An empty contract code is replaced with the configured default.
    async fn reserve_account(
        &self,
        request: ReserveAccountRequest,
    ) -> Result<ReserveAccountResponse, AppError>;

    /// Gets the details of a reserved account
    ///
    /// # Arguments
    /// * `account_reference` - Merchant reference used when reserving the account
    async fn details(&self, account_reference: &str) -> Result<ReserveAccountResponse, AppError>;

    /// Releases a reserved account number
    async fn deallocate(&self, account_number: &str) -> Result<(), AppError>;

    /// Gets the transactions received on a reserved account
    ///
    /// # Arguments
    /// * `account_reference` - Merchant reference of the account
    /// * `page` - Zero based page number
    /// * `size` - Page size
    async fn transactions(
        &self,
        account_reference: &str,
        page: u32,
        size: u32,
    ) -> Result<TransactionsResponse, AppError>;
}
