/// Disbursement service for transfers and wallet queries
pub mod disbursements;
/// General service for transaction status and bank data
pub mod general;
/// Reserved account service
pub mod reserved_accounts;

pub use disbursements::Disbursements;
pub use general::General;
pub use reserved_accounts::ReservedAccounts;

use crate::error::AppError;

/// Rejects an empty path or query argument before any network call
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{name} is required")));
    }
    Ok(())
}
