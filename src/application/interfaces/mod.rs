/// Disbursement service interface
pub mod disbursements;
/// General service interface
pub mod general;
/// Reserved account service interface
pub mod reserved_accounts;

pub use disbursements::DisbursementService;
pub use general::GeneralService;
pub use reserved_accounts::ReservedAccountService;
