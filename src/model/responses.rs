/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::requests::IncomeSplitConfig;
use crate::model::utils::{null_as_default, string_or_number};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Envelope wrapping every Monnify response
///
/// Error responses often omit `responseBody` or send `null`; both decode to
/// `T::default()` so the status code and provider message stay readable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    /// Whether the provider considers the request successful
    #[serde(default)]
    pub request_successful: bool,
    /// Provider message
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_message: String,
    /// Provider response code, `"0"` on success
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_code: String,
    /// Endpoint specific payload
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_body: T,
}

impl<T> ApiResponse<T> {
    /// Consumes the envelope and returns its payload
    pub fn into_body(self) -> T {
        self.response_body
    }
}

/// Sort state of a paged result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Sort {
    /// Sorted
    pub sorted: bool,
    /// Unsorted
    pub unsorted: bool,
    /// No sort applied
    pub empty: bool,
}

/// Paging request echoed back by the API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Pageable {
    /// Sort state
    pub sort: Sort,
    /// Requested page size
    pub page_size: u32,
    /// Requested page number, zero based
    pub page_number: u32,
    /// Offset of the first element
    pub offset: u64,
    /// Whether paging was disabled
    pub unpaged: bool,
    /// Whether paging was enabled
    pub paged: bool,
}

/// One page of a paged result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Page<T> {
    /// Elements of the page
    pub content: Vec<T>,
    /// Paging request
    pub pageable: Pageable,
    /// Total number of elements
    pub total_elements: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Whether this is the last page
    pub last: bool,
    /// Sort state
    pub sort: Sort,
    /// Whether this is the first page
    pub first: bool,
    /// Number of elements in this page
    pub number_of_elements: u32,
    /// Page size
    pub size: u32,
    /// Page number, zero based
    pub number: u32,
    /// Whether the page is empty
    pub empty: bool,
}

/// Contract a reserved account belongs to
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Contract {
    /// Contract name
    pub name: String,
    /// Contract code
    pub code: String,
    /// Contract description
    pub description: Option<String>,
    /// Whether a settlement account can be chosen per account
    pub supports_advanced_settlement_account_selection: bool,
    /// Whether funds are swept to an external account
    pub sweep_to_external_account: bool,
}

/// Reserved account details
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservedAccount {
    /// Merchant contract code
    pub contract_code: String,
    /// Merchant reference of the account
    pub account_reference: String,
    /// Account name
    pub account_name: String,
    /// Account currency
    pub currency_code: String,
    /// Customer email
    pub customer_email: String,
    /// Customer name
    pub customer_name: String,
    /// NUBAN account number
    pub account_number: String,
    /// Name of the bank hosting the account
    pub bank_name: String,
    /// Code of the bank hosting the account
    pub bank_code: String,
    /// Collection channel, `RESERVED_ACCOUNT`
    pub collection_channel: String,
    /// Monnify reservation reference
    pub reservation_reference: String,
    /// Account type, e.g. `GENERAL`
    pub reserved_account_type: String,
    /// Account status, e.g. `ACTIVE`
    pub status: String,
    /// Creation timestamp as sent by the API
    pub created_on: String,
    /// Income split between sub accounts
    #[serde(deserialize_with = "null_as_default")]
    pub income_split_config: Vec<IncomeSplitConfig>,
    /// Whether payment sources are restricted
    pub restrict_payment_source: bool,
    /// Contract of the account
    #[serde(deserialize_with = "null_as_default")]
    pub contract: Contract,
}

/// Customer attached to a transaction
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerDto {
    /// Customer email
    pub email: String,
    /// Customer name
    pub name: String,
    /// Merchant code
    pub merchant_code: String,
}

/// Transaction received on a reserved account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    /// Paying customer
    #[serde(rename = "customerDTO")]
    pub customer_dto: CustomerDto,
    /// Amount charged by the provider
    pub provider_amount: f64,
    /// Payment method, e.g. `ACCOUNT_TRANSFER`
    pub payment_method: String,
    /// Creation timestamp
    pub created_on: String,
    /// Transaction amount
    pub amount: f64,
    /// Whether the transaction was flagged
    pub flagged: bool,
    /// Provider code
    pub provider_code: String,
    /// Fee charged
    pub fee: f64,
    /// Currency
    pub currency_code: String,
    /// Completion timestamp
    pub completed_on: String,
    /// Payment description
    pub payment_description: String,
    /// Payment status, see `PAYMENT_STATUS_*` constants
    pub payment_status: String,
    /// Monnify transaction reference
    pub transaction_reference: String,
    /// Merchant payment reference
    pub payment_reference: String,
    /// Merchant code
    pub merchant_code: String,
    /// Merchant name
    pub merchant_name: String,
    /// Amount the customer had to pay
    pub payable_amount: f64,
    /// Amount the customer paid
    pub amount_paid: f64,
    /// Whether the transaction completed
    pub completed: bool,
}

/// Result of a single transfer or its OTP authorisation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SingleTransfer {
    /// Amount transferred
    pub amount: f64,
    /// Merchant reference
    pub reference: String,
    /// Transfer status
    pub status: String,
    /// Creation timestamp
    pub date_created: String,
}

/// Result of a bulk transfer or its OTP authorisation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkTransfer {
    /// Sum of the transfer amounts
    pub total_amount: f64,
    /// Sum of the fees
    pub total_fee: f64,
    /// Merchant batch reference
    pub batch_reference: String,
    /// Batch status
    pub batch_status: String,
    /// Number of transfers
    pub total_transactions: u32,
    /// Creation timestamp
    #[serde(alias = "date_created")]
    pub date_created: String,
}

/// Details of a single transfer
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TransferDetails {
    /// Amount transferred
    pub amount: f64,
    /// Merchant reference
    pub reference: String,
    /// Narration
    pub narration: String,
    /// Recipient bank code
    pub bank_code: String,
    /// Recipient account number
    pub account_number: String,
    /// Currency
    pub currency: String,
    /// Recipient account name
    pub account_name: String,
    /// Recipient bank name
    pub bank_name: String,
    /// Creation timestamp
    pub date_created: String,
    /// Fee charged
    pub fee: f64,
    /// Transfer status
    pub status: String,
}

/// Summary of a bulk transfer
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkTransferDetails {
    /// Batch title
    pub title: String,
    /// Sum of the transfer amounts
    pub total_amount: f64,
    /// Sum of the fees
    pub total_fee: f64,
    /// Merchant batch reference
    pub batch_reference: String,
    /// Number of transfers
    pub total_transactions: u32,
    /// Failed transfers
    pub failed_count: u32,
    /// Successful transfers
    pub successful_count: u32,
    /// Pending transfers
    pub pending_count: u32,
    /// Batch status
    pub batch_status: String,
    /// Creation timestamp
    pub date_created: String,
}

/// Result of a bank account validation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountValidation {
    /// Account number
    pub account_number: String,
    /// Name registered on the account
    pub account_name: String,
    /// Bank code
    pub bank_code: String,
}

/// Disbursement wallet balance
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletBalance {
    /// Balance available for transfers
    pub available_balance: f64,
    /// Ledger balance
    pub ledger_balance: f64,
}

/// Confirmation that an OTP was resent
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct OtpResent {
    /// Provider message
    pub message: String,
}

/// Product that originated a transaction
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Product {
    /// Product type, e.g. `WEB_SDK`
    #[serde(rename = "type")]
    pub product_type: String,
    /// Product reference
    pub reference: String,
}

/// Account that paid into a transaction
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountPayment {
    /// Payer account name
    pub account_name: String,
    /// Masked payer account number
    pub account_number: String,
    /// Payer bank code
    pub bank_code: String,
    /// Amount paid, as sent by the API
    #[serde(deserialize_with = "string_or_number")]
    pub amount_paid: String,
}

/// Customer of a transaction
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Customer {
    /// Customer email
    pub email: String,
    /// Customer name
    pub name: String,
}

/// Transaction status, also the payload of payment webhooks
///
/// Amounts are kept as the text the API sent because they take part in
/// the transaction hash.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralTransaction {
    /// Monnify transaction reference
    pub transaction_reference: String,
    /// Merchant payment reference
    pub payment_reference: String,
    /// Amount paid
    #[serde(deserialize_with = "string_or_number")]
    pub amount_paid: String,
    /// Amount payable
    #[serde(deserialize_with = "string_or_number")]
    pub total_payable: String,
    /// Amount settled to the merchant
    #[serde(deserialize_with = "string_or_number")]
    pub settlement_amount: String,
    /// Payment timestamp
    pub paid_on: String,
    /// SHA-512 transaction hash
    pub transaction_hash: String,
    /// Payment status, see `PAYMENT_STATUS_*` constants
    pub payment_status: String,
    /// Payment description
    pub payment_description: String,
    /// Currency
    pub currency: String,
    /// Payment method
    pub payment_method: String,
    /// Originating product
    #[serde(deserialize_with = "null_as_default")]
    pub product: Product,
    /// Card details for card payments
    pub card_details: Option<Value>,
    /// Paying account for transfer payments
    pub account_details: Option<AccountPayment>,
    /// Every account that paid into the transaction
    #[serde(deserialize_with = "null_as_default")]
    pub account_payments: Vec<AccountPayment>,
    /// Paying customer
    #[serde(deserialize_with = "null_as_default")]
    pub customer: Customer,
    /// Merchant supplied metadata
    #[serde(deserialize_with = "null_as_default")]
    pub meta_data: HashMap<String, Value>,
}

/// Bank and its USSD codes
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Bank {
    /// Bank name
    pub name: String,
    /// Bank code
    pub code: String,
    /// USSD payment template
    pub ussd_template: Option<String>,
    /// Base USSD code
    pub base_ussd_code: Option<String>,
    /// USSD transfer template
    pub transfer_ussd_template: Option<String>,
}

/// Response of `POST /v1/bank-transfer/reserved-accounts` and related endpoints
pub type ReserveAccountResponse = ApiResponse<ReservedAccount>;
/// Response of the reserved account transactions endpoint
pub type TransactionsResponse = ApiResponse<Page<Transaction>>;
/// Response of single transfer endpoints
pub type SingleTransferResponse = ApiResponse<SingleTransfer>;
/// Response of bulk transfer endpoints
pub type BulkTransferResponse = ApiResponse<BulkTransfer>;
/// Response of the single transfer summary endpoint
pub type SingleTransferDetailsResponse = ApiResponse<TransferDetails>;
/// Response of the bulk transfer summary endpoint
pub type BulkTransferDetailsResponse = ApiResponse<BulkTransferDetails>;
/// Response of the transfer listing endpoints
pub type TransferTransactionsResponse = ApiResponse<Page<TransferDetails>>;
/// Response of the account validation endpoint
pub type ValidAccountNumberResponse = ApiResponse<AccountValidation>;
/// Response of the wallet balance endpoint
pub type WalletBalanceResponse = ApiResponse<WalletBalance>;
/// Response of the OTP resend endpoint
pub type ResendOtpResponse = ApiResponse<OtpResent>;
/// Response of the transaction status endpoint
pub type GeneralTransactionResponse = ApiResponse<GeneralTransaction>;
/// Response of the bank list endpoint
pub type BanksResponse = ApiResponse<Vec<Bank>>;
