/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Currency accepted by the Monnify API
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    /// Nigerian naira
    #[default]
    #[serde(rename = "NGN")]
    Ngn,
}

/// Behaviour of a bulk transfer when one of its items fails validation
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ValidationFailure {
    /// Skip the invalid item and process the rest
    #[default]
    #[serde(rename = "CONTINUE")]
    Continue,
    /// Reject the whole batch
    #[serde(rename = "BREAK")]
    Break,
}

/// Percentage of processed bulk transfer items after which a notification is sent
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum NotificationInterval {
    /// Every 10%
    #[default]
    Ten,
    /// Every 20%
    Twenty,
    /// Every 50%
    Fifty,
    /// On completion
    Hundred,
}

impl NotificationInterval {
    /// Interval as the percentage sent on the wire
    #[must_use]
    pub fn as_percent(&self) -> u8 {
        match self {
            NotificationInterval::Ten => 10,
            NotificationInterval::Twenty => 20,
            NotificationInterval::Fifty => 50,
            NotificationInterval::Hundred => 100,
        }
    }
}

impl Serialize for NotificationInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_percent())
    }
}

impl<'de> Deserialize<'de> for NotificationInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            10 => Ok(NotificationInterval::Ten),
            20 => Ok(NotificationInterval::Twenty),
            50 => Ok(NotificationInterval::Fifty),
            100 => Ok(NotificationInterval::Hundred),
            other => Err(serde::de::Error::custom(format!(
                "unsupported notification interval: {other}"
            ))),
        }
    }
}

/// Model for sending money to a single recipient
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SingleTransferRequest {
    /// Amount to transfer
    pub amount: f64,
    /// Unique merchant reference of the transfer
    pub reference: String,
    /// Narration shown to the recipient
    pub narration: String,
    /// Recipient bank code
    pub bank_code: String,
    /// Recipient account number
    pub account_number: String,
    /// Transfer currency
    pub currency: Currency,
    /// Wallet to debit, the merchant default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
}

impl SingleTransferRequest {
    /// Creates a naira transfer debiting the default wallet
    pub fn new(
        amount: f64,
        reference: &str,
        narration: &str,
        bank_code: &str,
        account_number: &str,
    ) -> Self {
        Self {
            amount,
            reference: reference.to_string(),
            narration: narration.to_string(),
            bank_code: bank_code.to_string(),
            account_number: account_number.to_string(),
            currency: Currency::Ngn,
            wallet_id: None,
        }
    }

    /// Set the wallet to debit
    #[must_use]
    pub fn with_wallet_id(mut self, wallet_id: &str) -> Self {
        self.wallet_id = Some(wallet_id.to_string());
        self
    }

    /// Set the currency
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

/// Model for sending money to a list of recipients
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BulkTransferRequest {
    /// Batch title
    pub title: String,
    /// Unique merchant reference of the batch
    pub batch_reference: String,
    /// Narration shown to every recipient
    pub narration: String,
    /// Wallet to debit
    pub wallet_id: String,
    /// What to do with items that fail validation
    pub on_validation_failure: ValidationFailure,
    /// Progress notification interval
    pub notification_interval: NotificationInterval,
    /// Transfers in the batch
    pub transaction_list: Vec<SingleTransferRequest>,
}

impl BulkTransferRequest {
    /// Creates an empty batch
    pub fn new(title: &str, batch_reference: &str, narration: &str, wallet_id: &str) -> Self {
        Self {
            title: title.to_string(),
            batch_reference: batch_reference.to_string(),
            narration: narration.to_string(),
            wallet_id: wallet_id.to_string(),
            ..Default::default()
        }
    }

    /// Append a transfer to the batch
    #[must_use]
    pub fn with_transfer(mut self, transfer: SingleTransferRequest) -> Self {
        self.transaction_list.push(transfer);
        self
    }

    /// Set the validation failure behaviour
    #[must_use]
    pub fn with_on_validation_failure(mut self, option: ValidationFailure) -> Self {
        self.on_validation_failure = option;
        self
    }

    /// Set the notification interval
    #[must_use]
    pub fn with_notification_interval(mut self, interval: NotificationInterval) -> Self {
        self.notification_interval = interval;
        self
    }

    /// Sum of the amounts of every transfer in the batch
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.transaction_list.iter().map(|t| t.amount).sum()
    }
}

/// Share of the income of a reserved account paid to a sub account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct IncomeSplitConfig {
    /// Sub account receiving the split
    pub sub_account_code: String,
    /// Percentage of the fee charged to the sub account
    pub fee_percentage: f64,
    /// Percentage of the income paid to the sub account
    pub split_percentage: f64,
    /// Whether the sub account bears the fee
    pub fee_bearer: bool,
}

/// Bank account allowed to pay into a restricted reserved account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BankAccount {
    /// Account number
    pub account_number: String,
    /// Bank code
    pub bank_code: String,
}

/// Payment sources allowed when `restrictPaymentSource` is set
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AllowedPaymentSources {
    /// Allowed bank accounts
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bank_accounts: Vec<BankAccount>,
    /// Allowed account names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub account_names: Vec<String>,
}

/// Model for reserving an account number for a customer
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ReserveAccountRequest {
    /// Unique merchant reference of the account
    pub account_reference: String,
    /// Name of the reserved account
    pub account_name: String,
    /// Account currency
    pub currency_code: Currency,
    /// Merchant contract code; the configured default is used when empty
    pub contract_code: String,
    /// Customer email
    pub customer_email: String,
    /// Customer name
    pub customer_name: String,
    /// Only accept payments from [`AllowedPaymentSources`]
    pub restrict_payment_source: bool,
    /// Income split between sub accounts
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub income_split_config: Vec<IncomeSplitConfig>,
    /// Allowed payment sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_payment_sources: Option<AllowedPaymentSources>,
}

impl ReserveAccountRequest {
    /// Creates a request with the required customer details
    pub fn new(
        account_reference: &str,
        account_name: &str,
        customer_email: &str,
        customer_name: &str,
    ) -> Self {
        Self {
            account_reference: account_reference.to_string(),
            account_name: account_name.to_string(),
            customer_email: customer_email.to_string(),
            customer_name: customer_name.to_string(),
            ..Default::default()
        }
    }

    /// Set the contract code
    #[must_use]
    pub fn with_contract_code(mut self, contract_code: &str) -> Self {
        self.contract_code = contract_code.to_string();
        self
    }

    /// Add an income split
    #[must_use]
    pub fn with_income_split(mut self, split: IncomeSplitConfig) -> Self {
        self.income_split_config.push(split);
        self
    }

    /// Restrict payments to the given sources
    #[must_use]
    pub fn with_allowed_payment_sources(mut self, sources: AllowedPaymentSources) -> Self {
        self.restrict_payment_source = true;
        self.allowed_payment_sources = Some(sources);
        self
    }
}

/// OTP authorisation of a transfer
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeTransferRequest<'a> {
    /// Reference of the transfer or batch
    pub reference: &'a str,
    /// OTP received by the merchant
    pub authorization_code: &'a str,
}

/// Request for a new transfer OTP
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResendOtpRequest<'a> {
    /// Reference of the transfer
    pub reference: &'a str,
}
