/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use sha2::{Digest, Sha512};

/// Computes the hash Monnify attaches to a completed transaction
///
/// The hash is the lowercase hex SHA-512 of
/// `secret|paymentReference|amountPaid|paidOn|transactionReference`.
#[must_use]
pub fn transaction_hash(
    secret_key: &str,
    payment_reference: &str,
    amount_paid: &str,
    paid_on: &str,
    transaction_reference: &str,
) -> String {
    let raw = format!(
        "{secret_key}|{payment_reference}|{amount_paid}|{paid_on}|{transaction_reference}"
    );
    let digest = Sha512::digest(raw.as_bytes());
    format!("{digest:x}")
}
