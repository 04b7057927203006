/// Generates a reference suitable for transfers and reserved accounts
///
/// Monnify requires merchant supplied references to be unique per merchant.
/// The reference is 30 characters of uppercase letters (`A-Z`) and digits
/// (`0-9`) produced by `nanoid`.
///
/// # Examples
/// ```
/// use monnify_client::utils::id::generate_reference;
/// let reference = generate_reference();
/// assert_eq!(reference.len(), 30);
/// ```
#[must_use]
pub fn generate_reference() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(30, &alphabet)
}

/// Generates a reference with a merchant chosen prefix, e.g. `TRF_...`
#[must_use]
pub fn generate_prefixed_reference(prefix: &str) -> String {
    format!("{}_{}", prefix.trim_end_matches('_'), generate_reference())
}
