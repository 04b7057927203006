/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default`
///
/// Surrounding whitespace is ignored. An empty or unparsable value is
/// reported and replaced by the default.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T {
    match get_env_or_none(env_var) {
        Some(value) => value,
        None => {
            let is_set = env::var(env_var).is_ok_and(|raw| !raw.trim().is_empty());
            if is_set {
                warn!("Failed to parse {}, using default", env_var);
            }
            default
        }
    }
}

/// Reads and parses an environment variable
///
/// # Returns
/// Parsed value if the variable is set, non empty and valid, `None` otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<T>().ok())
}
