use monnify_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn env_default_when_missing() {
    let value: u64 = get_env_or_default("MONNIFY_UNIT_TEST_MISSING_VAR", 5);
    assert_eq!(value, 5);
    assert_eq!(get_env_or_none::<String>("MONNIFY_UNIT_TEST_MISSING_VAR"), None);
}

#[test]
fn env_value_is_parsed() {
    // SAFETY: the variable name is unique to this test
    unsafe { std::env::set_var("MONNIFY_UNIT_TEST_TIMEOUT", " 42 ") };
    let value: u64 = get_env_or_default("MONNIFY_UNIT_TEST_TIMEOUT", 5);
    assert_eq!(value, 42);
    unsafe { std::env::remove_var("MONNIFY_UNIT_TEST_TIMEOUT") };
}

#[test]
fn env_unparsable_falls_back() {
    // SAFETY: the variable name is unique to this test
    unsafe { std::env::set_var("MONNIFY_UNIT_TEST_BAD_NUMBER", "soon") };
    let value: u64 = get_env_or_default("MONNIFY_UNIT_TEST_BAD_NUMBER", 7);
    assert_eq!(value, 7);
    unsafe { std::env::remove_var("MONNIFY_UNIT_TEST_BAD_NUMBER") };
}
