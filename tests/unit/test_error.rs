use monnify_client::error::AppError;

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("apiKey required".to_string());
    assert_eq!(error.to_string(), "config error: apiKey required");
}

#[test]
fn test_app_error_display_request_failed() {
    let error = AppError::RequestFailed {
        status: 401,
        code: "99".to_string(),
        message: "unauthorized".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("401"));
    assert!(text.contains("99"));
    assert!(text.contains("unauthorized"));
    assert_eq!(error.http_status(), Some(401));
    assert_eq!(error.provider_code(), Some("99"));
}

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::Serialization("key must be a string".to_string());
    assert_eq!(error.to_string(), "serialization error: key must be a string");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("account reference is required".to_string());
    assert_eq!(error.to_string(), "invalid input: account reference is required");
    assert_eq!(error.http_status(), None);
    assert_eq!(error.provider_code(), None);
}

// reqwest::Error cannot be constructed directly; the conversion is covered
// by the integration tests

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Decode(_)));
    assert!(app_error.to_string().starts_with("decode error"));
}
