/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Authentication scheme applied to a request
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    /// `Authorization: Basic base64(apiKey:secretKey)`
    Basic,
    /// `Authorization: Bearer <token>` obtained from `/v1/auth/login`
    Bearer,
}

/// Body and status of a received HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Response body as text
    pub body: String,
    /// HTTP status code
    pub status: u16,
}

impl RawResponse {
    /// Whether the status is `200 OK`
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

/// Value of a Basic `Authorization` header for the given key pair
#[must_use]
pub fn basic_auth_value(api_key: &str, secret_key: &str) -> String {
    let encoded = STANDARD.encode(format!("{api_key}:{secret_key}"));
    format!("Basic {encoded}")
}

/// Value of a Bearer `Authorization` header for the given token
#[must_use]
pub fn bearer_auth_value(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// Sends one HTTP request and reads its body
///
/// Every request carries `Content-Type: application/json` and the given
/// `Authorization` value. `body` must already be JSON encoded; it is only
/// attached to methods other than GET and DELETE.
///
/// Any received response is returned, whatever its status. Only failures
/// to send the request or to read the body are errors.
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    authorization: &str,
    body: Option<Vec<u8>>,
) -> Result<RawResponse, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method.clone(), url)
        .header(AUTHORIZATION, authorization)
        .header(CONTENT_TYPE, "application/json");

    let carries_body = method != Method::GET && method != Method::DELETE;
    if let Some(payload) = body.filter(|_| carries_body) {
        request = request.body(payload);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.text().await?;
    Ok(RawResponse {
        body,
        status: status.as_u16(),
    })
}

/// Decodes a raw response into its typed envelope
///
/// The body is decoded first; a body that does not match the expected
/// shape is a [`AppError::Decode`] whatever the status. A decoded response
/// with a status other than 200 becomes [`AppError::RequestFailed`]
/// carrying the provider code and message.
pub fn decode_response<T>(raw: &RawResponse) -> Result<ApiResponse<T>, AppError>
where
    T: DeserializeOwned + Default,
{
    let decoded: ApiResponse<T> = serde_json::from_str(&raw.body)?;

    if !raw.is_ok() {
        debug!(
            "Request failed with status {}: {} {}",
            raw.status, decoded.response_code, decoded.response_message
        );
        return Err(AppError::RequestFailed {
            status: raw.status,
            code: decoded.response_code,
            message: decoded.response_message,
        });
    }

    Ok(decoded)
}
