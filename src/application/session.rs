/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session and authentication manager for the Monnify API
//!
//! Every outbound call passes through a [`Session`]. It handles:
//! - Basic authentication with the API key and secret
//! - Bearer authentication with a token obtained from `/v1/auth/login`
//! - Lazy re-authentication when the bearer token is absent or expired
//! - Uniform decoding of the response envelope

use crate::application::config::{Config, Environment};
use crate::constants::{TEST_SECRET_KEY, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{LoginResponse, Token};
use crate::model::http::{
    AuthScheme, RawResponse, basic_auth_value, bearer_auth_value, decode_response,
    make_http_request,
};
use crate::model::responses::ApiResponse;
use chrono::Utc;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

const LOGIN_PATH: &str = "/v1/auth/login";

/// Authenticated access to the Monnify API
///
/// A session owns its credentials, base URL, HTTP client and bearer token.
/// Two sessions never share a token.
///
/// # Concurrency
///
/// A session is meant to be shared behind an `Arc`. The HTTP client is safe
/// for concurrent use. The bearer token is checked and refreshed without
/// holding a lock across the login call: concurrent bearer requests that all
/// observe an expired token may each log in, and the last stored token wins.
/// The extra logins are redundant but every request still carries a token
/// that was valid when it was obtained.
pub struct Session {
    config: Config,
    base_url: String,
    http_client: Client,
    token: RwLock<Option<Token>>,
}

impl Session {
    /// Creates a session for the sandbox or live environment
    ///
    /// The configuration is validated and no network call is made.
    ///
    /// # Errors
    /// * `AppError::Config` - if the configuration is rejected
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let base_url = config
            .environment
            .base_url()
            .ok_or_else(|| AppError::Config("unsupported environment".to_string()))?
            .to_string();
        Self::build(config, base_url)
    }

    /// Creates a session in test mode against the given server
    ///
    /// The configuration must be valid for sandbox or live. The session then
    /// switches to [`Environment::Test`], targets `base_url` and signs with
    /// the test secret key.
    ///
    /// # Errors
    /// * `AppError::Config` - if the configuration is rejected
    pub fn with_base_url(config: Config, base_url: &str) -> Result<Self, AppError> {
        config.validate()?;
        let mut config = config;
        config.environment = Environment::Test;
        config.credentials.secret_key = TEST_SECRET_KEY.to_string();
        Self::build(config, base_url.trim_end_matches('/').to_string())
    }

    fn build(config: Config, base_url: String) -> Result<Self, AppError> {
        let http_client = build_http_client(config.request_timeout)?;
        debug!("Session created for {} at {}", config.environment, base_url);
        Ok(Self {
            config,
            base_url,
            http_client,
            token: RwLock::new(None),
        })
    }

    /// Effective configuration of the session
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Environment of the session
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    /// Base URL every relative path is resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a path against the base URL
    ///
    /// Absolute URLs are accepted only when they point under the base URL,
    /// so credentials are never sent to another host.
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if an absolute URL lies outside the base URL
    pub fn url(&self, path: &str) -> Result<String, AppError> {
        if !(path.starts_with("http://") || path.starts_with("https://")) {
            return Ok(format!("{}/{}", self.base_url, path.trim_start_matches('/')));
        }

        let target = parse_url(path)?;
        let base = parse_url(&self.base_url)?;
        let base_path = base.path().trim_end_matches('/');
        let under_base = target.path() == base_path
            || target.path().starts_with(&format!("{base_path}/"));
        if target.origin() != base.origin() || !under_base {
            return Err(AppError::InvalidInput(format!(
                "url outside {}: {path}",
                self.base_url
            )));
        }
        Ok(path.to_string())
    }

    /// Resolves a path, appends percent encoded segments and URL encoded
    /// query parameters
    ///
    /// Segments are encoded as a whole, so a `/`, `?` or `#` inside one
    /// stays part of that segment.
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the resulting URL is malformed
    pub fn endpoint_url(
        &self,
        path: &str,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<String, AppError> {
        let mut url = parse_url(&self.url(path)?)?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| AppError::InvalidInput(format!("cannot extend path of {path}")))?
                .pop_if_empty()
                .extend(segments);
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url.into())
    }

    /// Resolves a path and appends URL encoded query parameters
    pub fn url_with_query(&self, path: &str, params: &[(&str, String)]) -> Result<String, AppError> {
        self.endpoint_url(path, &[], params)
    }

    /// Current bearer token, if one was obtained
    pub async fn token(&self) -> Option<Token> {
        self.token.read().await.clone()
    }

    /// Replaces the bearer token, e.g. with one restored from a cache
    pub async fn store_token(&self, token: Token) {
        *self.token.write().await = Some(token);
    }

    /// Whether the next bearer request has to log in first
    pub async fn needs_login(&self) -> bool {
        match self.token.read().await.as_ref() {
            Some(token) => token.is_expired(),
            None => true,
        }
    }

    /// Logs in with Basic authentication and stores the returned bearer token
    ///
    /// The token is stored only when the response is a decoded `200 OK`.
    ///
    /// # Errors
    /// * `AppError::Transport` - if the request could not be completed
    /// * `AppError::Decode` - if the body is not a login response
    /// * `AppError::RequestFailed` - if the status is not 200
    pub async fn login(&self) -> Result<LoginResponse, AppError> {
        self.login_and_store().await.map(|(response, _)| response)
    }

    async fn login_and_store(&self) -> Result<(LoginResponse, Token), AppError> {
        let url = self.url(LOGIN_PATH)?;
        debug!("Sending login request to: {}", url);

        let raw = make_http_request(
            &self.http_client,
            Method::POST,
            &url,
            &self.basic_authorization(),
            None,
        )
        .await?;

        let response: LoginResponse = decode_response(&raw)?;
        let token = Token::from_login(&response.response_body, Utc::now())?;
        *self.token.write().await = Some(token.clone());

        info!(
            "Login successful, token expires in {} seconds",
            response.response_body.expires_in
        );
        Ok((response, token))
    }

    fn basic_authorization(&self) -> String {
        basic_auth_value(
            &self.config.credentials.api_key,
            &self.config.credentials.secret_key,
        )
    }

    /// `Authorization` header value for the given scheme
    ///
    /// For [`AuthScheme::Bearer`] this logs in first when the token is
    /// absent or expired, and fails with the login error if that fails.
    pub async fn authorization(&self, scheme: AuthScheme) -> Result<String, AppError> {
        match scheme {
            AuthScheme::Basic => Ok(self.basic_authorization()),
            AuthScheme::Bearer => {
                let current = self.token().await.filter(|token| !token.is_expired());
                let token = match current {
                    Some(token) => token,
                    None => {
                        debug!("Bearer token missing or expired, logging in");
                        self.login_and_store().await?.1
                    }
                };
                Ok(bearer_auth_value(&token.access_token))
            }
        }
    }

    /// Sends a request with the given authentication scheme
    ///
    /// `body` is JSON encoded before any network activity and is ignored
    /// for GET and DELETE. Every received response is returned with its
    /// status, including non-2xx ones.
    ///
    /// # Errors
    /// * `AppError::Serialization` - if `body` cannot be encoded
    /// * `AppError::InvalidInput` - if `path` is an URL outside the base URL
    /// * any error of [`Session::login`] when a bearer login was needed
    /// * `AppError::Transport` - if the request could not be completed
    pub async fn authenticated_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        scheme: AuthScheme,
        body: Option<&B>,
    ) -> Result<RawResponse, AppError> {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| AppError::Serialization(e.to_string()))?;

        let url = self.url(path)?;
        let authorization = self.authorization(scheme).await?;

        make_http_request(&self.http_client, method, &url, &authorization, payload).await
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, scheme: AuthScheme) -> Result<RawResponse, AppError> {
        self.authenticated_request(Method::GET, path, scheme, None::<&()>)
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        scheme: AuthScheme,
        body: &B,
    ) -> Result<RawResponse, AppError> {
        self.authenticated_request(Method::POST, path, scheme, Some(body))
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str, scheme: AuthScheme) -> Result<RawResponse, AppError> {
        self.authenticated_request(Method::DELETE, path, scheme, None::<&()>)
            .await
    }

    /// Makes a GET request and decodes the response envelope
    pub async fn get_json<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        scheme: AuthScheme,
    ) -> Result<ApiResponse<T>, AppError> {
        let raw = self.get(path, scheme).await?;
        decode_response(&raw)
    }

    /// Makes a POST request and decodes the response envelope
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        scheme: AuthScheme,
        body: &B,
    ) -> Result<ApiResponse<T>, AppError> {
        let raw = self.post(path, scheme, body).await?;
        decode_response(&raw)
    }

    /// Makes a DELETE request and decodes the response envelope
    pub async fn delete_json<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        scheme: AuthScheme,
    ) -> Result<ApiResponse<T>, AppError> {
        let raw = self.delete(path, scheme).await?;
        decode_response(&raw)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("environment", &self.config.environment)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn parse_url(url: &str) -> Result<Url, AppError> {
    Url::parse(url).map_err(|e| AppError::InvalidInput(format!("invalid url {url}: {e}")))
}

/// Builds the HTTP client shared by every request of a session
///
/// A zero timeout leaves requests without a deadline.
fn build_http_client(timeout: Duration) -> Result<Client, AppError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if !timeout.is_zero() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
