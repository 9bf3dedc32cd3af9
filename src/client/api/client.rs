use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{
    api::{
        helper::{default_headers, merge_headers, parse_response, RequestOptions},
        transport::{HttpRequest, HttpTransport, TokenStore},
    },
    config::ClientConfig,
    model::error::ApiError,
};

#[cfg(feature = "web")]
use crate::client::api::transport::{FetchTransport, LocalStorageTokens};

/// Client used by the browser build: `fetch` plus the `localStorage` token.
#[cfg(feature = "web")]
pub type BrowserApiClient = ApiClient<FetchTransport, LocalStorageTokens>;

/// Backend client shared by every typed endpoint method.
///
/// Every call goes through [`ApiClient::request`], which merges headers, sends
/// the request once, and normalizes the outcome. Nothing is retried, cached or
/// timed out.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    config: ClientConfig,
    transport: T,
    tokens: S,
}

#[cfg(feature = "web")]
impl BrowserApiClient {
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, FetchTransport, LocalStorageTokens)
    }
}

impl<T, S> ApiClient<T, S>
where
    T: HttpTransport,
    S: TokenStore,
{
    pub fn new(config: ClientConfig, transport: T, tokens: S) -> Self {
        Self {
            config,
            transport,
            tokens,
        }
    }

    /// Sends a request to `path` and returns the parsed body.
    ///
    /// # Arguments
    /// - `path` - Endpoint path relative to the configured base URL
    /// - `options` - Method, optional body, and headers that override the defaults
    ///
    /// # Returns
    /// - `Ok(Value)` - 2xx response body, JSON or `{"message": <text>}`
    /// - `Err(ApiError::Server)` - Non-2xx response with the server's message
    /// - `Err(ApiError::Network)` - Request never produced a response
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        let token = self.tokens.token();
        let headers = merge_headers(default_headers(token.as_deref()), &options.headers);

        tracing::debug!(
            method = %options.method,
            url = %url,
            authenticated = token.is_some(),
            "Sending API request"
        );

        let request = HttpRequest {
            method: options.method,
            url,
            headers,
            body: options.body,
        };

        let response = self.transport.send(request).await.map_err(|err| {
            tracing::warn!(path = %path, error = %err, "API request did not reach the server");
            ApiError::Network
        })?;

        parse_response(response)
    }

    /// Like [`ApiClient::request`], then reads the body as `R`.
    pub async fn request_json<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let value = self.request(path, options).await?;

        serde_json::from_value(value).map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Unexpected response shape");
            ApiError::Parse(e.to_string())
        })
    }
}
