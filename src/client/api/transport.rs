//! Seam between the API client and the browser.
//!
//! The client only sees [`HttpTransport`] and [`TokenStore`]. In the browser these
//! are backed by `fetch` (through `reqwasm`) and `localStorage` (through
//! `gloo-storage`); tests substitute scripted implementations.

use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        f.write_str(name)
    }
}

/// Fully resolved request: absolute URL and the final header list.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as delivered by the transport, body not yet interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not produce an HTTP response at all.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{0}")]
pub struct TransportError(pub String);

pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Read-only access to the stored bearer token.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
}

#[cfg(feature = "web")]
pub use browser::{FetchTransport, LocalStorageTokens};

#[cfg(feature = "web")]
mod browser {
    use gloo_storage::{LocalStorage, Storage};
    use reqwasm::http::{Method, Request};

    use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TokenStore, TransportError};
    use crate::client::constant::AUTH_TOKEN_KEY;

    /// `fetch`-backed transport.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FetchTransport;

    impl HttpTransport for FetchTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let method = match request.method {
                HttpMethod::Get => Method::GET,
                HttpMethod::Post => Method::POST,
            };

            let mut builder = Request::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;

            let status = response.status();
            let content_type = response.headers().get("content-type");
            let body = response
                .text()
                .await
                .map_err(|e| TransportError(e.to_string()))?;

            Ok(HttpResponse {
                status,
                content_type,
                body,
            })
        }
    }

    /// Reads the raw `auth_token` entry from `localStorage`.
    ///
    /// The login flow stores the token with `setItem` as a plain string, so the
    /// value is read through the raw storage handle rather than as JSON.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorageTokens;

    impl TokenStore for LocalStorageTokens {
        fn token(&self) -> Option<String> {
            LocalStorage::raw()
                .get_item(AUTH_TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.trim().is_empty())
        }
    }
}
