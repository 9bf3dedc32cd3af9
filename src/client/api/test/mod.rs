//! Scripted transport and client builder for API tests.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use serde_json::Value;

use crate::client::{
    api::{
        client::ApiClient,
        transport::{HttpRequest, HttpResponse, HttpTransport, TokenStore, TransportError},
    },
    config::ClientConfig,
};


pub const TEST_BASE_URL: &str = "https://api.shop.test";

type Scripted = Result<HttpResponse, TransportError>;

/// Transport that replays queued outcomes and records every request it sees.
///
/// Clones share the same queue and log, so a test can keep a handle after
/// moving one into the client.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    outcomes: VecDeque<Scripted>,
    requests: Vec<HttpRequest>,
}

impl MockTransport {
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// The single request sent so far; panics if there were none or several.
    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .outcomes
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

#[derive(Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl TokenStore for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

pub type TestApiClient = ApiClient<MockTransport, StaticToken>;

/// Builder for a client wired to a [`MockTransport`].
///
/// # Example
///
/// ```rust,ignore
/// let (client, transport) = TestClient::new()
///     .with_token("abc")
///     .respond_json(200, json!({"message": "ok"}))
///     .build();
/// ```
#[derive(Default)]
pub struct TestClient {
    token: Option<String>,
    outcomes: VecDeque<Scripted>,
}

impl TestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Queues a JSON response.
    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.respond_raw(status, Some("application/json; charset=utf-8"), &body.to_string())
    }

    /// Queues a response with an arbitrary content type and body.
    pub fn respond_raw(mut self, status: u16, content_type: Option<&str>, body: &str) -> Self {
        self.outcomes.push_back(Ok(HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }));
        self
    }

    /// Queues a failure that never reaches the server.
    pub fn fail_transport(mut self, message: &str) -> Self {
        self.outcomes
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn build(self) -> (TestApiClient, MockTransport) {
        let transport = MockTransport {
            state: Arc::new(Mutex::new(MockState {
                outcomes: self.outcomes,
                requests: Vec::new(),
            })),
        };
        let config = ClientConfig::new(TEST_BASE_URL).unwrap();
        let client = ApiClient::new(config, transport.clone(), StaticToken(self.token));

        (client, transport)
    }
}

/// Parses the JSON body a request was sent with.
pub fn sent_json(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has a body")).unwrap()
}
