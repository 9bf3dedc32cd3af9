use dioxus_logger::tracing;
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    client::{
        api::transport::{HttpMethod, HttpResponse},
        constant::DEFAULT_ERROR_MESSAGE,
        model::error::ApiError,
    },
    model::api::ErrorBodyDto,
};

/// Caller-controlled part of a request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    pub fn post() -> Self {
        Self::new(HttpMethod::Post)
    }

    /// POST with a JSON-encoded payload.
    pub fn post_json<T: Serialize>(payload: &T) -> Result<Self, ApiError> {
        Ok(Self::post().body(serialize_json(payload)?))
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Headers sent on every request before caller overrides are applied.
pub fn default_headers(token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ];

    if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
        headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
    }

    headers
}

/// Applies caller headers over the defaults.
///
/// Header names compare case-insensitively; on a clash the caller's entry
/// replaces the default one in place, name casing included.
pub fn merge_headers(
    defaults: Vec<(String, String)>,
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = defaults;

    for (name, value) in overrides {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => *entry = (name.clone(), value.clone()),
            None => merged.push((name.clone(), value.clone())),
        }
    }

    merged
}

/// Interprets a response body according to its content type.
///
/// JSON content is parsed; anything else, including JSON that fails to parse,
/// is wrapped as `{"message": <text>}`.
pub fn parse_body(content_type: Option<&str>, body: &str) -> Value {
    let is_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    if is_json {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            return value;
        }
    }

    json!({ "message": body })
}

/// Human-readable message for a failed response body.
pub fn error_message(body: &Value) -> String {
    serde_json::from_value::<ErrorBodyDto>(body.clone())
        .ok()
        .and_then(ErrorBodyDto::into_message)
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

/// Turns a raw response into the parsed body or an [`ApiError::Server`].
///
/// Successful bodies are returned untouched.
pub fn parse_response(response: HttpResponse) -> Result<Value, ApiError> {
    let body = parse_body(response.content_type.as_deref(), &response.body);

    if response.is_success() {
        return Ok(body);
    }

    let message = error_message(&body);
    tracing::warn!(status = response.status, message = %message, "API request rejected");

    Err(ApiError::Server {
        status: response.status,
        message,
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    /// Tests the default header set with and without a token.
    ///
    /// Expected: JSON content type and accept always, Authorization only with a non-empty token
    #[test]
    fn default_headers_attach_bearer_token() {
        let anonymous = default_headers(None);
        let blank = default_headers(Some("   "));
        let authed = default_headers(Some("abc.def"));

        assert_eq!(anonymous.len(), 2);
        assert_eq!(blank, anonymous);
        assert!(authed.contains(&("Authorization".to_string(), "Bearer abc.def".to_string())));
        assert!(authed.contains(&("Accept".to_string(), "application/json".to_string())));
    }

    /// Tests that caller headers win over defaults regardless of case.
    ///
    /// Expected: one content-type entry holding the caller value, new headers appended
    #[test]
    fn caller_headers_override_defaults_case_insensitively() {
        let merged = merge_headers(
            default_headers(Some("token")),
            &[
                ("content-type".to_string(), "text/plain".to_string()),
                ("X-Store-Id".to_string(), "17".to_string()),
            ],
        );

        let content_types: Vec<_> = merged
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(content_types[0].1, "text/plain");
        assert!(merged.contains(&("X-Store-Id".to_string(), "17".to_string())));
        assert!(merged.contains(&("Authorization".to_string(), "Bearer token".to_string())));
    }

    /// Tests that a caller-supplied Authorization header replaces the stored token.
    ///
    /// Expected: the caller's credential only
    #[test]
    fn caller_authorization_replaces_token() {
        let merged = merge_headers(
            default_headers(Some("stored")),
            &[("authorization".to_string(), "Bearer explicit".to_string())],
        );

        let auth: Vec<_> = merged
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(auth, vec!["Bearer explicit"]);
    }

    /// Tests body parsing by content type.
    ///
    /// Expected: JSON parsed (charset suffix tolerated), text and broken JSON wrapped
    #[test]
    fn parses_body_by_content_type() {
        assert_eq!(
            parse_body(Some("application/json; charset=utf-8"), r#"{"ok":true}"#),
            json!({"ok": true})
        );
        assert_eq!(
            parse_body(Some("text/html"), "<h1>Bad Gateway</h1>"),
            json!({"message": "<h1>Bad Gateway</h1>"})
        );
        assert_eq!(parse_body(None, "plain"), json!({"message": "plain"}));
        assert_eq!(
            parse_body(Some("application/json"), "not json"),
            json!({"message": "not json"})
        );
    }

    /// Tests that 2xx bodies are returned unchanged.
    ///
    /// Expected: Ok with the exact parsed value, no schema checks
    #[test]
    fn success_returns_body_as_is() {
        let result = parse_response(response(
            201,
            Some("application/json"),
            r#"{"unexpected":[1,2,3]}"#,
        ));

        assert_eq!(result, Ok(json!({"unexpected": [1, 2, 3]})));
    }

    /// Tests that non-2xx responses carry the server's errorMessage.
    ///
    /// Expected: Err(Server) with message "X"
    #[test]
    fn failure_uses_error_message_field() {
        let result = parse_response(response(
            400,
            Some("application/json"),
            r#"{"errorMessage":"X"}"#,
        ));

        assert_eq!(
            result,
            Err(ApiError::Server {
                status: 400,
                message: "X".to_string()
            })
        );
    }

    /// Tests that `message` is used when `errorMessage` is missing.
    ///
    /// Expected: Err(Server) with the message text
    #[test]
    fn failure_falls_back_to_message_field() {
        let result = parse_response(response(
            401,
            Some("application/json"),
            r#"{"message":"Invalid token"}"#,
        ));

        assert_eq!(result.unwrap_err().to_string(), "Invalid token");
    }

    /// Tests the generic fallback when no message field is recognizable.
    ///
    /// Expected: "Request failed" for objects, arrays, and empty text bodies
    #[test]
    fn failure_without_message_uses_default() {
        for body in [r#"{"code":17}"#, "[]", r#"{"errorMessage":42}"#] {
            let err = parse_response(response(500, Some("application/json"), body)).unwrap_err();
            assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE, "body: {}", body);
        }

        let err = parse_response(response(502, None, "")).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);
    }

    /// Tests that a non-string errorMessage does not discard a valid message.
    ///
    /// Expected: Err(Server) carrying the `message` text
    #[test]
    fn failure_with_mixed_type_fields_uses_message() {
        let err = parse_response(response(
            400,
            Some("application/json"),
            r#"{"errorMessage":{"code":17},"message":"Category name already exists"}"#,
        ))
        .unwrap_err();

        assert_eq!(err.to_string(), "Category name already exists");
    }

    /// Tests that plain-text error bodies surface their text.
    ///
    /// Expected: Err(Server) whose message is the body text
    #[test]
    fn failure_with_text_body_uses_text() {
        let err =
            parse_response(response(503, Some("text/plain"), "Service Unavailable")).unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "Service Unavailable");
    }

    /// Tests request option construction.
    ///
    /// Expected: POST with JSON body and headers in insertion order
    #[test]
    fn builds_post_json_options() {
        let options = RequestOptions::post_json(&json!({"email": "a@b.test"}))
            .unwrap()
            .header("X-Trace", "1");

        assert_eq!(options.method, HttpMethod::Post);
        assert_eq!(options.body.as_deref(), Some(r#"{"email":"a@b.test"}"#));
        assert_eq!(options.headers, vec![("X-Trace".to_string(), "1".to_string())]);
    }
}
