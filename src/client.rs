//! Client Module
//!
//! [`OpenAi`] turns a logical request (endpoint suffix + JSON payload) into a
//! transport call and parses the returned body into `serde_json::Value`,
//! surfacing server-reported errors through the configured [`ErrorPolicy`].
//!
//! One client owns one [`Session`] behind a mutex: requests through a single
//! instance are serialized, never concurrent. Callers that need parallel
//! requests create one client per desired concurrent stream.

use std::sync::{Mutex, OnceLock};

use secrecy::SecretString;
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::error::{ApiErrorPayload, OpenAiError};
use crate::transport::{Method, MultipartForm, Session};

/// Default API root, used when neither the builder nor the environment
/// provides one.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";

/// Environment variable holding the bearer token.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the base URL.
pub const API_BASE_ENV: &str = "OPENAI_API_BASE";

/// What to do when a request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Return the error to the caller.
    #[default]
    Raise,
    /// Log the error and hand back a degraded result (`Value::Null`, or the
    /// parsed body when the server embedded an `error` field in a 2xx
    /// response).
    Report,
}

/// Synchronous OpenAI API client.
pub struct OpenAi {
    base_url: String,
    session: Mutex<Session>,
    policy: ErrorPolicy,
}

/// Builder for [`OpenAi`]. Explicit values win over the environment; the
/// environment wins over the built-in default base URL.
#[derive(Default)]
pub struct OpenAiBuilder {
    api_key: Option<String>,
    organization: Option<String>,
    base_url: Option<String>,
    proxy: Option<String>,
    beta: Option<String>,
    policy: ErrorPolicy,
    accept_invalid_certs: bool,
}

impl OpenAiBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Route requests through `[scheme://]host:port`.
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Set the `OpenAI-Beta` header for pre-stable API surfaces.
    pub fn beta(mut self, beta: impl Into<String>) -> Self {
        self.beta = Some(beta.into());
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Skip TLS certificate verification. Off by default.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<OpenAi, OpenAiError> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .unwrap_or_default();
        let mut base_url = self
            .base_url
            .or_else(|| std::env::var(API_BASE_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let mut session = Session::new();
        session.set_auth(SecretString::from(api_key), self.organization);
        session.set_beta(self.beta);
        session.set_accept_invalid_certs(self.accept_invalid_certs);
        if let Some(proxy) = &self.proxy {
            session.set_proxy(proxy)?;
        }

        Ok(OpenAi {
            base_url,
            session: Mutex::new(session),
            policy: self.policy,
        })
    }
}

impl OpenAi {
    pub fn builder() -> OpenAiBuilder {
        OpenAiBuilder::default()
    }

    /// Build a client purely from `OPENAI_API_KEY` / `OPENAI_API_BASE`.
    ///
    /// Construction from the environment cannot fail: no proxy is involved
    /// and credentials are only validated when the first request is built.
    pub fn from_env() -> Self {
        match Self::builder().build() {
            Ok(client) => client,
            // build() without a proxy has no failing path; keep a sane
            // fallback rather than unwrapping.
            Err(_) => OpenAi {
                base_url: DEFAULT_BASE_URL.to_string(),
                session: Mutex::new(Session::new()),
                policy: ErrorPolicy::default(),
            },
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Percent-encode a path or query component.
    pub fn escape(text: &str) -> String {
        urlencoding::encode(text).into_owned()
    }

    /// GET `base_url + suffix`.
    pub fn get(&self, suffix: &str) -> Result<Value, OpenAiError> {
        self.request(Method::Get, suffix, None, None)
    }

    /// GET with URL-encoded query parameters appended to the suffix.
    pub fn get_with_query(
        &self,
        suffix: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, OpenAiError> {
        if query.is_empty() {
            return self.get(suffix);
        }
        let encoded: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        self.get(&format!("{}?{}", suffix, encoded.join("&")))
    }

    /// POST a JSON payload.
    pub fn post(&self, suffix: &str, body: &Value) -> Result<Value, OpenAiError> {
        self.request(
            Method::Post,
            suffix,
            Some(body.to_string()),
            Some("application/json"),
        )
    }

    /// POST a raw body with an explicit content type.
    pub fn post_with_content_type(
        &self,
        suffix: &str,
        body: impl Into<String>,
        content_type: &str,
    ) -> Result<Value, OpenAiError> {
        self.request(Method::Post, suffix, Some(body.into()), Some(content_type))
    }

    /// POST a multipart form (one file field + string fields, one request).
    pub fn post_multipart(
        &self,
        suffix: &str,
        form: MultipartForm,
    ) -> Result<Value, OpenAiError> {
        let url = format!("{}{}", self.base_url, suffix);
        let outcome = {
            let mut session = self.lock_session();
            session.set_endpoint(&url).and_then(|()| {
                session.set_multipart(form);
                session.execute(Method::Post, None)
            })
        };
        self.finish(Method::Post, outcome)
    }

    /// DELETE `base_url + suffix`.
    pub fn delete(&self, suffix: &str) -> Result<Value, OpenAiError> {
        self.request(Method::Delete, suffix, None, None)
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, Session> {
        // A poisoned lock only means another request panicked mid-flight;
        // the session state is still structurally valid.
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn request(
        &self,
        method: Method,
        suffix: &str,
        body: Option<String>,
        content_type: Option<&str>,
    ) -> Result<Value, OpenAiError> {
        let url = format!("{}{}", self.base_url, suffix);
        let outcome = {
            let mut session = self.lock_session();
            // Endpoint errors go through the same policy path as execute
            // errors: report mode must never raise.
            session.set_endpoint(&url).and_then(|()| {
                if let Some(body) = body {
                    session.set_body(body);
                }
                session.execute(method, content_type)
            })
        };
        self.finish(method, outcome)
    }

    fn finish(
        &self,
        method: Method,
        outcome: Result<String, OpenAiError>,
    ) -> Result<Value, OpenAiError> {
        let text = match outcome {
            Ok(text) => text,
            Err(err) => return self.degrade(err),
        };
        self.parse_body(method, text)
    }

    /// Parse the response text. Non-JSON bodies are never errors: GET wraps
    /// them under a single `result` key, other methods yield `Null`.
    fn parse_body(&self, method: Method, text: String) -> Result<Value, OpenAiError> {
        let parsed: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => {
                debug!("response body is not JSON, treating as opaque text");
                return Ok(match method {
                    Method::Get => json!({ "result": text }),
                    _ => Value::Null,
                });
            }
        };

        if parsed.get("error").is_some_and(|e| !e.is_null()) {
            let message = match ApiErrorPayload::from_body(&parsed) {
                Some(payload) => payload.message,
                None => parsed["error"].to_string(),
            };
            return match self.policy {
                ErrorPolicy::Raise => Err(OpenAiError::ApiError { message }),
                ErrorPolicy::Report => {
                    error!(%message, "API reported an error");
                    Ok(parsed)
                }
            };
        }

        Ok(parsed)
    }

    fn degrade(&self, err: OpenAiError) -> Result<Value, OpenAiError> {
        match self.policy {
            ErrorPolicy::Raise => Err(err),
            ErrorPolicy::Report => {
                error!(error = %err, "request failed");
                Ok(Value::Null)
            }
        }
    }
}

impl std::fmt::Debug for OpenAi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAi")
            .field("base_url", &self.base_url)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

static DEFAULT_CLIENT: OnceLock<OpenAi> = OnceLock::new();

/// Process-wide client, built lazily from the environment on first use.
///
/// First-use races are resolved by the `OnceLock`: exactly one instance is
/// ever constructed. Prefer an explicitly owned [`OpenAi`] in library code.
pub fn default_client() -> &'static OpenAi {
    DEFAULT_CLIENT.get_or_init(OpenAi::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_url_gains_trailing_slash() {
        let client = OpenAi::builder()
            .api_key("sk-test")
            .base_url("http://localhost:8080/v1")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1/");
    }

    #[test]
    fn malformed_proxy_fails_at_build_time() {
        let result = OpenAi::builder()
            .api_key("sk-test")
            .proxy("no-port-here")
            .build();
        assert!(matches!(result, Err(OpenAiError::ConfigurationError(_))));
    }

    #[test]
    fn escape_percent_encodes() {
        assert_eq!(OpenAi::escape("a b&c"), "a%20b%26c");
    }

    #[test]
    fn default_client_returns_one_instance() {
        let a = default_client() as *const OpenAi;
        let b = default_client() as *const OpenAi;
        assert_eq!(a, b);
    }

    #[test]
    fn non_json_get_body_is_wrapped() {
        let client = OpenAi::builder().api_key("k").build().unwrap();
        let value = client
            .parse_body(Method::Get, "plain text".to_string())
            .unwrap();
        assert_eq!(value, json!({ "result": "plain text" }));
    }

    #[test]
    fn non_json_post_body_is_null() {
        let client = OpenAi::builder().api_key("k").build().unwrap();
        let value = client
            .parse_body(Method::Post, "plain text".to_string())
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn embedded_error_field_raises_in_raise_mode() {
        let client = OpenAi::builder().api_key("k").build().unwrap();
        let body = r#"{"error":{"message":"bad request"}}"#.to_string();
        let err = client.parse_body(Method::Post, body).unwrap_err();
        match err {
            OpenAiError::ApiError { message } => assert_eq!(message, "bad request"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn embedded_error_field_logs_in_report_mode() {
        let client = OpenAi::builder()
            .api_key("k")
            .error_policy(ErrorPolicy::Report)
            .build()
            .unwrap();
        let body = r#"{"error":{"message":"bad request"}}"#.to_string();
        let value = client.parse_body(Method::Post, body).unwrap();
        assert_eq!(value["error"]["message"], "bad request");
    }

    #[test]
    fn malformed_base_url_respects_report_mode() {
        let client = OpenAi::builder()
            .api_key("k")
            .base_url("not-a-url")
            .error_policy(ErrorPolicy::Report)
            .build()
            .unwrap();
        let value = client.get("models").unwrap();
        assert_eq!(value, Value::Null);

        let form = MultipartForm::new("file", "/tmp/nothing.jsonl");
        let value = client.post_multipart("files", form).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn malformed_base_url_raises_in_raise_mode() {
        let client = OpenAi::builder()
            .api_key("k")
            .base_url("not-a-url")
            .build()
            .unwrap();
        let err = client.get("models").unwrap_err();
        assert!(matches!(err, OpenAiError::ConfigurationError(_)));
    }

    #[test]
    fn report_mode_degrades_transport_errors_to_null() {
        let client = OpenAi::builder()
            .api_key("k")
            .error_policy(ErrorPolicy::Report)
            .build()
            .unwrap();
        let value = client
            .degrade(OpenAiError::TransportError("refused".into()))
            .unwrap();
        assert_eq!(value, Value::Null);
    }
}
