//! Error Handling Module
//!
//! Every failure surfaced by this crate is an [`OpenAiError`]. The variants
//! separate conditions a caller may want to recover from (an HTTP status, an
//! API-reported error) from conditions that indicate a local mistake
//! (configuration, invalid input), so call sites can pattern-match instead of
//! catching one opaque type.

use serde::Deserialize;

/// Unified error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// The client or session is misconfigured: endpoint never set, malformed
    /// base/proxy URL, a header value that cannot be encoded.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The request never produced a response: connection refused, DNS
    /// failure, timeout. Carries no response body.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The server answered with a status of 400 or above. The raw response
    /// body is preserved so callers can inspect the server's explanation.
    #[error("HTTP error {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    /// The server answered 2xx but the JSON body embeds an `error` object.
    #[error("API error: {message}")]
    ApiError { message: String },

    /// Caller-supplied input was malformed (e.g. a multipart request whose
    /// JSON input lacks the file field).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl OpenAiError {
    /// HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatusError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for failures where no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }
}

/// The `error` object the API embeds in failure bodies.
///
/// Only `message` is required for surfacing; the remaining fields are kept
/// because callers matching on [`OpenAiError::ApiError`] frequently need the
/// machine-readable `code`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorPayload {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub param: Option<String>,
    pub code: Option<String>,
}

impl ApiErrorPayload {
    /// Extract the payload from a parsed response body, if the body carries
    /// a well-formed `error` object.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        body.get("error")
            .and_then(|e| serde_json::from_value(e.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_accessor_only_on_http_errors() {
        let err = OpenAiError::HttpStatusError {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(OpenAiError::TransportError("x".into()).status(), None);
    }

    #[test]
    fn payload_extracted_from_error_body() {
        let body = json!({
            "error": {
                "message": "bad request",
                "type": "invalid_request_error",
                "param": null,
                "code": null
            }
        });
        let payload = ApiErrorPayload::from_body(&body).unwrap();
        assert_eq!(payload.message, "bad request");
        assert_eq!(payload.error_type.as_deref(), Some("invalid_request_error"));
    }

    #[test]
    fn payload_absent_when_no_error_field() {
        let body = json!({"object": "list", "data": []});
        assert!(ApiErrorPayload::from_body(&body).is_none());
    }
}
