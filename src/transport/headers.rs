//! Request header construction.
//!
//! Common utilities for building the header set every request carries.

use crate::error::OpenAiError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, EXPECT, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Builder for the per-request header map.
pub struct HeaderBuilder {
    headers: HeaderMap,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization.
    pub fn with_bearer_auth(mut self, token: &SecretString) -> Result<Self, OpenAiError> {
        let auth_value = format!("Bearer {}", token.expose_secret());
        self.headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|e| {
                OpenAiError::ConfigurationError(format!("Invalid API key format: {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add the organization id header, when one is configured.
    pub fn with_organization(mut self, organization: &str) -> Result<Self, OpenAiError> {
        self.headers.insert(
            HeaderName::from_static("openai-organization"),
            HeaderValue::from_str(organization).map_err(|e| {
                OpenAiError::ConfigurationError(format!("Invalid organization id: {e}"))
            })?,
        );
        Ok(self)
    }

    /// Flag use of a pre-stable API surface.
    pub fn with_beta(mut self, beta: &str) -> Result<Self, OpenAiError> {
        self.headers.insert(
            HeaderName::from_static("openai-beta"),
            HeaderValue::from_str(beta).map_err(|e| {
                OpenAiError::ConfigurationError(format!("Invalid beta header value: {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add an explicit content type.
    pub fn with_content_type(mut self, content_type: &str) -> Result<Self, OpenAiError> {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type).map_err(|e| {
                OpenAiError::ConfigurationError(format!("Invalid content type: {e}"))
            })?,
        );
        Ok(self)
    }

    /// Suppress the `Expect: 100-continue` handshake on uploads.
    pub fn without_expect_continue(mut self) -> Self {
        self.headers.insert(EXPECT, HeaderValue::from_static(""));
        self
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_auth_and_optional_headers() {
        let token = SecretString::from("sk-test");
        let headers = HeaderBuilder::new()
            .with_bearer_auth(&token)
            .unwrap()
            .with_organization("org-1")
            .unwrap()
            .with_beta("assistants=v1")
            .unwrap()
            .with_content_type("application/json")
            .unwrap()
            .build();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer sk-test");
        assert_eq!(headers.get("openai-organization").unwrap(), "org-1");
        assert_eq!(headers.get("openai-beta").unwrap(), "assistants=v1");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn rejects_unencodable_header_values() {
        let token = SecretString::from("bad\ntoken");
        assert!(HeaderBuilder::new().with_bearer_auth(&token).is_err());
    }

    #[test]
    fn expect_header_is_emptied_for_uploads() {
        let headers = HeaderBuilder::new().without_expect_continue().build();
        assert_eq!(headers.get(EXPECT).unwrap(), "");
    }
}
