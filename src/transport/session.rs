//! Transport session: one connection, one in-flight request.
//!
//! A [`Session`] owns at most one `reqwest::blocking::Client` bound to a
//! single origin. The client is built lazily on first dispatch and torn down
//! whenever scheme, host, port or proxy settings change; a path-only change
//! reuses it, which is the common case (same host, many resource paths).
//!
//! The session itself is not shared: callers that need thread safety wrap it
//! in a mutex (see [`crate::client::OpenAi`]), which also ensures requests
//! through one instance never overlap.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use tracing::debug;

use crate::error::OpenAiError;
use crate::transport::endpoint::{Endpoint, ProxyTarget};
use crate::transport::headers::HeaderBuilder;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP methods the transport dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A multipart upload: exactly one file field plus auxiliary string fields.
///
/// The file is read from disk at dispatch time; only its path is stored here,
/// so the descriptor stays cheap to build and clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartForm {
    file_field: String,
    file_path: PathBuf,
    fields: BTreeMap<String, String>,
}

impl MultipartForm {
    pub fn new(file_field: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_field: file_field.into(),
            file_path: file_path.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a plain string field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    fn into_reqwest_form(self) -> Result<reqwest::blocking::multipart::Form, OpenAiError> {
        let part = reqwest::blocking::multipart::Part::file(&self.file_path)
            .map_err(|e| {
                OpenAiError::InvalidInput(format!(
                    "Cannot read upload file {}: {e}",
                    self.file_path.display()
                ))
            })?
            .mime_str("application/octet-stream")
            .map_err(|e| OpenAiError::InvalidInput(format!("Invalid part mime type: {e}")))?;

        let mut form = reqwest::blocking::multipart::Form::new().part(self.file_field, part);
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        Ok(form)
    }
}

/// Pending request payload. Raw body and multipart form are mutually
/// exclusive: setting one clears the other.
#[derive(Debug, Clone, Default)]
enum Payload {
    #[default]
    Empty,
    Raw(String),
    Multipart(MultipartForm),
}

/// The transport session. See module docs.
#[derive(Debug)]
pub struct Session {
    endpoint: Option<Endpoint>,
    client: Option<reqwest::blocking::Client>,
    token: SecretString,
    organization: Option<String>,
    beta: Option<String>,
    proxy: Option<ProxyTarget>,
    accept_invalid_certs: bool,
    payload: Payload,
    #[cfg(test)]
    rebuilds: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            client: None,
            token: SecretString::from(""),
            organization: None,
            beta: None,
            proxy: None,
            accept_invalid_certs: false,
            payload: Payload::Empty,
            #[cfg(test)]
            rebuilds: 0,
        }
    }

    /// Point the session at a full URL. Only a scheme/host/port change
    /// invalidates the held connection.
    pub fn set_endpoint(&mut self, url: &str) -> Result<(), OpenAiError> {
        let endpoint = Endpoint::parse(url)?;
        match &self.endpoint {
            Some(current) if current.same_origin(&endpoint) => {}
            _ => self.client = None,
        }
        self.endpoint = Some(endpoint);
        Ok(())
    }

    /// Store the bearer token and optional organization id, applied as
    /// headers on every subsequent request.
    pub fn set_auth(&mut self, token: SecretString, organization: Option<String>) {
        self.token = token;
        self.organization = organization;
    }

    pub fn set_beta(&mut self, beta: Option<String>) {
        self.beta = beta;
    }

    /// Configure a proxy. Malformed proxy strings fail here, not at request
    /// time. Forces a connection rebuild.
    pub fn set_proxy(&mut self, url: &str) -> Result<(), OpenAiError> {
        self.proxy = Some(ProxyTarget::parse(url)?);
        self.client = None;
        Ok(())
    }

    /// Skip TLS certificate verification on future connections.
    pub fn set_accept_invalid_certs(&mut self, accept: bool) {
        self.accept_invalid_certs = accept;
        self.client = None;
    }

    /// Store a raw request body, clearing any pending multipart form.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.payload = Payload::Raw(body.into());
    }

    /// Store a multipart form, clearing any pending raw body. The form is
    /// consumed by the next POST.
    pub fn set_multipart(&mut self, form: MultipartForm) {
        self.payload = Payload::Multipart(form);
    }

    fn ensure_client(&mut self) -> Result<(), OpenAiError> {
        if self.endpoint.is_none() {
            return Err(OpenAiError::ConfigurationError(
                "Endpoint not set before request".to_string(),
            ));
        }
        if self.client.is_some() {
            return Ok(());
        }

        let mut builder = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT);
        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy.to_url()).map_err(|e| {
                OpenAiError::ConfigurationError(format!("Invalid proxy configuration: {e}"))
            })?;
            builder = builder.proxy(proxy);
        }

        self.client = Some(builder.build().map_err(|e| {
            OpenAiError::ConfigurationError(format!("Cannot build HTTP client: {e}"))
        })?);
        #[cfg(test)]
        {
            self.rebuilds += 1;
        }
        Ok(())
    }

    /// Dispatch one request against the current endpoint and classify the
    /// outcome. GET and DELETE carry no body; POST sends the pending raw
    /// body or multipart form.
    pub fn execute(
        &mut self,
        method: Method,
        content_type: Option<&str>,
    ) -> Result<String, OpenAiError> {
        self.ensure_client()?;
        // Both are present after ensure_client; the fallbacks keep the
        // request path panic-free.
        let endpoint = self.endpoint.clone().ok_or_else(|| {
            OpenAiError::ConfigurationError("Endpoint not set before request".to_string())
        })?;
        let client = self.client.as_ref().ok_or_else(|| {
            OpenAiError::ConfigurationError("HTTP client not initialized".to_string())
        })?;

        let url = endpoint.to_url();
        debug!(method = method.as_str(), %url, "dispatching request");

        let multipart = matches!(self.payload, Payload::Multipart(_)) && method == Method::Post;
        let mut headers = HeaderBuilder::new().with_bearer_auth(&self.token)?;
        if let Some(organization) = &self.organization {
            headers = headers.with_organization(organization)?;
        }
        if let Some(beta) = &self.beta {
            headers = headers.with_beta(beta)?;
        }
        if multipart {
            // reqwest supplies the boundary-bearing content type itself.
            headers = headers.without_expect_continue();
        } else if let Some(content_type) = content_type {
            headers = headers.with_content_type(content_type)?;
        }
        let headers = headers.build();

        let request = match method {
            Method::Get => client.get(&url).headers(headers),
            Method::Delete => client.delete(&url).headers(headers),
            Method::Post => {
                let request = client.post(&url).headers(headers);
                match std::mem::take(&mut self.payload) {
                    Payload::Empty => request,
                    Payload::Raw(body) => {
                        // A raw body persists across requests until replaced.
                        self.payload = Payload::Raw(body.clone());
                        request.body(body)
                    }
                    // Multipart is one-shot: consumed here.
                    Payload::Multipart(form) => request.multipart(form.into_reqwest_form()?),
                }
            }
        };

        let response = request
            .send()
            .map_err(|e| OpenAiError::TransportError(format!("No response from server: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| OpenAiError::TransportError(format!("Failed to read response: {e}")))?;

        if status >= 400 {
            return Err(OpenAiError::HttpStatusError { status, body });
        }
        Ok(body)
    }

    #[cfg(test)]
    fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    #[cfg(test)]
    fn has_live_client(&self) -> bool {
        self.client.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
