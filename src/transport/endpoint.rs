//! Endpoint and proxy URL parsing.
//!
//! The session compares parsed endpoints to decide when the underlying HTTP
//! client can be reused: a path change alone never costs a reconnect, a
//! scheme/host/port change always does.

use crate::error::OpenAiError;

/// URL scheme accepted by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Port implied when the URL does not name one.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

/// A parsed request target: `scheme://host:port` plus the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Endpoint {
    /// Parse a full URL into its components.
    ///
    /// A missing port defaults to 80 (`http`) or 443 (`https`); a missing
    /// path defaults to `/`.
    pub fn parse(url: &str) -> Result<Self, OpenAiError> {
        let (scheme_str, rest) = url.split_once("://").ok_or_else(|| {
            OpenAiError::ConfigurationError(format!("URL has no scheme: {url}"))
        })?;
        let scheme = match scheme_str {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            other => {
                return Err(OpenAiError::ConfigurationError(format!(
                    "Unsupported URL scheme: {other}"
                )));
            }
        };

        let (authority, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], rest[idx..].to_string()),
            None => (rest, "/".to_string()),
        };

        let (host, port) = match authority.split_once(':') {
            Some((host, port_str)) => {
                let port = port_str.parse::<u16>().map_err(|_| {
                    OpenAiError::ConfigurationError(format!("Invalid port in URL: {url}"))
                })?;
                (host, port)
            }
            None => (authority, scheme.default_port()),
        };

        if host.is_empty() {
            return Err(OpenAiError::ConfigurationError(format!(
                "URL has no host: {url}"
            )));
        }

        Ok(Self {
            scheme,
            host: host.to_string(),
            port,
            path,
        })
    }

    /// True when the other endpoint can be served by the same connection.
    pub fn same_origin(&self, other: &Endpoint) -> bool {
        self.scheme == other.scheme && self.host == other.host && self.port == other.port
    }

    /// Rebuild the full URL string for dispatch.
    pub fn to_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.scheme.as_str(),
            self.host,
            self.port,
            self.path
        )
    }
}

/// A proxy target: host + port, scheme-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTarget {
    pub host: String,
    pub port: u16,
}

impl ProxyTarget {
    /// Parse `[scheme://]host:port`. The scheme prefix, when present, is
    /// stripped; everything after the first colon must be a port number.
    /// Malformed input is a configuration error at set time, never at
    /// request time.
    pub fn parse(url: &str) -> Result<Self, OpenAiError> {
        let stripped = match url.split_once("://") {
            Some((_, rest)) => rest,
            None => url,
        };
        let (host, port_str) = stripped.split_once(':').ok_or_else(|| {
            OpenAiError::ConfigurationError(format!("Proxy URL has no port: {url}"))
        })?;
        if host.is_empty() {
            return Err(OpenAiError::ConfigurationError(format!(
                "Proxy URL has no host: {url}"
            )));
        }
        let port = port_str.parse::<u16>().map_err(|_| {
            OpenAiError::ConfigurationError(format!("Invalid proxy port: {url}"))
        })?;
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    /// URL handed to the HTTP client's proxy configuration.
    pub fn to_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
