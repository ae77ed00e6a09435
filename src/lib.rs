//! # openai-lite
//!
//! A lightweight, synchronous client for the OpenAI REST API.
//!
//! The crate has three layers:
//! - [`transport`]: one reusable connection per client, lazy rebuild on
//!   origin change, JSON or multipart bodies, typed error classification.
//! - [`client`]: [`OpenAi`](client::OpenAi) composes requests, parses JSON
//!   responses and applies the configured error policy.
//! - [`api`]: one module of free functions per resource category.
//!
//! Requests through one client instance are serialized; create one client
//! per desired concurrent stream.
//!
//! # Example
//!
//! ```no_run
//! use openai_lite::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<(), OpenAiError> {
//!     let client = OpenAi::builder().api_key("sk-...").build()?;
//!     let reply = api::chat::create(&client, &json!({
//!         "model": "gpt-4o-mini",
//!         "messages": [{"role": "user", "content": "Say hi"}],
//!     }))?;
//!     println!("{}", reply["choices"][0]["message"]["content"]);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod transport;

pub use client::{DEFAULT_BASE_URL, ErrorPolicy, OpenAi, OpenAiBuilder, default_client};
pub use error::{ApiErrorPayload, OpenAiError};
pub use transport::MultipartForm;

/// Convenience re-exports for typical usage.
pub mod prelude {
    pub use crate::api;
    pub use crate::client::{ErrorPolicy, OpenAi, default_client};
    pub use crate::error::OpenAiError;
    pub use crate::transport::MultipartForm;
}
