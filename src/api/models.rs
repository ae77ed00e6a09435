//! Models: list available models and retrieve per-model metadata.

use serde_json::Value;

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `GET models`
pub fn list(client: &OpenAi) -> Result<Value, OpenAiError> {
    client.get("models")
}

/// `GET models/{model}`
pub fn retrieve(client: &OpenAi, model: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("models/{model}"))
}
