//! Embeddings.

use serde_json::Value;

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `POST embeddings`
pub fn create(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("embeddings", input)
}
