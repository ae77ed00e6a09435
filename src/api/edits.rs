//! Edits (deprecated upstream, kept for API completeness).

use serde_json::Value;

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `POST edits`
pub fn create(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("edits", input)
}
