//! Chat completions.

use serde_json::Value;

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `POST chat/completions`
pub fn create(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("chat/completions", input)
}
