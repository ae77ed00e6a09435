//! Legacy text completions.

use serde_json::Value;

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `POST completions`
pub fn create(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("completions", input)
}
