//! Content moderation.

use serde_json::Value;

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `POST moderations`
pub fn create(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("moderations", input)
}
