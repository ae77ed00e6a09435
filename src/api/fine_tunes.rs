//! Fine-tune jobs.

use serde_json::{Value, json};

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `POST fine-tunes`
pub fn create(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("fine-tunes", input)
}

/// `GET fine-tunes`
pub fn list(client: &OpenAi) -> Result<Value, OpenAiError> {
    client.get("fine-tunes")
}

/// `GET fine-tunes/{fine_tune_id}`
pub fn retrieve(client: &OpenAi, fine_tune_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("fine-tunes/{fine_tune_id}"))
}

/// `GET fine-tunes/{fine_tune_id}/content`
pub fn content(client: &OpenAi, fine_tune_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("fine-tunes/{fine_tune_id}/content"))
}

/// `POST fine-tunes/{fine_tune_id}/cancel`
pub fn cancel(client: &OpenAi, fine_tune_id: &str) -> Result<Value, OpenAiError> {
    client.post(&format!("fine-tunes/{fine_tune_id}/cancel"), &json!({}))
}

/// `GET fine-tunes/{fine_tune_id}/events`
pub fn events(client: &OpenAi, fine_tune_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("fine-tunes/{fine_tune_id}/events"))
}

/// `DELETE models/{model}` — removes a fine-tuned model.
pub fn delete_model(client: &OpenAi, model: &str) -> Result<Value, OpenAiError> {
    client.delete(&format!("models/{model}"))
}
