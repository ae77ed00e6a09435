//! Assistants and assistant files.
//!
//! Pre-stable surface: set the beta header on the client
//! (`OpenAi::builder().beta(...)`) when the server requires it.

use serde_json::Value;

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `POST assistants`
pub fn create(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("assistants", input)
}

/// `GET assistants/{assistant_id}`
pub fn retrieve(client: &OpenAi, assistant_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("assistants/{assistant_id}"))
}

/// `POST assistants/{assistant_id}`
pub fn modify(client: &OpenAi, assistant_id: &str, input: &Value) -> Result<Value, OpenAiError> {
    client.post(&format!("assistants/{assistant_id}"), input)
}

/// `DELETE assistants/{assistant_id}`
pub fn delete(client: &OpenAi, assistant_id: &str) -> Result<Value, OpenAiError> {
    client.delete(&format!("assistants/{assistant_id}"))
}

/// `GET assistants`
pub fn list(client: &OpenAi) -> Result<Value, OpenAiError> {
    client.get("assistants")
}

/// `POST assistants/{assistant_id}/files`
pub fn create_file(
    client: &OpenAi,
    assistant_id: &str,
    input: &Value,
) -> Result<Value, OpenAiError> {
    client.post(&format!("assistants/{assistant_id}/files"), input)
}

/// `GET assistants/{assistant_id}/files/{file_id}`
pub fn retrieve_file(
    client: &OpenAi,
    assistant_id: &str,
    file_id: &str,
) -> Result<Value, OpenAiError> {
    client.get(&format!("assistants/{assistant_id}/files/{file_id}"))
}

/// `DELETE assistants/{assistant_id}/files/{file_id}`
pub fn delete_file(
    client: &OpenAi,
    assistant_id: &str,
    file_id: &str,
) -> Result<Value, OpenAiError> {
    client.delete(&format!("assistants/{assistant_id}/files/{file_id}"))
}

/// `GET assistants/{assistant_id}/files`
pub fn list_files(client: &OpenAi, assistant_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("assistants/{assistant_id}/files"))
}
