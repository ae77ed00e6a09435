//! File management: upload, list, retrieve, delete, download content.

use serde_json::Value;

use crate::api::multipart_from_input;
use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `GET files`
pub fn list(client: &OpenAi) -> Result<Value, OpenAiError> {
    client.get("files")
}

/// `POST files` (multipart)
///
/// Input: `{"file": "<local path>", "purpose": "<purpose>"}`.
pub fn upload(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    let form = multipart_from_input(input, "file", &["purpose"])?;
    client.post_multipart("files", form)
}

/// `GET files/{file_id}`
pub fn retrieve(client: &OpenAi, file_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("files/{file_id}"))
}

/// `DELETE files/{file_id}`
pub fn delete(client: &OpenAi, file_id: &str) -> Result<Value, OpenAiError> {
    client.delete(&format!("files/{file_id}"))
}

/// `GET files/{file_id}/content`
///
/// The body is typically not JSON; it comes back wrapped as
/// `{"result": "<raw content>"}`.
pub fn content(client: &OpenAi, file_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("files/{file_id}/content"))
}
