//! Audio transcription and translation (multipart uploads).

use serde_json::Value;

use crate::api::multipart_from_input;
use crate::client::OpenAi;
use crate::error::OpenAiError;

const AUDIO_FIELDS: &[&str] = &["model", "language", "prompt", "response_format", "temperature"];

/// `POST audio/transcriptions` (multipart)
///
/// Input: `{"file": "<path>", "model": ..., "language"?, "prompt"?,
/// "response_format"?, "temperature"?}`.
pub fn transcribe(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    let form = multipart_from_input(input, "file", AUDIO_FIELDS)?;
    client.post_multipart("audio/transcriptions", form)
}

/// `POST audio/translations` (multipart) — translates audio into English.
pub fn translate(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    let form = multipart_from_input(input, "file", AUDIO_FIELDS)?;
    client.post_multipart("audio/translations", form)
}
