//! Resource modules.
//!
//! One module per API resource category, each a namespace of free functions
//! over an explicit [`OpenAi`](crate::client::OpenAi) handle. Every function
//! is a one-liner: build the path, delegate to `get`/`post`/`delete`.
//!
//! Upload endpoints accept the same JSON input shape as their non-upload
//! siblings; the file-path field and the auxiliary string fields are lifted
//! out of the input into a multipart form.

pub mod assistants;
pub mod audio;
pub mod chat;
pub mod completions;
pub mod edits;
pub mod embeddings;
pub mod files;
pub mod fine_tunes;
pub mod images;
pub mod models;
pub mod moderations;
pub mod threads;

use serde_json::Value;

use crate::error::OpenAiError;
use crate::transport::MultipartForm;

/// Build a multipart form from a JSON input: `file_key` names the field
/// holding the local file path, `field_keys` the plain fields forwarded as
/// strings when present. Numbers and booleans are stringified.
pub(crate) fn multipart_from_input(
    input: &Value,
    file_key: &str,
    field_keys: &[&str],
) -> Result<MultipartForm, OpenAiError> {
    let path = input
        .get(file_key)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            OpenAiError::InvalidInput(format!("Upload input is missing the `{file_key}` field"))
        })?;

    let mut form = MultipartForm::new(file_key, path);
    for key in field_keys {
        let Some(value) = input.get(key) else { continue };
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        form = form.field(*key, text);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lifts_file_and_string_fields() {
        let input = json!({
            "file": "/tmp/audio.mp3",
            "model": "whisper-1",
            "temperature": 0.2,
            "ignored": {"nested": true}
        });
        let form = multipart_from_input(&input, "file", &["model", "temperature", "language"])
            .unwrap();
        assert_eq!(form.file_path().to_str(), Some("/tmp/audio.mp3"));
    }

    #[test]
    fn missing_file_field_is_invalid_input() {
        let input = json!({"model": "whisper-1"});
        let err = multipart_from_input(&input, "file", &["model"]).unwrap_err();
        assert!(matches!(err, OpenAiError::InvalidInput(_)));
    }
}
