//! Image generation, editing and variations.
//!
//! `edit` and `variation` are multipart endpoints: the `image` field of the
//! input names a local file. Documented defaults (`n`, `size`,
//! `response_format`) are filled in when absent; optional fields that the
//! caller did not supply are simply omitted.

use serde_json::Value;

use crate::api::multipart_from_input;
use crate::client::OpenAi;
use crate::error::OpenAiError;
use crate::transport::MultipartForm;

/// `POST images/generations`
pub fn create(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("images/generations", input)
}

/// `POST images/edits` (multipart)
///
/// Input: `{"image": "<path>", "prompt": ..., "mask"?, "n"?, "size"?,
/// "response_format"?, "user"?}`.
pub fn edit(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    if input.get("prompt").and_then(Value::as_str).is_none() {
        return Err(OpenAiError::InvalidInput(
            "Image edit input requires a `prompt` field".to_string(),
        ));
    }
    let form = multipart_from_input(
        input,
        "image",
        &["prompt", "mask", "n", "size", "response_format", "user"],
    )?;
    client.post_multipart("images/edits", with_image_defaults(form, input))
}

/// `POST images/variations` (multipart)
pub fn variation(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    let form =
        multipart_from_input(input, "image", &["n", "size", "response_format", "user"])?;
    client.post_multipart("images/variations", with_image_defaults(form, input))
}

fn with_image_defaults(mut form: MultipartForm, input: &Value) -> MultipartForm {
    if input.get("n").is_none() {
        form = form.field("n", "1");
    }
    if input.get("size").is_none() {
        form = form.field("size", "1024x1024");
    }
    if input.get("response_format").is_none() {
        form = form.field("response_format", "url");
    }
    form
}
