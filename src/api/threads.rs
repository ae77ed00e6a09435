//! Threads, messages, runs and run steps.
//!
//! Pre-stable surface, like [`assistants`](crate::api::assistants).

use serde_json::{Value, json};

use crate::client::OpenAi;
use crate::error::OpenAiError;

/// `POST threads`
pub fn create(client: &OpenAi) -> Result<Value, OpenAiError> {
    client.post("threads", &json!({}))
}

/// `GET threads/{thread_id}`
pub fn retrieve(client: &OpenAi, thread_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("threads/{thread_id}"))
}

/// `POST threads/{thread_id}`
pub fn modify(client: &OpenAi, thread_id: &str, input: &Value) -> Result<Value, OpenAiError> {
    client.post(&format!("threads/{thread_id}"), input)
}

/// `DELETE threads/{thread_id}`
pub fn delete(client: &OpenAi, thread_id: &str) -> Result<Value, OpenAiError> {
    client.delete(&format!("threads/{thread_id}"))
}

/// `POST threads/{thread_id}/messages`
pub fn create_message(
    client: &OpenAi,
    thread_id: &str,
    input: &Value,
) -> Result<Value, OpenAiError> {
    client.post(&format!("threads/{thread_id}/messages"), input)
}

/// `GET threads/{thread_id}/messages/{message_id}`
pub fn retrieve_message(
    client: &OpenAi,
    thread_id: &str,
    message_id: &str,
) -> Result<Value, OpenAiError> {
    client.get(&format!("threads/{thread_id}/messages/{message_id}"))
}

/// `POST threads/{thread_id}/messages/{message_id}`
pub fn modify_message(
    client: &OpenAi,
    thread_id: &str,
    message_id: &str,
    input: &Value,
) -> Result<Value, OpenAiError> {
    client.post(&format!("threads/{thread_id}/messages/{message_id}"), input)
}

/// `GET threads/{thread_id}/messages`
pub fn list_messages(client: &OpenAi, thread_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("threads/{thread_id}/messages"))
}

/// `GET threads/{thread_id}/messages/{message_id}/files/{file_id}`
pub fn retrieve_message_file(
    client: &OpenAi,
    thread_id: &str,
    message_id: &str,
    file_id: &str,
) -> Result<Value, OpenAiError> {
    client.get(&format!(
        "threads/{thread_id}/messages/{message_id}/files/{file_id}"
    ))
}

/// `GET threads/{thread_id}/messages/{message_id}/files`
pub fn list_message_files(
    client: &OpenAi,
    thread_id: &str,
    message_id: &str,
) -> Result<Value, OpenAiError> {
    client.get(&format!("threads/{thread_id}/messages/{message_id}/files"))
}

/// `POST threads/{thread_id}/runs`
pub fn create_run(client: &OpenAi, thread_id: &str, input: &Value) -> Result<Value, OpenAiError> {
    client.post(&format!("threads/{thread_id}/runs"), input)
}

/// `GET threads/{thread_id}/runs/{run_id}`
pub fn retrieve_run(
    client: &OpenAi,
    thread_id: &str,
    run_id: &str,
) -> Result<Value, OpenAiError> {
    client.get(&format!("threads/{thread_id}/runs/{run_id}"))
}

/// `POST threads/{thread_id}/runs/{run_id}`
pub fn modify_run(
    client: &OpenAi,
    thread_id: &str,
    run_id: &str,
    input: &Value,
) -> Result<Value, OpenAiError> {
    client.post(&format!("threads/{thread_id}/runs/{run_id}"), input)
}

/// `GET threads/{thread_id}/runs`
pub fn list_runs(client: &OpenAi, thread_id: &str) -> Result<Value, OpenAiError> {
    client.get(&format!("threads/{thread_id}/runs"))
}

/// `POST threads/{thread_id}/runs/{run_id}/submit_tool_outputs`
pub fn submit_tool_outputs(
    client: &OpenAi,
    thread_id: &str,
    run_id: &str,
    input: &Value,
) -> Result<Value, OpenAiError> {
    client.post(
        &format!("threads/{thread_id}/runs/{run_id}/submit_tool_outputs"),
        input,
    )
}

/// `POST threads/{thread_id}/runs/{run_id}/cancel`
pub fn cancel_run(client: &OpenAi, thread_id: &str, run_id: &str) -> Result<Value, OpenAiError> {
    client.post(&format!("threads/{thread_id}/runs/{run_id}/cancel"), &json!({}))
}

/// `POST threads/runs` — create a thread and run it in one request.
pub fn create_thread_and_run(client: &OpenAi, input: &Value) -> Result<Value, OpenAiError> {
    client.post("threads/runs", input)
}

/// `GET threads/{thread_id}/runs/{run_id}/steps/{step_id}`
pub fn retrieve_run_step(
    client: &OpenAi,
    thread_id: &str,
    run_id: &str,
    step_id: &str,
) -> Result<Value, OpenAiError> {
    client.get(&format!("threads/{thread_id}/runs/{run_id}/steps/{step_id}"))
}

/// `GET threads/{thread_id}/runs/{run_id}/steps`
pub fn list_run_steps(
    client: &OpenAi,
    thread_id: &str,
    run_id: &str,
) -> Result<Value, OpenAiError> {
    client.get(&format!("threads/{thread_id}/runs/{run_id}/steps"))
}
