//! End-to-end request tests against a local mock server.

use std::io::Write;

use mockito::Matcher;
use openai_lite::prelude::*;
use serde_json::json;

fn client_for(server: &mockito::Server) -> OpenAi {
    OpenAi::builder()
        .api_key("sk-test")
        .base_url(format!("{}/v1", server.url()))
        .build()
        .expect("client builds")
}

#[test]
fn get_models_sends_auth_and_parses_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/models")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"object":"list","data":[{"id":"gpt-4o-mini"}]}"#)
        .create();

    let client = client_for(&server);
    let value = api::models::list(&client).unwrap();

    assert_eq!(value["object"], "list");
    assert_eq!(value["data"][0]["id"], "gpt-4o-mini");
    mock.assert();
}

#[test]
fn organization_and_beta_headers_are_applied() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/assistants")
        .match_header("openai-organization", "org-1")
        .match_header("openai-beta", "assistants=v1")
        .with_body(r#"{"object":"list","data":[]}"#)
        .create();

    let client = OpenAi::builder()
        .api_key("sk-test")
        .organization("org-1")
        .beta("assistants=v1")
        .base_url(format!("{}/v1", server.url()))
        .build()
        .unwrap();
    api::assistants::list(&client).unwrap();
    mock.assert();
}

#[test]
fn post_sends_json_body_and_content_type() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({"model": "gpt-4o-mini"})))
        .with_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#)
        .create();

    let client = client_for(&server);
    let reply = api::chat::create(
        &client,
        &json!({"model": "gpt-4o-mini", "messages": []}),
    )
    .unwrap();

    assert_eq!(reply["choices"][0]["message"]["content"], "hi");
    mock.assert();
}

#[test]
fn delete_routes_to_the_resource_path() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/v1/files/file-123")
        .with_body(r#"{"id":"file-123","deleted":true}"#)
        .create();

    let client = client_for(&server);
    let value = api::files::delete(&client, "file-123").unwrap();
    assert_eq!(value["deleted"], true);
    mock.assert();
}

#[test]
fn query_parameters_are_url_encoded() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/fine-tunes")
        .match_query(Matcher::UrlEncoded("after".into(), "ft 1".into()))
        .with_body(r#"{"object":"list","data":[]}"#)
        .create();

    let client = client_for(&server);
    client
        .get_with_query("fine-tunes", &[("after", "ft 1")])
        .unwrap();
    mock.assert();
}

#[test]
fn status_404_is_an_http_status_error_with_body() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/models/nope")
        .with_status(404)
        .with_body(r#"{"error":{"message":"model not found"}}"#)
        .create();

    let client = client_for(&server);
    let err = api::models::retrieve(&client, "nope").unwrap_err();
    match err {
        OpenAiError::HttpStatusError { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("model not found"));
        }
        other => panic!("expected HttpStatusError, got {other:?}"),
    }
}

#[test]
fn embedded_error_on_http_200_still_fires() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/v1/completions")
        .with_status(200)
        .with_body(r#"{"error":{"message":"bad request"}}"#)
        .create();

    let client = client_for(&server);
    let err = api::completions::create(&client, &json!({"model": "x"})).unwrap_err();
    match err {
        OpenAiError::ApiError { message } => assert_eq!(message, "bad request"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[test]
fn report_mode_logs_instead_of_failing() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/models")
        .with_status(500)
        .with_body("upstream exploded")
        .create();

    let client = OpenAi::builder()
        .api_key("sk-test")
        .base_url(format!("{}/v1", server.url()))
        .error_policy(ErrorPolicy::Report)
        .build()
        .unwrap();

    let value = api::models::list(&client).unwrap();
    assert!(value.is_null());
}

#[test]
fn non_json_get_body_is_wrapped_under_result() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/files/file-1/content")
        .with_body("col_a,col_b\n1,2\n")
        .create();

    let client = client_for(&server);
    let value = api::files::content(&client, "file-1").unwrap();
    assert_eq!(value["result"], "col_a,col_b\n1,2\n");
}

#[test]
fn file_upload_sends_multipart_with_fields() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/files")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="purpose""#.to_string()),
            Matcher::Regex("fine-tune".to_string()),
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex(r#"\{"prompt": "p"\}"#.to_string()),
        ]))
        .with_body(r#"{"id":"file-xyz","object":"file"}"#)
        .create();

    let mut upload = tempfile::NamedTempFile::new().unwrap();
    writeln!(upload, r#"{{"prompt": "p"}}"#).unwrap();

    let client = client_for(&server);
    let value = api::files::upload(
        &client,
        &json!({
            "file": upload.path().to_str().unwrap(),
            "purpose": "fine-tune",
        }),
    )
    .unwrap();

    assert_eq!(value["id"], "file-xyz");
    mock.assert();
}

#[test]
fn audio_transcription_stringifies_numeric_fields() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/audio/transcriptions")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="model""#.to_string()),
            Matcher::Regex("whisper-1".to_string()),
            Matcher::Regex(r#"name="temperature""#.to_string()),
            Matcher::Regex("0.2".to_string()),
        ]))
        .with_body(r#"{"text":"hello"}"#)
        .create();

    let mut audio = tempfile::NamedTempFile::new().unwrap();
    audio.write_all(b"fake-audio-bytes").unwrap();

    let client = client_for(&server);
    let value = api::audio::transcribe(
        &client,
        &json!({
            "file": audio.path().to_str().unwrap(),
            "model": "whisper-1",
            "temperature": 0.2,
        }),
    )
    .unwrap();

    assert_eq!(value["text"], "hello");
    mock.assert();
}

#[test]
fn submit_tool_outputs_path_has_a_separator() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/threads/th_1/runs/run_1/submit_tool_outputs")
        .with_body(r#"{"id":"run_1"}"#)
        .create();

    let client = client_for(&server);
    api::threads::submit_tool_outputs(&client, "th_1", "run_1", &json!({"tool_outputs": []}))
        .unwrap();
    mock.assert();
}

#[test]
fn repeated_gets_hit_the_same_resolved_url() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/models")
        .with_body(r#"{"object":"list","data":[]}"#)
        .expect(2)
        .create();

    let client = client_for(&server);
    api::models::list(&client).unwrap();
    api::models::list(&client).unwrap();
    mock.assert();
}

#[test]
fn concurrent_callers_are_serialized_through_one_client() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/models")
        .with_body(r#"{"object":"list","data":[]}"#)
        .expect(4)
        .create();

    let client = client_for(&server);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                api::models::list(&client).unwrap();
            });
        }
    });
    mock.assert();
}
