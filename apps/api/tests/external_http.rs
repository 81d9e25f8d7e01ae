//! Outbound HTTP against a local mock server: the chat-completions client and
//! job-posting downloads.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, ScriptedModel};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use features_provider::config::LlmSettings;
use features_provider::llm_client::{ChatModel, LlmClient, LlmError};

fn settings(server: &MockServer) -> LlmSettings {
    LlmSettings {
        api_url: format!("{}/api/v1/chat/completions", server.uri()),
        api_key: "test-key".to_string(),
        model: "test/model".to_string(),
        timeout: Duration::from_secs(2),
    }
}

// ---------------------------------------------------------------------------
// LlmClient
// ---------------------------------------------------------------------------

#[tokio::test]
async fn llm_client_sends_bearer_and_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test/model",
            "stream": false,
            "messages": [
                { "role": "system", "content": "Be brief." },
                { "role": "user", "content": "Say hi" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Hi!" } }],
            "usage": { "prompt_tokens": 5, "completion_tokens": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = LlmClient::new(&settings(&server)).unwrap();
    let text = client.complete("Say hi", Some("Be brief.")).await.unwrap();
    assert_eq!(text, "Hi!");
}

#[tokio::test]
async fn llm_client_surfaces_provider_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Rate limit exceeded" }
        })))
        .mount(&server)
        .await;

    let client = LlmClient::new(&settings(&server)).unwrap();
    match client.complete("Say hi", None).await {
        Err(LlmError::Api { status, message }) => {
            assert_eq!(status, 429);
            assert_eq!(message, "Rate limit exceeded");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn llm_client_blank_content_is_empty_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "   " } }]
        })))
        .mount(&server)
        .await;

    let client = LlmClient::new(&settings(&server)).unwrap();
    let err = client.complete("Say hi", None).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyContent));
}

#[tokio::test]
async fn llm_client_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "choices": [{ "message": { "content": "late" } }] }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut settings = settings(&server);
    settings.timeout = Duration::from_millis(200);
    let client = LlmClient::new(&settings).unwrap();
    let err = client.complete("Say hi", None).await.unwrap_err();
    assert!(matches!(err, LlmError::Http(_)));
}

// ---------------------------------------------------------------------------
// Job posting download
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extract_from_link_feeds_page_text_to_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><script>track()</script></head>\
             <body><h1>Backend Engineer</h1><p>Tech Corp &amp; friends, Berlin</p></body></html>",
        ))
        .mount(&server)
        .await;

    let model = ScriptedModel::replying(
        r#"{"company_name": "Tech Corp", "company_city": "Berlin", "title": "Backend Engineer", "description": "Rust"}"#,
    );
    let app = build_test_app(model.clone());

    let response = post_json(
        &app,
        "/api/extract-job-description-from-link",
        json!({ "jobUrl": format!("{}/jobs/42", server.uri()) }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["company_city"], "Berlin");

    let calls = model.calls();
    let prompt = &calls[0].0;
    assert!(prompt.contains("Backend Engineer\nTech Corp & friends, Berlin"));
    assert!(!prompt.contains("track()"));
}

#[tokio::test]
async fn extract_from_link_missing_page_is_422() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let model = ScriptedModel::replying("unused");
    let app = build_test_app(model.clone());

    let response = post_json(
        &app,
        "/api/extract-job-description-from-link",
        json!({ "jobUrl": format!("{}/jobs/gone", server.uri()) }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(model.calls().is_empty());
}
