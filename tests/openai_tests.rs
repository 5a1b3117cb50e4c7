//! Chat-completions client against a mocked OpenAI-compatible gateway.

use investigator::llm::{GenerationParams, LLMClient, OpenAIClient};
use investigator::types::AppError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "google/gemma-3-12b-it:free";

fn client_for(server: &MockServer) -> OpenAIClient {
    OpenAIClient::new(
        "or-test-key".to_string(),
        format!("{}/api/v1", server.uri()),
        MODEL.to_string(),
    )
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "gen-1",
        "object": "chat.completion",
        "model": MODEL,
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

#[tokio::test]
async fn test_generate_sends_prompt_as_user_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("Authorization", "Bearer or-test-key"))
        .and(body_partial_json(json!({
            "model": MODEL,
            "messages": [{ "role": "user", "content": "Who was the suspect?" }],
            "temperature": 0.5,
            "max_tokens": 256
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("John Doe.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_params(GenerationParams {
        temperature: 0.5,
        max_tokens: 256,
    });
    let answer = client.generate("Who was the suspect?").await.unwrap();

    assert_eq!(answer, "John Doe.");
}

#[tokio::test]
async fn test_generate_uses_default_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(body_partial_json(json!({ "max_tokens": 1024 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.params().max_tokens, 1024);
    assert!((client.params().temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(client.generate("hi").await.unwrap(), "ok");
}

#[tokio::test]
async fn test_error_object_in_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "message": "Provider returned error", "code": 429 }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("hi").await.unwrap_err();

    assert!(matches!(err, AppError::LLM(_)));
    assert_eq!(
        err.to_string(),
        "LLM error: OpenAI API error: Provider returned error"
    );
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "No auth credentials found", "code": 401 }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("hi").await.unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("LLM error: OpenAI API error: HTTP 401"), "{}", message);
    assert!(message.contains("No auth credentials found"), "{}", message);
}

#[tokio::test]
async fn test_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("hi").await.unwrap_err();

    assert_eq!(err.to_string(), "LLM error: No response from OpenAI");
}

#[tokio::test]
async fn test_unreachable_gateway() {
    let client = OpenAIClient::new(
        "key".to_string(),
        "http://127.0.0.1:9".to_string(),
        MODEL.to_string(),
    );

    let err = client.generate("hi").await.unwrap_err();

    assert!(matches!(err, AppError::LLM(_)));
}
