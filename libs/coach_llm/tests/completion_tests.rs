//! Gateway tests against a local stub completion endpoint.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use coach_llm::{
    deepseek::{DeepSeekConfig, DeepSeekService},
    ChatCompletion, ChatMessage, CompletionClient, CompletionClientConfig, CompletionError,
    RetryConfig,
};
use serde_json::{json, Value};

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn completion_body(content: &str) -> Value {
    json!({
        "id": "stub",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}

fn service_for(base_url: String) -> DeepSeekService {
    DeepSeekService::new(DeepSeekConfig::new("test-key").with_base_url(base_url))
}

#[tokio::test]
async fn complete_returns_first_choice_content() {
    let router = Router::new().route(
        "/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            assert_eq!(headers["authorization"], "Bearer test-key");
            assert_eq!(body["model"], "deepseek-chat");
            assert_eq!(body["response_format"]["type"], "json_object");
            assert_eq!(body["messages"][0]["role"], "system");
            assert_eq!(body["messages"][1]["role"], "user");
            assert_eq!(body["messages"][1]["content"], "hello");
            Json(completion_body(r#"{"ok":true}"#))
        }),
    );
    let base_url = spawn_stub(router).await;

    let content = service_for(base_url)
        .complete(
            &[ChatMessage::system("rules"), ChatMessage::user("hello")],
            true,
        )
        .await
        .unwrap();

    assert_eq!(content, r#"{"ok":true}"#);
}

#[tokio::test]
async fn complete_without_json_mode_omits_response_format() {
    let router = Router::new().route(
        "/chat/completions",
        post(|Json(body): Json<Value>| async move {
            assert!(body.get("response_format").is_none());
            Json(completion_body("plain text, not JSON"))
        }),
    );
    let base_url = spawn_stub(router).await;

    let content = service_for(base_url)
        .complete(&[ChatMessage::user("hello")], false)
        .await
        .unwrap();

    // The gateway hands content back unparsed.
    assert_eq!(content, "plain text, not JSON");
}

#[tokio::test]
async fn non_success_status_preserves_upstream_body() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::PAYMENT_REQUIRED, "Insufficient Balance") }),
    );
    let base_url = spawn_stub(router).await;

    let err = service_for(base_url)
        .complete(&[ChatMessage::user("hello")], true)
        .await
        .unwrap_err();

    match err {
        CompletionError::Upstream { status, body } => {
            assert_eq!(status.as_u16(), 402);
            assert!(body.contains("Insufficient Balance"));
        }
        other => panic!("expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_choices_is_missing_content() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({ "id": "stub", "choices": [] })) }),
    );
    let base_url = spawn_stub(router).await;

    let err = service_for(base_url)
        .complete(&[ChatMessage::user("hello")], true)
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::MissingContent));
}

struct CountingFailure {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ChatCompletion for CountingFailure {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _json_mode: bool,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CompletionError::MissingContent)
    }
}

#[tokio::test]
async fn default_client_config_makes_exactly_one_attempt() {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = CompletionClient::from_service(
        Box::new(CountingFailure {
            calls: calls.clone(),
        }),
        CompletionClientConfig::default(),
    );

    let err = client
        .complete(&[ChatMessage::user("hello")], true)
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::MissingContent));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn configured_retries_reattempt_failed_calls() {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = CompletionClient::from_service(
        Box::new(CountingFailure {
            calls: calls.clone(),
        }),
        CompletionClientConfig {
            timeout: Duration::from_secs(5),
            retry: RetryConfig {
                max_retries: 2,
                base_delay: Duration::from_millis(1),
            },
        },
    );

    let err = client
        .complete(&[ChatMessage::user("hello")], true)
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::MissingContent));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
