//! `/api/ai` against a local stand-in for the completion provider.

#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use common::{app, config, field, post_json, send};
use mini_blog::persistence::MemoryStore;

/// One request as seen by the fake provider.
struct Captured {
    headers: HeaderMap,
    body: Value,
}

type Calls = Arc<Mutex<Vec<Captured>>>;

/// Starts a provider answering every completion with `status` and `reply`.
async fn spawn_provider(status: StatusCode, reply: &'static str) -> (String, Calls) {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);

    let provider = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, body: Bytes| {
            let sink = Arc::clone(&sink);
            async move {
                let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
                sink.lock().await.push(Captured { headers, body });
                (status, [(CONTENT_TYPE, "application/json")], reply)
            }
        }),
    );

    let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, provider).await;
    });

    (format!("http://{addr}/v1/chat/completions"), calls)
}

fn blog_for(provider_url: &str) -> Router {
    let cfg = config(&[
        ("AI_API_KEY", "sk-test"),
        ("AI_API_URL", provider_url),
        ("AI_MODEL", "test/model"),
        ("AI_MAX_TOKENS", "256"),
        ("APP_URL", "https://blog.example"),
        ("AI_APP_TITLE", "Test Blog"),
    ]);
    app(Arc::new(MemoryStore::new()), &cfg)
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn relays_prompt_and_returns_first_choice() {
    let (url, calls) = spawn_provider(
        StatusCode::OK,
        r#"{"choices":[{"message":{"role":"assistant","content":"**hi** there"}},{"message":{"content":"ignored"}}]}"#,
    )
    .await;
    let blog = blog_for(&url);

    let response = send(&blog, post_json("/api/ai", &json!({"prompt": "  say hi  "}))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"text": "**hi** there"}));

    let calls = calls.lock().await;
    assert_eq!(calls.len(), 1);
    let Some(call) = calls.first() else {
        panic!("provider was not called");
    };
    assert_eq!(header(&call.headers, AUTHORIZATION.as_str()), Some("Bearer sk-test"));
    assert_eq!(header(&call.headers, "http-referer"), Some("https://blog.example"));
    assert_eq!(header(&call.headers, "x-title"), Some("Test Blog"));
    assert_eq!(
        call.body,
        json!({
            "model": "test/model",
            "messages": [{"role": "user", "content": "say hi"}],
            "max_tokens": 256,
        })
    );
}

#[tokio::test]
async fn reply_without_text_becomes_placeholder() {
    for reply in [r#"{"choices":[]}"#, r#"{"id":"x"}"#, "not json at all"] {
        let (url, calls) = spawn_provider(StatusCode::OK, reply).await;
        let blog = blog_for(&url);

        let response = send(&blog, post_json("/api/ai", &json!({"prompt": "hello"}))).await;
        assert_eq!(response.status, StatusCode::OK, "reply {reply}");
        assert_eq!(response.json(), json!({"text": "No reply from model."}));
        assert_eq!(calls.lock().await.len(), 1);
    }
}

#[tokio::test]
async fn provider_error_status_is_a_500() {
    let (url, calls) = spawn_provider(
        StatusCode::UNAUTHORIZED,
        r#"{"error":{"message":"invalid key sk-test"}}"#,
    )
    .await;
    let blog = blog_for(&url);

    let response = send(&blog, post_json("/api/ai", &json!({"prompt": "hello"}))).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(field(&body, "error"), "AI request failed");
    assert!(!response.text().contains("sk-test"));
    assert_eq!(calls.lock().await.len(), 1);
}

#[tokio::test]
async fn unreachable_provider_is_a_500() {
    let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    drop(listener);
    let blog = blog_for(&format!("http://{addr}/v1/chat/completions"));

    let response = send(&blog, post_json("/api/ai", &json!({"prompt": "hello"}))).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({"error": "AI request failed"}));
}

#[tokio::test]
async fn blank_prompt_never_reaches_provider() {
    let (url, calls) = spawn_provider(StatusCode::OK, r#"{"choices":[]}"#).await;
    let blog = blog_for(&url);

    for body in [json!({"prompt": ""}), json!({"prompt": " \n\t "}), json!({})] {
        let response = send(&blog, post_json("/api/ai", &body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
    assert!(calls.lock().await.is_empty());
}
