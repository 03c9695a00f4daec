//! Shared helpers for the router-level tests.

#![allow(dead_code, clippy::panic)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Request, StatusCode};
use futures_util::future::BoxFuture;
use tower::ServiceExt;

use mini_blog::app::build_app;
use mini_blog::app_state::AppState;
use mini_blog::config::AppConfig;
use mini_blog::error::AppError;
use mini_blog::persistence::{NewPost, Post, Store, Visit};

/// Response parts collected by [`send`].
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        let Ok(value) = serde_json::from_slice(&self.body) else {
            panic!(
                "body is not json: {}",
                String::from_utf8_lossy(&self.body)
            );
        };
        value
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Looks up `key` in a JSON object, `Null` when absent.
pub fn field<'a>(value: &'a serde_json::Value, key: &str) -> &'a serde_json::Value {
    value.get(key).unwrap_or(&serde_json::Value::Null)
}

/// Builds a config from `vars`, with a placeholder `DATABASE_URL`.
pub fn config(vars: &[(&str, &str)]) -> AppConfig {
    let mut map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    map.entry("DATABASE_URL".to_string())
        .or_insert_with(|| "postgres://unused/test".to_string());

    let Ok(cfg) = AppConfig::from_lookup(|key| map.get(key).cloned()) else {
        panic!("test config should load");
    };
    cfg
}

/// Builds the full application over `store`.
pub fn app(store: Arc<dyn Store>, cfg: &AppConfig) -> Router {
    let Ok(state) = AppState::new(store, &cfg.ai) else {
        panic!("app state should build");
    };
    build_app(state, cfg)
}

pub fn get(uri: &str) -> Request<Body> {
    let Ok(req) = Request::builder().uri(uri).body(Body::empty()) else {
        panic!("request build failed");
    };
    req
}

pub fn post_empty(uri: &str) -> Request<Body> {
    let Ok(req) = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
    else {
        panic!("request build failed");
    };
    req
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    let Ok(req) = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
    else {
        panic!("request build failed");
    };
    req
}

pub fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    let Ok(req) = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
    else {
        panic!("request build failed");
    };
    req
}

/// Attaches a peer address, as `into_make_service_with_connect_info` would.
pub fn from_peer(mut req: Request<Body>, peer: &str) -> Request<Body> {
    let Ok(addr) = peer.parse::<SocketAddr>() else {
        panic!("bad peer address {peer}");
    };
    req.extensions_mut().insert(ConnectInfo(addr));
    req
}

pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let Ok(response) = app.clone().oneshot(req).await else {
        panic!("router failed");
    };
    let status = response.status();
    let headers = response.headers().clone();
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("body read failed");
    };
    TestResponse {
        status,
        headers,
        body: bytes.to_vec(),
    }
}

/// Store whose every call fails, as if the database were down.
#[derive(Debug, Default)]
pub struct FailingStore;

fn down<T: Send + 'static>() -> BoxFuture<'static, Result<T, AppError>> {
    Box::pin(async { Err(AppError::Persistence("connection refused".to_string())) })
}

impl Store for FailingStore {
    fn insert_post(&self, _post: NewPost) -> BoxFuture<'_, Result<Post, AppError>> {
        down()
    }

    fn find_posts_newest_first(&self) -> BoxFuture<'_, Result<Vec<Post>, AppError>> {
        down()
    }

    fn count_posts(&self) -> BoxFuture<'_, Result<u64, AppError>> {
        down()
    }

    fn insert_visit(&self) -> BoxFuture<'_, Result<Visit, AppError>> {
        down()
    }

    fn count_visits(&self) -> BoxFuture<'_, Result<u64, AppError>> {
        down()
    }
}
