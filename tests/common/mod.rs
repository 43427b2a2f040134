#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use breachx::{
    build_router,
    config::{AppConfig, IndeterminatePolicy},
    error::UpstreamError,
    models::ProviderResponse,
    provider::BreachProvider,
    state::AppState,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

pub enum Reply {
    Payload(Value),
    Status(StatusCode),
}

/// Provider double that answers every lookup the same way and records
/// what it was asked.
pub struct MockProvider {
    reply: Reply,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn payload(raw: Value) -> Arc<Self> {
        Arc::new(MockProvider {
            reply: Reply::Payload(raw),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn status(status: StatusCode) -> Arc<Self> {
        Arc::new(MockProvider {
            reply: Reply::Status(status),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl BreachProvider for MockProvider {
    async fn lookup(&self, value: &str) -> Result<ProviderResponse, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(value.to_string());

        match &self.reply {
            Reply::Payload(raw) => Ok(ProviderResponse::from_raw(raw.clone())?),
            Reply::Status(status) => Err(UpstreamError::Status(*status)),
        }
    }
}

pub fn router_with(provider: Arc<dyn BreachProvider>, policy: IndeterminatePolicy) -> Router {
    let config = AppConfig {
        indeterminate: policy,
        ..AppConfig::default()
    };
    build_router(AppState::with_provider(config, provider))
}

pub fn router(provider: Arc<dyn BreachProvider>) -> Router {
    router_with(provider, IndeterminatePolicy::Clear)
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn post_check(router: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/breaches/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub fn example_breach() -> Value {
    json!({
        "success": true,
        "found": 1,
        "fields": ["password"],
        "sources": [{"name": "ExampleBreach", "date": "2020-01-01"}]
    })
}
