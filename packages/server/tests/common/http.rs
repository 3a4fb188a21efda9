//! Minimal HTTP client driving the in-process axum router.

use std::sync::atomic::{AtomicU16, Ordering};

use axum::body::Body;
use axum::http::{header, request::Builder, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::harness::TestHarness;

/// Hands out a distinct client IP per client so the per-IP rate limiter
/// never couples tests together.
static NEXT_IP: AtomicU16 = AtomicU16::new(1);

pub struct ApiClient {
    app: Router,
    client_ip: String,
}

impl ApiClient {
    pub fn new(harness: &TestHarness) -> Self {
        let n = NEXT_IP.fetch_add(1, Ordering::Relaxed);
        Self {
            app: harness.app(),
            client_ip: format!("10.77.{}.{}", n / 256, n % 256),
        }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send(Request::builder().method("GET").uri(path), None)
            .await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(Request::builder().method("POST").uri(path), Some(body))
            .await
    }

    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(Request::builder().method("PUT").uri(path), Some(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.send(Request::builder().method("DELETE").uri(path), None)
            .await
    }

    async fn send(&self, builder: Builder, body: Option<Value>) -> (StatusCode, Value) {
        let builder = builder
            .header("x-forwarded-for", &self.client_ip)
            .header(header::CONTENT_TYPE, "application/json");

        let request = match body {
            Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
