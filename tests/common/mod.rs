// Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use pushover_desktop::{
    application::ports::{NotificationError, Notifier},
    domain::{
        config::ServiceConfig,
        notification::{NotificationIcon, Severity},
    },
    http::{router, ApiState},
};
use tower::ServiceExt;

/// One recorded notifier invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub icon: Option<NotificationIcon>,
}

/// How the mock notifier responds
#[derive(Debug, Clone, Default)]
pub enum Behavior {
    #[default]
    Succeed,
    Fail(String),
    Hang(Duration),
    Panic,
}

/// Notifier that records every call
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    calls: Arc<Mutex<Vec<Call>>>,
    behavior: Behavior,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        self.calls.lock().unwrap().push(Call {
            severity,
            title: title.to_string(),
            message: message.to_string(),
            icon: icon.cloned(),
        });

        match &self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail(cause) => Err(NotificationError::SendFailed(cause.clone())),
            Behavior::Hang(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(())
            }
            Behavior::Panic => panic!("notifier exploded"),
        }
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        self.record(Severity::Notify, title, message, icon).await
    }

    async fn alert(
        &self,
        title: &str,
        message: &str,
        icon: Option<&NotificationIcon>,
    ) -> Result<(), NotificationError> {
        self.record(Severity::Alert, title, message, icon).await
    }
}

/// Router wired to `notifier` with the given config
pub fn test_app_with_config(notifier: RecordingNotifier, config: &ServiceConfig) -> Router {
    router(
        ApiState::new(config, Box::new(notifier)),
        config.request_timeout,
    )
}

/// Router wired to `notifier` with default config
pub fn test_app(notifier: RecordingNotifier) -> Router {
    test_app_with_config(notifier, &ServiceConfig::default())
}

/// Response captured from a oneshot request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl TestResponse {
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

/// Send one request through the router
pub async fn send(app: Router, method: Method, path: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Router error");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).expect("Response body is not JSON");

    TestResponse {
        status,
        headers,
        body,
    }
}

/// POST a JSON string
pub async fn post(app: Router, path: &str, body: &str) -> TestResponse {
    send(app, Method::POST, path, body.to_string()).await
}
