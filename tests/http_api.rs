//! HTTP API integration tests

mod common;

use std::time::Duration;

use axum::http::{header, Method, StatusCode};
use base64::{engine::general_purpose::STANDARD, Engine};
use pushover_desktop::domain::{
    config::ServiceConfig,
    notification::{NotificationIcon, Severity},
};
use serde_json::json;

use common::*;

#[tokio::test]
async fn notification_is_delivered() {
    let notifier = RecordingNotifier::new();
    let app = test_app(notifier.clone());

    let resp = post(app, "/notification", r#"{"title":"Deploy","message":"v1.2 is live"}"#).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.message(), "Notification sent successfully");
    assert_eq!(
        notifier.calls(),
        vec![Call {
            severity: Severity::Notify,
            title: "Deploy".to_string(),
            message: "v1.2 is live".to_string(),
            icon: None,
        }]
    );
}

#[tokio::test]
async fn alert_is_delivered_with_alert_severity() {
    let notifier = RecordingNotifier::new();
    let app = test_app(notifier.clone());

    let resp = post(app, "/alert", r#"{"title":"Disk","message":"95% full"}"#).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.message(), "Alert sent successfully");
    assert_eq!(notifier.calls()[0].severity, Severity::Alert);
}

#[tokio::test]
async fn responses_are_json() {
    let app = test_app(RecordingNotifier::new());

    let resp = post(app, "/notification", r#"{"title":"a","message":"b"}"#).await;

    assert_eq!(resp.headers[header::CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn field_names_match_regardless_of_case() {
    let notifier = RecordingNotifier::new();

    let resp = post(
        test_app(notifier.clone()),
        "/alert",
        r#"{"Title":"Deploy","Message":"v1.2 is live"}"#,
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(notifier.calls()[0].title, "Deploy");
    assert_eq!(notifier.calls()[0].message, "v1.2 is live");
}

#[tokio::test]
async fn missing_fields_are_rejected_on_both_endpoints() {
    let bodies = [
        r#"{"message":"no title"}"#,
        r#"{"title":"no message"}"#,
        r#"{"title":"","message":"empty title"}"#,
        r#"{"title":"empty message","message":""}"#,
        r#"{}"#,
    ];

    for path in ["/notification", "/alert"] {
        for body in bodies {
            let notifier = RecordingNotifier::new();
            let resp = post(test_app(notifier.clone()), path, body).await;

            assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{} {}", path, body);
            assert_eq!(resp.message(), "title and message are required");
            assert!(notifier.calls().is_empty());
        }
    }
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let bodies = [
        "",
        "{",
        r#"{"title":"a","message":"#,
        "not json",
        "[]",
        "42",
        r#"{"title":7,"message":"b"}"#,
    ];

    for path in ["/notification", "/alert"] {
        for body in bodies {
            let notifier = RecordingNotifier::new();
            let resp = post(test_app(notifier.clone()), path, body).await;

            assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{} {:?}", path, body);
            assert!(
                resp.message().starts_with("invalid request payload: "),
                "unexpected message: {}",
                resp.message()
            );
            assert!(notifier.calls().is_empty());
        }
    }
}

#[tokio::test]
async fn base64_icon_is_decoded_before_delivery() {
    let notifier = RecordingNotifier::new();
    let app = test_app(notifier.clone());

    // "\x89PNG"
    let resp = post(
        app,
        "/notification",
        r#"{"title":"a","message":"b","icon":"iVBORw=="}"#,
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        notifier.calls()[0].icon,
        Some(NotificationIcon::Bytes(vec![0x89, b'P', b'N', b'G']))
    );
}

#[tokio::test]
async fn line_wrapped_base64_icon_is_decoded() {
    let notifier = RecordingNotifier::new();
    let bytes: Vec<u8> = (0..81).collect();
    let encoded = STANDARD.encode(&bytes);
    let (head, tail) = encoded.split_at(76);
    let body = json!({
        "title": "a",
        "message": "b",
        "icon": format!("{}\n{}\n", head, tail),
    });

    let resp = post(test_app(notifier.clone()), "/notification", &body.to_string()).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(notifier.calls()[0].icon, Some(NotificationIcon::Bytes(bytes)));
}

#[tokio::test]
async fn invalid_icon_is_dropped_not_rejected() {
    let notifier = RecordingNotifier::new();
    let app = test_app(notifier.clone());

    let resp = post(
        app,
        "/alert",
        r#"{"title":"a","message":"b","icon":"dialog-warning"}"#,
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(notifier.calls().len(), 1);
    assert_eq!(notifier.calls()[0].icon, None);
}

#[tokio::test]
async fn invalid_icon_passes_through_when_configured() {
    let notifier = RecordingNotifier::new();
    let config = ServiceConfig {
        icon_passthrough: true,
        ..Default::default()
    };
    let app = test_app_with_config(notifier.clone(), &config);

    let resp = post(
        app,
        "/notification",
        r#"{"title":"a","message":"b","icon":"/usr/share/icons/build.png"}"#,
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        notifier.calls()[0].icon,
        Some(NotificationIcon::Named("/usr/share/icons/build.png".to_string()))
    );
}

#[tokio::test]
async fn notifier_failure_returns_500_with_cause() {
    let notifier = RecordingNotifier::with_behavior(Behavior::Fail(
        "org.freedesktop.Notifications not available".to_string(),
    ));

    let resp = post(
        test_app(notifier.clone()),
        "/notification",
        r#"{"title":"a","message":"b"}"#,
    )
    .await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.message(),
        "Failed to send notification: org.freedesktop.Notifications not available"
    );

    let resp = post(test_app(notifier.clone()), "/alert", r#"{"title":"a","message":"b"}"#).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(resp.message().starts_with("Failed to send alert: "));
    assert!(resp.message().contains("not available"));

    // One attempt per request, no retries
    assert_eq!(notifier.calls().len(), 2);
}

#[tokio::test]
async fn health_reports_configured_name() {
    let config = ServiceConfig {
        app_name: "Build Bot".to_string(),
        ..Default::default()
    };
    let notifier = RecordingNotifier::with_behavior(Behavior::Fail("down".to_string()));
    let app = test_app_with_config(notifier.clone(), &config);

    let resp = send(app, Method::GET, "/", "").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.message(), "Build Bot is running");
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn health_uses_default_name() {
    let resp = send(test_app(RecordingNotifier::new()), Method::GET, "/", "").await;
    assert_eq!(resp.message(), "Pushover Desktop Notification Service is running");
}

#[tokio::test]
async fn unknown_path_is_json_404() {
    let resp = send(test_app(RecordingNotifier::new()), Method::GET, "/nope", "").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.message(), "resource not found");
}

#[tokio::test]
async fn wrong_method_is_json_405() {
    let resp = send(test_app(RecordingNotifier::new()), Method::GET, "/notification", "").await;

    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.message(), "method not allowed");
}

#[tokio::test]
async fn hung_notifier_times_out() {
    let notifier = RecordingNotifier::with_behavior(Behavior::Hang(Duration::from_secs(5)));
    let config = ServiceConfig {
        request_timeout: Duration::from_millis(50),
        ..Default::default()
    };

    let resp = post(
        test_app_with_config(notifier.clone(), &config),
        "/alert",
        r#"{"title":"a","message":"b"}"#,
    )
    .await;

    assert_eq!(resp.status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(resp.message(), "request timed out");
    // The notifier was already reached; nothing asks the caller to retry
    assert_eq!(notifier.calls().len(), 1);
}

#[tokio::test]
async fn panicking_notifier_becomes_500() {
    let notifier = RecordingNotifier::with_behavior(Behavior::Panic);

    let resp = post(test_app(notifier), "/notification", r#"{"title":"a","message":"b"}"#).await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.message(), "internal server error");
}

#[tokio::test]
async fn request_id_is_propagated() {
    let resp = post(
        test_app(RecordingNotifier::new()),
        "/notification",
        r#"{"title":"a","message":"b"}"#,
    )
    .await;

    let id = resp.headers.get("x-request-id").expect("missing x-request-id");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn oversized_body_is_json_413() {
    let notifier = RecordingNotifier::new();
    let icon = "A".repeat(pushover_desktop::http::MAX_BODY_BYTES + 4);
    let body = format!(r#"{{"title":"a","message":"b","icon":"{}"}}"#, icon);

    let resp = post(test_app(notifier.clone()), "/notification", &body).await;

    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(!resp.message().is_empty());
    assert!(notifier.calls().is_empty());
}
