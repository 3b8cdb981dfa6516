//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use spamlens::core::{create_router, Classifier, SpamDetector};
use spamlens::error::{Result, SpamError};
use spamlens::types::{Classification, Label};
use std::sync::Arc;
use tower::ServiceExt;

struct AlwaysSpam;

impl Classifier for AlwaysSpam {
    fn classify(&self, _text: &str) -> Result<Classification> {
        Ok(Classification::new(Label::Spam, 0.93))
    }

    fn name(&self) -> &str {
        "always-spam"
    }
}

struct AlwaysHam;

impl Classifier for AlwaysHam {
    fn classify(&self, _text: &str) -> Result<Classification> {
        Ok(Classification::new(Label::Ham, 0.81))
    }

    fn name(&self) -> &str {
        "always-ham"
    }
}

struct Failing;

impl Classifier for Failing {
    fn classify(&self, _text: &str) -> Result<Classification> {
        Err(SpamError::Classifier("boom".to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn router_with(classifier: impl Classifier + 'static) -> axum::Router {
    create_router(SpamDetector::new(Arc::new(classifier)))
}

fn classify_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/classify")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = router_with(AlwaysHam);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["classifier"], "always-ham");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_classify_spam_with_reasons() {
    let app = router_with(AlwaysSpam);

    let response = app
        .oneshot(classify_request(r#"{"message": "Visit https://example.com now"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["label"], "spam");
    assert_eq!(json["confidence"], 0.93);
    assert_eq!(
        json["reasons"],
        serde_json::json!(["may contain spam keywords", "contains a URL"])
    );
    assert_eq!(
        json["reason_codes"],
        serde_json::json!(["SPAM_KEYWORDS", "CONTAINS_URL"])
    );
}

#[tokio::test]
async fn test_classify_ham_has_no_reasons() {
    let app = router_with(AlwaysHam);

    let response = app
        .oneshot(classify_request(r#"{"message": "FREE!!! http://x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["label"], "ham");
    assert_eq!(json["reasons"], serde_json::json!([]));
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let app = router_with(AlwaysSpam);

    let response = app
        .oneshot(classify_request(r#"{"message": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_whitespace_only_message_is_classified() {
    let app = router_with(AlwaysSpam);

    let response = app
        .oneshot(classify_request(r#"{"message": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["label"], "spam");
    assert_eq!(json["reasons"], serde_json::json!(["message is too short"]));
    assert_eq!(json["reason_codes"], serde_json::json!(["TOO_SHORT"]));
}

#[tokio::test]
async fn test_missing_message_field_rejected() {
    let app = router_with(AlwaysSpam);

    let response = app.oneshot(classify_request(r#"{}"#)).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_classifier_failure_is_server_error() {
    let app = router_with(Failing);

    let response = app
        .oneshot(classify_request(r#"{"message": "hello there"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
