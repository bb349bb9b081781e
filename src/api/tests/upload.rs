use super::*;
use crate::types::Event;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt; // for oneshot()

fn upload_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/1/pdf/upload")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn upload_returns_empty_object_immediately() {
    let (app, _processor) = test_app().await;

    let response = app
        .oneshot(upload_request(serde_json::json!({
            "url": "http://example.com/doc.pdf"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[tokio::test]
async fn upload_schedules_the_pipeline() {
    let (app, processor) = test_app().await;

    let mut events = processor.subscribe();

    let response = app
        .oneshot(upload_request(serde_json::json!({
            "url": "http://example.com/doc.pdf"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The detached pipeline completes after the response has been produced
    let event = tokio::time::timeout(std::time::Duration::from_secs(5), events.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, Event::DocumentStored { url } if url == "http://example.com/doc.pdf"));

    assert_eq!(processor.db.count_documents().await.unwrap(), 1);
}

#[tokio::test]
async fn upload_accepts_failing_url_and_still_returns_ok() {
    // The ingress never validates or waits; a url whose fetch will fail is
    // accepted exactly like one that will succeed
    let (app, processor) = test_app_with(
        Arc::new(StubFetcher::failing("Not Found")),
        Arc::new(StubRenderer::producing(b"jpeg bytes")),
    )
    .await;

    let mut events = processor.subscribe();

    let response = app
        .oneshot(upload_request(serde_json::json!({
            "url": "http://example.com/missing.pdf"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let event = tokio::time::timeout(std::time::Duration::from_secs(5), events.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, Event::ProcessingFailed { .. }));

    assert_eq!(processor.db.count_documents().await.unwrap(), 0);
}

#[tokio::test]
async fn upload_rejects_body_without_url() {
    let (app, _processor) = test_app().await;

    let response = app
        .oneshot(upload_request(serde_json::json!({
            "hook": "http://example.com/hook"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
