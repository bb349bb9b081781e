//! End-to-end tests over the public crate surface: a wiremock origin serves
//! the PDF, the router accepts the submission, and a wiremock hook receives
//! the outcome.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pdf_thumbnailer::{
    Config, Event, HttpPdfFetcher, PdfProcessor, ThumbnailRenderer, api::create_router,
};

/// Renderer double: the external rasterizer is out of scope for these tests,
/// so any non-empty PDF "renders" to a fixed JPEG marker
struct FixedRenderer;

#[async_trait]
impl ThumbnailRenderer for FixedRenderer {
    async fn render(&self, pdf: &[u8]) -> pdf_thumbnailer::Result<Vec<u8>> {
        assert!(!pdf.is_empty(), "pipeline must pass the fetched bytes through");
        Ok(b"\xFF\xD8\xFFfake-jpeg".to_vec())
    }
}

async fn service() -> (axum::Router, Arc<PdfProcessor>) {
    let config = Config::default();
    let fetcher = HttpPdfFetcher::new(Duration::from_secs(5)).unwrap();
    let processor = Arc::new(
        PdfProcessor::with_converter(config.clone(), Arc::new(fetcher), Arc::new(FixedRenderer))
            .await
            .unwrap(),
    );
    let app = create_router(Arc::clone(&processor), Arc::new(config));
    (app, processor)
}

fn upload(url: &str, hook: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/1/pdf/upload")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"url": url, "hook": hook}).to_string(),
        ))
        .unwrap()
}

/// Wait until the subscription yields an event matching the predicate
async fn wait_for_event(
    events: &mut tokio::sync::broadcast::Receiver<Event>,
    mut predicate: impl FnMut(&Event) -> bool,
) -> Event {
    tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let event = events.recv().await.unwrap();
            if predicate(&event) {
                return event;
            }
        }
    })
    .await
    .expect("timed out waiting for pipeline event")
}

#[tokio::test]
async fn submitted_url_is_processed_and_hook_fires_once() {
    let origin = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/report.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 report".to_vec()))
        .expect(1)
        .mount(&origin)
        .await;

    let hook_server = MockServer::start().await;
    let pdf_url = format!("{}/report.pdf", origin.uri());
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(body_json(serde_json::json!({
            "url": pdf_url,
            "ok": true,
            "statusText": "",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&hook_server)
        .await;

    let (app, processor) = service().await;
    let mut events = processor.subscribe();

    let response = app
        .clone()
        .oneshot(upload(&pdf_url, &format!("{}/hook", hook_server.uri())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    wait_for_event(&mut events, |e| matches!(e, Event::DocumentStored { .. })).await;

    // A subsequent read returns exactly one document with a non-empty thumbnail
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/1/pdf/thumbnails")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], pdf_url);
    assert!(!items[0]["thumbnail"].as_str().unwrap().is_empty());

    origin.verify().await;
    hook_server.verify().await;
}

#[tokio::test]
async fn failed_fetch_reports_not_found_through_hook() {
    let origin = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&origin)
        .await;

    let hook_server = MockServer::start().await;
    let pdf_url = format!("{}/gone.pdf", origin.uri());
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(body_json(serde_json::json!({
            "url": pdf_url,
            "ok": false,
            "statusText": "Not Found",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&hook_server)
        .await;

    let (app, processor) = service().await;
    let mut events = processor.subscribe();

    let response = app
        .clone()
        .oneshot(upload(&pdf_url, &format!("{}/hook", hook_server.uri())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    wait_for_event(&mut events, |e| matches!(e, Event::ProcessingFailed { .. })).await;

    // No document was stored for the failed url
    assert_eq!(processor.db.count_documents().await.unwrap(), 0);
    hook_server.verify().await;
}

#[tokio::test]
async fn duplicate_submissions_store_one_document() {
    let origin = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dup.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 dup".to_vec()))
        .mount(&origin)
        .await;

    let (app, processor) = service().await;
    let mut events = processor.subscribe();
    let pdf_url = format!("{}/dup.pdf", origin.uri());

    // Submit the same url several times in quick succession
    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(upload(&pdf_url, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Wait until every submission has resolved one way or the other
    let mut resolved = 0;
    while resolved < 3 {
        let event = wait_for_event(&mut events, |e| {
            matches!(
                e,
                Event::DocumentStored { .. } | Event::DuplicateSkipped { .. }
            )
        })
        .await;
        drop(event);
        resolved += 1;
    }

    assert_eq!(processor.db.count_documents().await.unwrap(), 1);
}
