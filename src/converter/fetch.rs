//! HTTP fetcher backed by reqwest

use async_trait::async_trait;
use std::time::Duration;

use crate::error::ConvertError;
use super::traits::PdfFetcher;

/// Fetches PDFs over HTTP(S) with a bounded timeout
///
/// Any transport failure, invalid url, or non-success status is reported as
/// a [`ConvertError`]; the error's Display output is what a webhook receiver
/// sees as `statusText`.
pub struct HttpPdfFetcher {
    client: reqwest::Client,
}

impl HttpPdfFetcher {
    /// Create a fetcher whose requests are bounded by `timeout`
    pub fn new(timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PdfFetcher for HttpPdfFetcher {
    async fn fetch(&self, url: &str) -> crate::Result<Vec<u8>> {
        // Parse up front so a malformed url yields a readable message instead
        // of a reqwest builder error
        let parsed = url::Url::parse(url).map_err(|e| ConvertError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| ConvertError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::HttpStatus {
                url: url.to_string(),
                status: status
                    .canonical_reason()
                    .unwrap_or_else(|| status.as_str())
                    .to_string(),
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| ConvertError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_returns_body_bytes_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 content".to_vec()))
            .mount(&server)
            .await;

        let fetcher = HttpPdfFetcher::new(Duration::from_secs(5)).unwrap();
        let bytes = fetcher
            .fetch(&format!("{}/doc.pdf", server.uri()))
            .await
            .unwrap();

        assert_eq!(bytes, b"%PDF-1.4 content");
    }

    #[tokio::test]
    async fn fetch_fails_on_not_found_with_reason_phrase() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.pdf"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpPdfFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing.pdf", server.uri()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not Found");
    }

    #[tokio::test]
    async fn fetch_fails_on_malformed_url() {
        let fetcher = HttpPdfFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch("not a url at all").await.unwrap_err();

        assert!(err.to_string().contains("not a url at all"));
    }

    #[tokio::test]
    async fn fetch_fails_on_unreachable_host() {
        let fetcher = HttpPdfFetcher::new(Duration::from_secs(2)).unwrap();
        // Reserved TEST-NET-1 address; nothing listens there
        let err = fetcher
            .fetch("http://192.0.2.1:9/doc.pdf")
            .await
            .unwrap_err();

        assert!(!err.to_string().is_empty());
    }
}
