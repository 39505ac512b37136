//! Page fetching — pluggable so the extraction pipeline can run against fixed markup.
//!
//! `AppState` holds an `Arc<dyn PageFetcher>`; the default is `HttpPageFetcher`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::scrape::ScrapeError;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the page body. Network failures and non-2xx statuses are `ScrapeError::Fetch`.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// reqwest-backed fetcher. No timeout beyond the client default; callers that need
/// bounded latency wrap the call themselves.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().user_agent(user_agent).build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("Fetching job posting: {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Fetch(format!("{url} returned HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::Fetch(e.to_string()))?;

        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs/42"))
            .and(header("user-agent", "trackr-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let fetcher = HttpPageFetcher::new("trackr-test/1.0").unwrap();
        let body = fetcher
            .fetch(&format!("{}/jobs/42", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpPageFetcher::new("trackr-test/1.0").unwrap();
        let err = fetcher
            .fetch(&format!("{}/gone", server.uri()))
            .await
            .unwrap_err();
        match err {
            ScrapeError::Fetch(msg) => assert!(msg.contains("404"), "unexpected message: {msg}"),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_fetch_error() {
        let fetcher = HttpPageFetcher::new("trackr-test/1.0").unwrap();
        // Port 9 (discard) on localhost is closed in test environments.
        let err = fetcher.fetch("http://127.0.0.1:9/job").await.unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch(_)));
    }
}
