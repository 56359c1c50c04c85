//! Page retrieval over HTTP

#[cfg(test)]
use mockall::automock;

use crate::config::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::web::error::FetchError;
use std::time::Duration;
use tracing::warn;

/// Trait for fetching remote page content
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page at `url` and returns its raw body.
    ///
    /// # Returns
    /// * `Ok(String)` - The response body
    /// * `Err(FetchError)` - Classified as HTTP status, timeout, or network
    ///   failure; all collapse to "fetch failed" for callers, the distinction
    ///   is for logging
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// PageFetcher implementation backed by reqwest
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Creates a fetcher with the given user agent and per-request timeout.
    /// Redirects are followed automatically.
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .timeout(timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new(USER_AGENT, Duration::from_secs(FETCH_TIMEOUT_SECS))
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetch of {} returned status {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(classify)
    }
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else {
        FetchError::Network(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("<html>PoGo: 0.385.2</html>")
            .create_async()
            .await;

        let fetcher = HttpPageFetcher::default();
        let body = fetcher.fetch(&server.url()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, "<html>PoGo: 0.385.2</html>");
    }

    #[tokio::test]
    async fn fetch_sends_the_configured_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let fetcher = HttpPageFetcher::default();
        fetcher.fetch(&server.url()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_classifies_http_errors_as_status_failures() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;

        let fetcher = HttpPageFetcher::default();
        let result = fetcher.fetch(&server.url()).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status, .. }) if status.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn fetch_classifies_connection_failures_as_network_errors() {
        // Nothing listens on this port
        let fetcher = HttpPageFetcher::default();
        let result = fetcher.fetch("http://127.0.0.1:9/").await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn fetch_follows_redirects() {
        let mut server = Server::new_async().await;
        let target = server
            .mock("GET", "/moved")
            .with_status(200)
            .with_body("landed")
            .create_async()
            .await;
        let redirect = server
            .mock("GET", "/")
            .with_status(302)
            .with_header("location", &format!("{}/moved", server.url()))
            .create_async()
            .await;

        let fetcher = HttpPageFetcher::default();
        let body = fetcher.fetch(&server.url()).await.unwrap();

        redirect.assert_async().await;
        target.assert_async().await;
        assert_eq!(body, "landed");
    }
}
