//! HTTP-based page fetcher using reqwest.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::{Client, Proxy};
use tracing::debug;

use crate::fetcher::PageFetcher;
use crate::{Result, SearchError};

// Desktop browser user-agents, rotated per request. Search engines serve
// degraded or blocked pages to obvious non-browser agents.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.7; rv:11.0) Gecko/20100101 Firefox/11.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:22.0) Gecko/20100 101 Firefox/22.0",
    "Mozilla/5.0 (Windows NT 6.1; rv:11.0) Gecko/20100101 Firefox/11.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_4) AppleWebKit/536.5 (KHTML, like Gecko) Chrome/19.0.1084.46 Safari/536.5",
    "Mozilla/5.0 (Windows; Windows NT 6.1) AppleWebKit/536.5 (KHTML, like Gecko) Chrome/19.0.1084.46 Safari/536.5",
];

/// A page fetcher that uses plain HTTP requests via reqwest.
///
/// Rotates through a fixed set of browser user-agents, one per request,
/// and optionally routes all traffic through a proxy. Suitable for
/// server-rendered pages; JavaScript-rendered pages are out of scope.
pub struct HttpFetcher {
    client: Client,
    agent_index: AtomicUsize,
}

impl HttpFetcher {
    /// Creates a new `HttpFetcher` with default settings.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
            agent_index: AtomicUsize::new(0),
        }
    }

    /// Creates an `HttpFetcher` that routes requests through the given
    /// proxy URL (http, https, or socks5).
    pub fn with_proxy(proxy_url: &str) -> Result<Self> {
        let url = url::Url::parse(proxy_url)
            .map_err(|e| SearchError::Other(format!("Invalid proxy URL: {}", e)))?;
        match url.scheme() {
            "http" | "https" | "socks5" => {}
            scheme => {
                return Err(SearchError::Other(format!(
                    "Unsupported proxy protocol: {}",
                    scheme
                )))
            }
        }

        let proxy = Proxy::all(proxy_url)
            .map_err(|e| SearchError::Other(format!("Failed to create proxy: {}", e)))?;
        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| SearchError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            agent_index: AtomicUsize::new(0),
        })
    }

    /// Creates an `HttpFetcher` with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            agent_index: AtomicUsize::new(0),
        }
    }

    fn next_user_agent(&self) -> &'static str {
        let index = self.agent_index.fetch_add(1, Ordering::Relaxed);
        USER_AGENTS[index % USER_AGENTS.len()]
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let user_agent = self.next_user_agent();
        debug!("Fetching {} as {}", url, user_agent);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await?
            .error_for_status()?;

        let html = response.text().await?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_new() {
        let _fetcher = HttpFetcher::new();
    }

    #[test]
    fn test_http_fetcher_default() {
        let _fetcher = HttpFetcher::default();
    }

    #[test]
    fn test_http_fetcher_with_client() {
        let client = Client::builder().build().unwrap();
        let _fetcher = HttpFetcher::with_client(client);
    }

    #[test]
    fn test_http_fetcher_with_proxy_http() {
        let fetcher = HttpFetcher::with_proxy("http://127.0.0.1:8080");
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_http_fetcher_with_proxy_socks5() {
        let fetcher = HttpFetcher::with_proxy("socks5://127.0.0.1:1080");
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_http_fetcher_with_proxy_invalid_url() {
        let result = HttpFetcher::with_proxy("not a url");
        assert!(matches!(result, Err(SearchError::Other(_))));
    }

    #[test]
    fn test_http_fetcher_with_proxy_unsupported_scheme() {
        let result = HttpFetcher::with_proxy("ftp://127.0.0.1:2121");
        assert!(matches!(result, Err(SearchError::Other(_))));
    }

    #[test]
    fn test_user_agent_rotation_cycles() {
        let fetcher = HttpFetcher::new();
        let first = fetcher.next_user_agent();
        for _ in 1..USER_AGENTS.len() {
            assert_ne!(fetcher.next_user_agent(), first);
        }
        // Wraps around after a full cycle.
        assert_eq!(fetcher.next_user_agent(), first);
    }
}
