//! Page fetcher abstraction for retrieving HTML content.

use async_trait::async_trait;

use crate::Result;

/// Trait for fetching the full HTML content of a URL.
///
/// The pipeline only depends on this capability; all transport concerns
/// (proxy endpoint, user-agent rotation, TLS) are set at construction
/// time by the implementation. `fetch` is a simple URL-in, HTML-out
/// interface, and callers parse the returned markup themselves.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the HTML content of the given URL.
    async fn fetch(&self, url: &str) -> Result<String>;
}
