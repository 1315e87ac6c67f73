//! Search-and-extract orchestration.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::fetcher::PageFetcher;
use crate::fetcher_http::HttpFetcher;
use crate::{
    extract_answers, extract_links, Link, Result, SearchError, SearchOutput, SearchQuery,
    SearchResult,
};

/// Pipeline that turns a [`SearchQuery`] into extracted results.
///
/// One run resolves the engine's search URL, fetches the results page,
/// extracts candidate links, then fetches each selected result page
/// concurrently and extracts its answers. In links-only mode the
/// per-page fetches are skipped entirely.
pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
}

impl Pipeline {
    /// Creates a pipeline backed by the default HTTP fetcher.
    pub fn new() -> Self {
        Self {
            fetcher: Arc::new(HttpFetcher::new()),
        }
    }

    /// Creates a pipeline with a custom page fetcher.
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Runs the full search-and-extract pipeline.
    ///
    /// An out-of-range `result` or `answer` index degrades to an absent
    /// selection rather than an error. A failed page fetch aborts the
    /// whole run.
    pub async fn run(&self, query: SearchQuery) -> Result<SearchOutput> {
        if query.query.trim().is_empty() {
            return Err(SearchError::InvalidQuery("Query cannot be empty".into()));
        }

        let spec = query.engine.resolve(&query.query, &query.site);
        debug!("Resolved {} search URL: {}", query.engine, spec.search_url);

        let results_page = self.fetcher.fetch(&spec.search_url).await?;
        let links = extract_links(&results_page, spec.link_selector, query.results)?;
        debug!("Extracted {} links", links.len());

        // None = no index requested; Some(None) = index out of range.
        let selected = query.result.map(|index| links.get(index).cloned());

        if links.is_empty() {
            return Ok(if query.results_only {
                SearchOutput::Link(None)
            } else {
                SearchOutput::Results(Vec::new())
            });
        }

        if query.results_only {
            return Ok(match selected {
                Some(link) => SearchOutput::Link(link),
                None => SearchOutput::Links(links),
            });
        }

        let chosen: Vec<Link> = match selected {
            Some(link) => link.into_iter().collect(),
            None => links,
        };

        let code_only = query.code_only;
        let answer_limit = query.answers;
        let answer_index = query.answer;

        let fetches = chosen.into_iter().map(|link| {
            let fetcher = Arc::clone(&self.fetcher);
            async move {
                let page = fetcher.fetch(&link.url).await?;
                let mut answers = extract_answers(&page, code_only, answer_limit)?;
                if let Some(index) = answer_index {
                    answers = answers.get(index).cloned().into_iter().collect();
                }
                Ok::<_, SearchError>(SearchResult::new(link, answers))
            }
        });

        let results = try_join_all(fetches).await?;
        debug!("Assembled {} results", results.len());

        Ok(SearchOutput::Results(results))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
