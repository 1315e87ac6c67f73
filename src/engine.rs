//! Search engine selection and query-URL resolution.
//!
//! Each engine variant carries its search URL root and the CSS selector
//! that locates result links on that engine's results page. The selectors
//! track markup that is outside this crate's control and changes without
//! notice; they live here as plain data so they can be updated without
//! touching the pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, SearchError};

const GOOGLE_SEARCH_ROOT: &str = "https://www.google.com/search";
const GOOGLE_LINK_SELECTOR: &str = ".r a";

const DUCK_SEARCH_ROOT: &str = "https://duckduckgo.com/html";
const DUCK_LINK_SELECTOR: &str = ".result__a";

const BING_SEARCH_ROOT: &str = "https://www.bing.com/search";
const BING_LINK_SELECTOR: &str = "#b_results li > *:first-child > a";

/// Supported search engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Duck,
    Bing,
}

impl SearchEngine {
    /// Resolves the engine into a concrete search URL and link selector
    /// for the given query and site restriction.
    ///
    /// The site restriction is always appended to the query.
    pub fn resolve(&self, query: &str, site: &str) -> EngineSpec {
        let (root, selector) = match self {
            SearchEngine::Google => (GOOGLE_SEARCH_ROOT, GOOGLE_LINK_SELECTOR),
            SearchEngine::Duck => (DUCK_SEARCH_ROOT, DUCK_LINK_SELECTOR),
            SearchEngine::Bing => (BING_SEARCH_ROOT, BING_LINK_SELECTOR),
        };

        let search_url = format!(
            "{}?q={}{}",
            root,
            urlencoding::encode(query),
            urlencoding::encode(&format!(" site:{}", site))
        );

        EngineSpec {
            search_url,
            link_selector: selector,
        }
    }
}

impl FromStr for SearchEngine {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(SearchEngine::Google),
            "duck" | "duckduckgo" | "ddg" => Ok(SearchEngine::Duck),
            "bing" => Ok(SearchEngine::Bing),
            other => Err(SearchError::UnsupportedEngine(other.to_string())),
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchEngine::Google => "google",
            SearchEngine::Duck => "duck",
            SearchEngine::Bing => "bing",
        };
        write!(f, "{}", name)
    }
}

/// Resolved search URL and results-page link selector for one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSpec {
    /// Fully-formed search-results URL including the site restriction.
    pub search_url: String,
    /// CSS selector locating result anchors on the results page.
    pub link_selector: &'static str,
}
