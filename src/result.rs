//! Search result and output types.

use serde::{Deserialize, Serialize};

use crate::{Answer, Link};

/// One selected link together with the answers extracted from its page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title, from the link.
    pub title: String,
    /// Result page URL.
    pub url: String,
    /// Leading category tag, when the link carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Extracted answers, in document order.
    pub answers: Vec<Answer>,
}

impl SearchResult {
    /// Assembles a result from its link and extracted answers.
    pub fn new(link: Link, answers: Vec<Answer>) -> Self {
        Self {
            title: link.title,
            url: link.url,
            tag: link.tag,
            answers,
        }
    }
}

/// Output of one pipeline run.
///
/// A full run produces `Results`; links-only mode produces `Links`, or
/// `Link` when a single result index was requested. `Link(None)` is the
/// degraded shape of an out-of-range selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchOutput {
    /// Results with extracted answers, in selected-link order.
    Results(Vec<SearchResult>),
    /// All extracted links, without answer extraction.
    Links(Vec<Link>),
    /// A single selected link, absent when the index was out of range.
    Link(Option<Link>),
}

impl SearchOutput {
    /// Returns true when the run produced nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            SearchOutput::Results(results) => results.is_empty(),
            SearchOutput::Links(links) => links.is_empty(),
            SearchOutput::Link(link) => link.is_none(),
        }
    }
}
