//! Result-link extraction from a search-results page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::{Result, SearchError};

// Search engines frame result titles as "<site> - <title>" or
// "<title> - <site>"; both wrappers are stripped, once each.
static FRAMING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^-]*? - ").expect("valid regex"));
static FRAMING_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" - [^-]*?$").expect("valid regex"));
static LEADING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+) - ").expect("valid regex"));

/// A candidate result page extracted from a search-results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Title with engine/site framing stripped.
    pub title: String,
    /// Leading category tag, when the title text carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Link target, taken from the anchor verbatim.
    pub url: String,
}

/// Extracts result links from a search-results page.
///
/// Matches `selector` against the document and maps each anchor, in
/// document order, to a [`Link`], truncating to at most `limit` entries.
/// An empty match set yields an empty vector.
pub fn extract_links(html: &str, selector: &str, limit: usize) -> Result<Vec<Link>> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse(selector)
        .map_err(|e| SearchError::Parse(format!("{:?}", e)))?;

    let links = document
        .select(&link_selector)
        .map(|element| {
            let text = element.text().collect::<String>();
            Link {
                title: strip_framing(&text),
                tag: leading_tag(&text),
                url: element.value().attr("href").unwrap_or_default().to_string(),
            }
        })
        .take(limit)
        .collect();

    Ok(links)
}

/// Strips one leading `"<token> - "` prefix and one trailing
/// `" - <token>"` suffix from the trimmed text.
fn strip_framing(text: &str) -> String {
    let trimmed = text.trim();
    let without_prefix = FRAMING_PREFIX.replace(trimmed, "");
    FRAMING_SUFFIX.replace(&without_prefix, "").into_owned()
}

/// Returns the leading `"<word> - "` token of the trimmed text, if any.
fn leading_tag(text: &str) -> Option<String> {
    LEADING_TAG
        .captures(text.trim())
        .map(|caps| caps[1].to_string())
}
