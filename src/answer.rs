//! Answer extraction from a fetched result page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::{Result, SearchError};

// Result-page structure: one block per answer, with the rendered body in a
// post-text region and code in the first preformatted block inside it.
// Markup owned by the source site; update here when it shifts.
const ANSWER_SELECTOR: &str = ".answer";
const BODY_SELECTOR: &str = ".post-text";
const CODE_SELECTOR: &str = "pre";
const ACCEPTED_CLASS: &str = "accepted-answer";

static LANG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lang-(\w+)").expect("valid regex"));

/// One extracted answer block from a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Whether the source site marks this answer as accepted.
    pub is_accepted: bool,
    /// Programming language detected from the code region's class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Text of the first code region; empty when the answer has none.
    pub code: String,
    /// Body converted to readable markdown. Absent in code-only mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Raw body markup. Absent in code-only mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// Extracts answer blocks from a result page.
///
/// Answers come back in document order, truncated to at most `limit`.
/// With `code_only` set, the rendered-text and raw-markup fields are
/// skipped entirely, which avoids the markup-to-markdown conversion.
pub fn extract_answers(html: &str, code_only: bool, limit: usize) -> Result<Vec<Answer>> {
    let document = Html::parse_document(html);
    let answer_selector = parse_selector(ANSWER_SELECTOR)?;
    let body_selector = parse_selector(BODY_SELECTOR)?;
    let code_selector = parse_selector(CODE_SELECTOR)?;

    let answers = document
        .select(&answer_selector)
        .map(|block| {
            let is_accepted = block
                .value()
                .attr("class")
                .map(|class| class.contains(ACCEPTED_CLASS))
                .unwrap_or(false);

            let body = block.select(&body_selector).next();
            let code_region = body.and_then(|b| b.select(&code_selector).next());

            let language = code_region.and_then(|el| detect_language(el));
            let code = code_region
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default();

            if code_only {
                Answer {
                    is_accepted,
                    language,
                    code,
                    text: None,
                    html: None,
                }
            } else {
                let body_html = body.map(|el| el.inner_html()).unwrap_or_default();
                Answer {
                    is_accepted,
                    language,
                    code,
                    text: Some(html2md::parse_html(&body_html)),
                    html: Some(body_html),
                }
            }
        })
        .take(limit)
        .collect();

    Ok(answers)
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| SearchError::Parse(format!("{:?}", e)))
}

/// Reads the language from a `lang-<token>` class on the code region.
fn detect_language(code_region: ElementRef<'_>) -> Option<String> {
    let class = code_region.value().attr("class")?;
    LANG_TOKEN
        .captures(class)
        .map(|caps| caps[1].to_string())
}
