//! Search query representation.

use serde::{Deserialize, Serialize};

use crate::SearchEngine;

/// A single search-and-extract request.
///
/// Immutable input to one pipeline run. `results` and `answers` are kept
/// at 1 or above; `result` and `answer` are zero-based indices into the
/// extracted sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub query: String,
    /// Search engine to query.
    pub engine: SearchEngine,
    /// Site the search is restricted to.
    pub site: String,
    /// Maximum number of result links to extract.
    pub results: usize,
    /// Maximum number of answers to extract per result page.
    pub answers: usize,
    /// Index of a single result to select.
    pub result: Option<usize>,
    /// Index of a single answer to select.
    pub answer: Option<usize>,
    /// Extract code only, skipping markup-to-text conversion.
    pub code_only: bool,
    /// Return links without fetching result pages.
    pub results_only: bool,
}

impl SearchQuery {
    /// Creates a new query with default options: Google, stackoverflow.com,
    /// one result, one answer.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            engine: SearchEngine::Google,
            site: "stackoverflow.com".to_string(),
            results: 1,
            answers: 1,
            result: None,
            answer: None,
            code_only: false,
            results_only: false,
        }
    }

    /// Sets the search engine.
    pub fn with_engine(mut self, engine: SearchEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the site restriction.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Sets the maximum number of result links (at least 1).
    pub fn with_results(mut self, results: usize) -> Self {
        self.results = results.max(1);
        self
    }

    /// Sets the maximum number of answers per result (at least 1).
    pub fn with_answers(mut self, answers: usize) -> Self {
        self.answers = answers.max(1);
        self
    }

    /// Selects a single result by zero-based index.
    pub fn with_result(mut self, index: usize) -> Self {
        self.result = Some(index);
        self
    }

    /// Selects a single answer by zero-based index.
    pub fn with_answer(mut self, index: usize) -> Self {
        self.answer = Some(index);
        self
    }

    /// Enables code-only extraction.
    pub fn code_only(mut self, code_only: bool) -> Self {
        self.code_only = code_only;
        self
    }

    /// Enables links-only mode (no result-page fetches).
    pub fn results_only(mut self, results_only: bool) -> Self {
        self.results_only = results_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_new() {
        let query = SearchQuery::new("reverse a list");
        assert_eq!(query.query, "reverse a list");
        assert_eq!(query.engine, SearchEngine::Google);
        assert_eq!(query.site, "stackoverflow.com");
        assert_eq!(query.results, 1);
        assert_eq!(query.answers, 1);
        assert!(query.result.is_none());
        assert!(query.answer.is_none());
        assert!(!query.code_only);
        assert!(!query.results_only);
    }

    #[test]
    fn test_search_query_with_engine() {
        let query = SearchQuery::new("test").with_engine(SearchEngine::Duck);
        assert_eq!(query.engine, SearchEngine::Duck);
    }

    #[test]
    fn test_search_query_with_site() {
        let query = SearchQuery::new("test").with_site("unix.stackexchange.com");
        assert_eq!(query.site, "unix.stackexchange.com");
    }

    #[test]
    fn test_search_query_with_results() {
        let query = SearchQuery::new("test").with_results(5);
        assert_eq!(query.results, 5);
    }

    #[test]
    fn test_search_query_results_clamped_to_one() {
        let query = SearchQuery::new("test").with_results(0);
        assert_eq!(query.results, 1);
    }

    #[test]
    fn test_search_query_answers_clamped_to_one() {
        let query = SearchQuery::new("test").with_answers(0);
        assert_eq!(query.answers, 1);
    }

    #[test]
    fn test_search_query_with_indices() {
        let query = SearchQuery::new("test").with_result(2).with_answer(0);
        assert_eq!(query.result, Some(2));
        assert_eq!(query.answer, Some(0));
    }

    #[test]
    fn test_search_query_builder_chain() {
        let query = SearchQuery::new("reverse a list")
            .with_engine(SearchEngine::Bing)
            .with_site("superuser.com")
            .with_results(3)
            .with_answers(2)
            .code_only(true)
            .results_only(true);

        assert_eq!(query.engine, SearchEngine::Bing);
        assert_eq!(query.site, "superuser.com");
        assert_eq!(query.results, 3);
        assert_eq!(query.answers, 2);
        assert!(query.code_only);
        assert!(query.results_only);
    }

    #[test]
    fn test_search_query_serialization() {
        let query = SearchQuery::new("test");
        let json = serde_json::to_string(&query).unwrap();
        assert!(json.contains("\"query\":\"test\""));
        assert!(json.contains("\"engine\":\"google\""));
    }

    #[test]
    fn test_search_query_deserialization() {
        let json = r#"{"query":"test","engine":"duck","site":"stackoverflow.com","results":2,"answers":1,"result":null,"answer":null,"code_only":false,"results_only":false}"#;
        let query: SearchQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.query, "test");
        assert_eq!(query.engine, SearchEngine::Duck);
        assert_eq!(query.results, 2);
    }
}
