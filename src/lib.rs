//! # qa-search
//!
//! A search-and-extract library for answering programming questions from
//! the command line: search a web engine restricted to a Q&A site, fetch
//! the top matching pages, and pull out structured answers (rendered text
//! or code) with an accepted-answer heuristic.
//!
//! The pipeline is engine-agnostic: each supported engine contributes a
//! search URL template and a results-page link selector, and everything
//! downstream works on parsed HTML alone. Transport is injected behind
//! the [`PageFetcher`] trait.
//!
//! ## Example
//!
//! ```rust,no_run
//! use qa_search::{Pipeline, SearchOutput, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = Pipeline::new();
//!     let query = SearchQuery::new("reverse a list").with_results(3);
//!
//!     if let SearchOutput::Results(results) = pipeline.run(query).await? {
//!         for result in results {
//!             println!("{}: {}", result.title, result.url);
//!             for answer in result.answers {
//!                 println!("{}", answer.code);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod answer;
mod engine;
mod error;
mod fetcher;
mod fetcher_http;
mod link;
mod pipeline;
mod query;
mod result;

pub use answer::{extract_answers, Answer};
pub use engine::{EngineSpec, SearchEngine};
pub use error::{Result, SearchError};
pub use fetcher::PageFetcher;
pub use fetcher_http::HttpFetcher;
pub use link::{extract_links, Link};
pub use pipeline::Pipeline;
pub use query::SearchQuery;
pub use result::{SearchOutput, SearchResult};
