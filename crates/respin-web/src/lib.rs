//! Respin Web - article fetch collaborator
//!
//! Implements the engine's [`Fetcher`] seam over a blocking HTTP client:
//! GET the page, pull the text out of its `<p>` elements, and hand back
//! plain article text. Retry and backoff policy is out of scope.

mod extract;
mod fetch;

pub use extract::extract_paragraphs;
pub use fetch::HttpFetcher;

pub use respin_engine::FetchError;
pub use respin_engine::Fetcher;
