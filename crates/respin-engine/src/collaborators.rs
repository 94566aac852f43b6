//! Collaborator contracts consumed by the workflow.
//!
//! The engine never performs I/O itself. Fetching, rewriting, and operator
//! interaction enter through these traits; the CLI wires in the production
//! implementations and tests substitute mocks.

use thiserror::Error;

/// Errors a fetch collaborator can surface.
///
/// Collaborator-agnostic: the HTTP client's own error types are mapped into
/// this taxonomy at the collaborator boundary so the engine stays free of
/// transport dependencies.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be completed (DNS, connect, read failure)
    #[error("Network error fetching {url}: {message}")]
    Request { url: String, message: String },

    /// The server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The document yielded no paragraph text after extraction
    #[error("No article text extracted from {url}")]
    EmptyDocument { url: String },
}

/// Fetch collaborator: URL in, extracted plain text out.
pub trait Fetcher {
    /// Fetch the document at `url` and return its extracted article text.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, non-success status,
    /// or an extraction that yields no text.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Interactive input collaborator.
///
/// Supplies the URL, style label, and optional edited text from an
/// operator, and displays stage previews along the way. A terminal
/// implementation lives in the CLI; tests script the answers.
pub trait Prompter {
    /// Ask for the URL to fetch.
    fn prompt_url(&mut self) -> String;

    /// Ask for the spin style label; empty answers fall back to the default.
    fn prompt_style(&mut self) -> String;

    /// Offer the spun content for editing. `None` keeps the spun text.
    fn prompt_edit(&mut self) -> Option<String>;

    /// Display a labelled preview of a workflow stage's content.
    fn show_preview(&mut self, label: &str, content: &str);
}
