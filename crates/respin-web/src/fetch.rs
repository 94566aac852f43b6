//! Blocking HTTP fetcher.

use respin_engine::{FetchError, Fetcher};
use tracing::{debug, info};

use crate::extract::extract_paragraphs;

/// Fetch collaborator backed by a blocking `reqwest` client.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client configuration.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

/// Map a transport error into the engine's collaborator-agnostic taxonomy.
fn map_request_error(url: &str, err: reqwest::Error) -> FetchError {
    match err.status() {
        Some(status) => FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        },
        None => FetchError::Request {
            url: url.to_string(),
            message: err.to_string(),
        },
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "fetching article");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| map_request_error(url, e))?;
        let response = response
            .error_for_status()
            .map_err(|e| map_request_error(url, e))?;
        let body = response.text().map_err(|e| map_request_error(url, e))?;

        let text = extract_paragraphs(&body);
        if text.is_empty() {
            return Err(FetchError::EmptyDocument {
                url: url.to_string(),
            });
        }
        info!(url = %url, chars = text.chars().count(), "article text extracted");
        Ok(text)
    }
}
