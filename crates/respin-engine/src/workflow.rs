//! The fetch → spin → edit → diff workflow.

use respin_core::diff::unified_diff;
use respin_core::errors::RespinError;
use respin_core::model::VersionId;
use respin_core::store::VersionStore;
use respin_transform::{Transformer, DEFAULT_STYLE};
use thiserror::Error;
use tracing::info;

use crate::collaborators::{FetchError, Fetcher, Prompter};

/// Maximum characters shown in a stage preview.
pub const PREVIEW_CHARS: usize = 500;

/// Errors surfaced by the workflow.
///
/// Collaborator failures pass through untranslated so the caller can tell
/// a network problem from a core lookup failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    /// The fetch collaborator failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A core version operation failed
    #[error(transparent)]
    Core(#[from] RespinError),
}

/// The ids and diff produced by one workflow run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowOutcome {
    /// Version holding the fetched article text (author "system")
    pub fetched_id: VersionId,
    /// Version holding the spun text (author "AI")
    pub spun_id: VersionId,
    /// Version holding the operator's text (author "editor")
    pub edited_id: VersionId,
    /// Unified diff between the spun and edited versions; empty when the
    /// operator kept the spun text unchanged
    pub diff: String,
}

/// Truncate `content` to at most `max_chars` characters for display.
///
/// Operates on character boundaries, so multibyte text never splits a
/// code point. Appends an ellipsis marker when truncation occurred.
pub fn preview(content: &str, max_chars: usize) -> String {
    let truncated: String = content.chars().take(max_chars).collect();
    if truncated.len() < content.len() {
        format!("{} ...", truncated)
    } else {
        truncated
    }
}

/// Run one interactive editing session against the given store.
///
/// Fetches article text (step 1), spins it (step 2), offers it for human
/// editing (step 3), and diffs the spun text against the edited text
/// (step 4). Each stage's text is appended to `store` as a new immutable
/// version. `url` and `style` skip their prompts when provided.
///
/// # Errors
///
/// Returns `WorkflowError::Fetch` when the fetch collaborator fails; the
/// store is left untouched in that case.
pub fn run_workflow(
    store: &mut VersionStore,
    fetcher: &dyn Fetcher,
    transformer: &dyn Transformer,
    prompter: &mut dyn Prompter,
    url: Option<&str>,
    style: Option<&str>,
) -> Result<WorkflowOutcome, WorkflowError> {
    let url = match url {
        Some(u) => u.trim().to_string(),
        None => prompter.prompt_url().trim().to_string(),
    };

    let original = fetcher.fetch(&url)?;
    prompter.show_preview("Original Content Preview", &preview(&original, PREVIEW_CHARS));
    let fetched_id = store.create(original.clone(), "system", "fetched");
    info!(version_id = %fetched_id, url = %url, "fetched article stored");

    let style = match style {
        Some(s) => s.trim().to_string(),
        None => prompter.prompt_style().trim().to_string(),
    };
    let style = if style.is_empty() {
        DEFAULT_STYLE.to_string()
    } else {
        style
    };

    let spun = transformer.transform(&original, &style);
    prompter.show_preview("AI-Spun Content Preview", &preview(&spun, PREVIEW_CHARS));
    let spun_id = store.create(spun.clone(), "AI", "spun");
    info!(version_id = %spun_id, style = %style, "spun content stored");

    let edited = prompter.prompt_edit().unwrap_or_else(|| spun.clone());
    let edited_id = store.create(edited, "editor", "edited");
    info!(version_id = %edited_id, "edited content stored");

    let spun_version = store.require(&spun_id)?;
    let edited_version = store.require(&edited_id)?;
    let diff = unified_diff(&spun_version.content, &edited_version.content);

    Ok(WorkflowOutcome {
        fetched_id,
        spun_id,
        edited_id,
        diff,
    })
}
