//! Respin Engine - workflow orchestration
//!
//! Drives the fetch → spin → edit → diff workflow over the version store.
//! All collaborators (fetching, transformation, operator prompting) are
//! injected behind traits so the workflow is testable without a network or
//! a terminal.

pub mod collaborators;
pub mod workflow;

pub use collaborators::{FetchError, Fetcher, Prompter};
pub use workflow::{run_workflow, WorkflowError, WorkflowOutcome};
