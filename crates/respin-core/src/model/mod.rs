//! Core domain model for respin

mod version;

pub use version::{Version, VersionId, DEFAULT_AUTHOR, DEFAULT_STATUS};
