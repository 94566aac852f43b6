//! Respin Core - version ledger and diff kernel
//!
//! This crate provides the foundational data structures and operations for
//! respin, including:
//! - Immutable `Version` snapshots with identity, timestamp, author, and status
//! - An append-only in-memory `VersionStore` with lookup by identity
//! - A deterministic LCS-based line diff engine with unified-format rendering
//! - The canonical error taxonomy and logging facility
//!
//! The crate performs no I/O. Fetching, transformation, and prompting are
//! external collaborators wired in by the engine and CLI crates.

pub mod diff;
pub mod errors;
pub mod logging;
pub mod model;
pub mod store;

// Re-export commonly used types
pub use diff::{compute_diff, render_unified, unified_diff, TextDiff};
pub use errors::{RespinError, Result};
pub use model::{Version, VersionId};
pub use store::VersionStore;
