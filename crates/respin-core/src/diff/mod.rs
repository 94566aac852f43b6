//! Line diff engine.
//!
//! Compares two text blocks line by line and produces a structured,
//! deterministic diff suitable for unified-format rendering.
//!
//! ## Entry point
//!
//! ```
//! use respin_core::diff::{compute_diff, render_unified};
//!
//! let diff = compute_diff("a\nb", "a\nc");
//! let text = render_unified(&diff, "Old Version", "New Version");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical output.
//! - **Minimality**: the edit script is LCS-based; applying the hunks to
//!   the old lines reconstructs the new lines exactly.
//! - **Line convention**: splitting follows `str::lines` - an empty string
//!   splits into zero lines, and a trailing line without a terminating
//!   newline is treated as a final line.

pub mod engine;
pub mod model;
pub mod render;

pub use engine::compute_diff;
pub use model::{DiffClassification, Hunk, LineChange, TextDiff};
pub use render::{render_unified, unified_diff};
