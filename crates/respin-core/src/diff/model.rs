//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Hunks and lines are stored in document order for deterministic
//! serialization and rendering.

use serde::{Deserialize, Serialize};

/// The top-level structured diff between two text blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextDiff {
    /// High-level classification of the diff
    pub classification: DiffClassification,
    /// Line-level hunks in document order; empty when the inputs are identical
    pub hunks: Vec<Hunk>,
}

impl TextDiff {
    /// True if the two inputs had no line-level differences
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }
}

/// High-level classification of the diff result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiffClassification {
    /// Both inputs are byte-identical
    Identical,
    /// The inputs differ only in line-terminator details (e.g. a trailing
    /// newline), so the line-level diff is empty
    NoLineChange,
    /// The inputs differ in at least one line
    Changed,
}

/// A contiguous group of changed lines with surrounding context.
///
/// Starts are 1-based line numbers of the first line the hunk covers on
/// that side. When a side's length is zero (pure insertion or deletion),
/// the start names the line *before* the change point, matching the
/// unified-format convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hunk {
    /// First covered line on the old side
    pub old_start: usize,
    /// Number of old-side lines the hunk covers (context + removals)
    pub old_len: usize,
    /// First covered line on the new side
    pub new_start: usize,
    /// Number of new-side lines the hunk covers (context + additions)
    pub new_len: usize,
    /// The hunk body in output order
    pub lines: Vec<LineChange>,
}

/// A single line of a hunk body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "line")]
pub enum LineChange {
    /// Line present on both sides
    Context(String),
    /// Line present only on the old side
    Removed(String),
    /// Line present only on the new side
    Added(String),
}
