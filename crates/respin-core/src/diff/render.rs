//! Unified-format renderer for line diffs.

use crate::diff::engine::compute_diff;
use crate::diff::model::{LineChange, TextDiff};

/// Label for the old side of the default unified rendering.
pub const OLD_LABEL: &str = "Old Version";

/// Label for the new side of the default unified rendering.
pub const NEW_LABEL: &str = "New Version";

/// Format one side of a hunk range header.
///
/// Unified convention: a count of 1 is omitted; a count of 0 keeps the
/// line-before start recorded in the hunk.
fn range(start: usize, len: usize) -> String {
    if len == 1 {
        start.to_string()
    } else {
        format!("{},{}", start, len)
    }
}

/// Render a [`TextDiff`] in unified format.
///
/// Produces `---`/`+++` file headers, `@@` hunk headers, and
/// ` `/`-`/`+` prefixed body lines joined by newlines, with no trailing
/// newline. An empty diff renders as the empty string; callers wanting an
/// explicit "no differences" indicator print their own.
pub fn render_unified(diff: &TextDiff, from_label: &str, to_label: &str) -> String {
    if diff.is_empty() {
        return String::new();
    }

    let mut out = Vec::new();
    out.push(format!("--- {}", from_label));
    out.push(format!("+++ {}", to_label));
    for hunk in &diff.hunks {
        out.push(format!(
            "@@ -{} +{} @@",
            range(hunk.old_start, hunk.old_len),
            range(hunk.new_start, hunk.new_len),
        ));
        for line in &hunk.lines {
            match line {
                LineChange::Context(text) => out.push(format!(" {}", text)),
                LineChange::Removed(text) => out.push(format!("-{}", text)),
                LineChange::Added(text) => out.push(format!("+{}", text)),
            }
        }
    }
    out.join("\n")
}

/// Compute and render a unified diff between two text blocks in one step,
/// using the stock "Old Version" / "New Version" labels.
pub fn unified_diff(old: &str, new: &str) -> String {
    render_unified(&compute_diff(old, new), OLD_LABEL, NEW_LABEL)
}
