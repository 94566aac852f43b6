//! Line diff computation engine.
//!
//! The core entry point is [`compute_diff`], which accepts two text blocks
//! and produces a [`TextDiff`]. The edit script is computed with the classic
//! longest-common-subsequence dynamic program over lines; hunks group
//! changed lines with up to [`CONTEXT`] surrounding context lines.

use crate::diff::model::{DiffClassification, Hunk, LineChange, TextDiff};

/// Number of context lines carried on each side of a change.
pub const CONTEXT: usize = 3;

/// One step of the raw edit script, before hunk grouping.
#[derive(Debug, Clone, PartialEq)]
enum Op<'a> {
    Context(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

/// Compute the LCS-based edit script transforming `old` lines into `new` lines.
///
/// Within each run of changes, removals are emitted before additions so the
/// script renders in the conventional unified order.
fn edit_script<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<Op<'a>> {
    let n = old.len();
    let m = new.len();

    // dp[i][j] = LCS length of old[i..] and new[j..]
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if old[i] == new[j] {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    // Walk the table forward, buffering each change run so removals
    // precede additions.
    let mut ops = Vec::with_capacity(n.max(m));
    let mut removed: Vec<Op<'a>> = Vec::new();
    let mut added: Vec<Op<'a>> = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < n || j < m {
        if i < n && j < m && old[i] == new[j] {
            ops.append(&mut removed);
            ops.append(&mut added);
            ops.push(Op::Context(old[i]));
            i += 1;
            j += 1;
        } else if j < m && (i == n || dp[i][j + 1] >= dp[i + 1][j]) {
            added.push(Op::Added(new[j]));
            j += 1;
        } else {
            removed.push(Op::Removed(old[i]));
            i += 1;
        }
    }
    ops.append(&mut removed);
    ops.append(&mut added);
    ops
}

/// Group an edit script into hunks with surrounding context.
fn group_hunks(ops: &[Op<'_>]) -> Vec<Hunk> {
    // Mark every change plus CONTEXT ops on each side as kept; adjacent
    // kept regions merge into a single hunk.
    let mut keep = vec![false; ops.len()];
    for (idx, op) in ops.iter().enumerate() {
        if !matches!(op, Op::Context(_)) {
            let lo = idx.saturating_sub(CONTEXT);
            let hi = (idx + CONTEXT).min(ops.len().saturating_sub(1));
            for flag in &mut keep[lo..=hi] {
                *flag = true;
            }
        }
    }

    let mut hunks = Vec::new();
    let mut old_no = 0usize;
    let mut new_no = 0usize;
    let mut idx = 0;
    while idx < ops.len() {
        if !keep[idx] {
            // Ops outside kept regions are always context lines.
            old_no += 1;
            new_no += 1;
            idx += 1;
            continue;
        }

        let old_consumed = old_no;
        let new_consumed = new_no;
        let mut lines = Vec::new();
        let mut old_len = 0usize;
        let mut new_len = 0usize;
        while idx < ops.len() && keep[idx] {
            match &ops[idx] {
                Op::Context(line) => {
                    lines.push(LineChange::Context(line.to_string()));
                    old_len += 1;
                    new_len += 1;
                    old_no += 1;
                    new_no += 1;
                }
                Op::Removed(line) => {
                    lines.push(LineChange::Removed(line.to_string()));
                    old_len += 1;
                    old_no += 1;
                }
                Op::Added(line) => {
                    lines.push(LineChange::Added(line.to_string()));
                    new_len += 1;
                    new_no += 1;
                }
            }
            idx += 1;
        }

        // Zero-length sides name the line before the change point.
        let old_start = if old_len == 0 {
            old_consumed
        } else {
            old_consumed + 1
        };
        let new_start = if new_len == 0 {
            new_consumed
        } else {
            new_consumed + 1
        };
        hunks.push(Hunk {
            old_start,
            old_len,
            new_start,
            new_len,
            lines,
        });
    }
    hunks
}

/// Compute a structured, deterministic line diff between two text blocks.
///
/// Pure and side-effect-free. Splitting follows `str::lines`: an empty
/// string yields zero lines and a trailing line without a terminating
/// newline is treated as a final line. Identical inputs short-circuit to an
/// `Identical` classification with no hunks.
pub fn compute_diff(old: &str, new: &str) -> TextDiff {
    if old == new {
        return TextDiff {
            classification: DiffClassification::Identical,
            hunks: Vec::new(),
        };
    }

    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let ops = edit_script(&old_lines, &new_lines);
    let hunks = group_hunks(&ops);

    let classification = if hunks.is_empty() {
        DiffClassification::NoLineChange
    } else {
        DiffClassification::Changed
    };
    TextDiff {
        classification,
        hunks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Apply a diff's hunks to the old lines, reconstructing the new lines.
    fn apply(old: &str, diff: &TextDiff) -> Vec<String> {
        let old_lines: Vec<&str> = old.lines().collect();
        let mut out = Vec::new();
        let mut cursor = 0usize;
        for hunk in &diff.hunks {
            let hunk_first_old = if hunk.old_len == 0 {
                hunk.old_start
            } else {
                hunk.old_start - 1
            };
            while cursor < hunk_first_old {
                out.push(old_lines[cursor].to_string());
                cursor += 1;
            }
            for line in &hunk.lines {
                match line {
                    LineChange::Context(text) => {
                        assert_eq!(old_lines[cursor], text, "context mismatch");
                        out.push(text.clone());
                        cursor += 1;
                    }
                    LineChange::Removed(text) => {
                        assert_eq!(old_lines[cursor], text, "removal mismatch");
                        cursor += 1;
                    }
                    LineChange::Added(text) => out.push(text.clone()),
                }
            }
        }
        while cursor < old_lines.len() {
            out.push(old_lines[cursor].to_string());
            cursor += 1;
        }
        out
    }

    #[test]
    fn test_identical_inputs_empty_diff() {
        let diff = compute_diff("a\nb\nc", "a\nb\nc");
        assert_eq!(diff.classification, DiffClassification::Identical);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_trailing_newline_only_is_no_line_change() {
        let diff = compute_diff("a\nb", "a\nb\n");
        assert_eq!(diff.classification, DiffClassification::NoLineChange);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_empty_old_all_additions() {
        let diff = compute_diff("", "a\nb");
        assert_eq!(diff.classification, DiffClassification::Changed);
        assert_eq!(diff.hunks.len(), 1);
        let hunk = &diff.hunks[0];
        assert_eq!(hunk.old_start, 0);
        assert_eq!(hunk.old_len, 0);
        assert_eq!(hunk.new_start, 1);
        assert_eq!(hunk.new_len, 2);
        assert_eq!(
            hunk.lines,
            vec![
                LineChange::Added("a".to_string()),
                LineChange::Added("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_new_all_deletions() {
        let diff = compute_diff("a\nb", "");
        assert_eq!(diff.hunks.len(), 1);
        assert_eq!(
            diff.hunks[0].lines,
            vec![
                LineChange::Removed("a".to_string()),
                LineChange::Removed("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_line_replacement() {
        let diff = compute_diff("Hello world", "dlrow olleH");
        assert_eq!(diff.hunks.len(), 1);
        assert_eq!(
            diff.hunks[0].lines,
            vec![
                LineChange::Removed("Hello world".to_string()),
                LineChange::Added("dlrow olleH".to_string()),
            ]
        );
    }

    #[test]
    fn test_removals_precede_additions_within_a_run() {
        let diff = compute_diff("a\nx\ny\nd", "a\np\nq\nd");
        let lines = &diff.hunks[0].lines;
        assert_eq!(
            lines,
            &vec![
                LineChange::Context("a".to_string()),
                LineChange::Removed("x".to_string()),
                LineChange::Removed("y".to_string()),
                LineChange::Added("p".to_string()),
                LineChange::Added("q".to_string()),
                LineChange::Context("d".to_string()),
            ]
        );
    }

    #[test]
    fn test_distant_changes_split_into_hunks() {
        let old: Vec<String> = (0..30).map(|i| format!("line {}", i)).collect();
        let mut new = old.clone();
        new[2] = "changed near top".to_string();
        new[27] = "changed near bottom".to_string();

        let diff = compute_diff(&old.join("\n"), &new.join("\n"));
        assert_eq!(diff.hunks.len(), 2);
        assert_eq!(apply(&old.join("\n"), &diff), new);
    }

    #[test]
    fn test_nearby_changes_merge_into_one_hunk() {
        let old = "a\nb\nc\nd\ne\nf\ng";
        let new = "a\nB\nc\nd\ne\nF\ng";
        let diff = compute_diff(old, new);
        assert_eq!(diff.hunks.len(), 1);
    }

    #[test]
    fn test_hunk_starts_are_one_based() {
        let old = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj";
        let new = "a\nb\nc\nd\ne\nf\ng\nh\nI\nj";
        let diff = compute_diff(old, new);
        assert_eq!(diff.hunks.len(), 1);
        // Change at line 9, context starts at line 6.
        assert_eq!(diff.hunks[0].old_start, 6);
        assert_eq!(diff.hunks[0].new_start, 6);
        assert_eq!(diff.hunks[0].old_len, 5);
        assert_eq!(diff.hunks[0].new_len, 5);
    }

    #[test]
    fn test_apply_reconstructs_new_lines() {
        let old = "the quick\nbrown fox\njumps over\nthe lazy dog";
        let new = "the quick\nred fox\njumps over\na sleeping dog\nat noon";
        let diff = compute_diff(old, new);
        let reconstructed = apply(old, &diff);
        let expected: Vec<String> = new.lines().map(str::to_string).collect();
        assert_eq!(reconstructed, expected);
    }

    #[test]
    fn test_unicode_content() {
        let diff = compute_diff("héllo wörld", "wörld héllo");
        assert_eq!(diff.classification, DiffClassification::Changed);
        assert_eq!(diff.hunks.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_self_diff_is_identical(text in ".*") {
            let diff = compute_diff(&text, &text);
            prop_assert_eq!(diff.classification, DiffClassification::Identical);
            prop_assert!(diff.is_empty());
        }

        #[test]
        fn prop_apply_reconstructs_new(
            old in prop::collection::vec("[a-d]{0,3}", 0..12),
            new in prop::collection::vec("[a-d]{0,3}", 0..12),
        ) {
            let old_text = old.join("\n");
            let new_text = new.join("\n");
            let diff = compute_diff(&old_text, &new_text);
            let reconstructed = apply(&old_text, &diff);
            let expected: Vec<String> =
                new_text.lines().map(str::to_string).collect();
            prop_assert_eq!(reconstructed, expected);
        }
    }
}
