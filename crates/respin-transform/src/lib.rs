//! Content transformation seam for respin.
//!
//! The transformer is an opaque external capability: given text and a style
//! label it returns rewritten text. Real rewriting backends implement
//! [`Transformer`]; the stock [`ReverseSpin`] is a placeholder that tags and
//! character-reverses its input so the surrounding workflow can be exercised
//! without a rewriting service.

use tracing::debug;

/// Style label used when the operator does not specify one.
pub const DEFAULT_STYLE: &str = "neutral";

/// An opaque content-rewriting capability.
///
/// Implementations are free to do anything with the input; the version and
/// diff core never inspects how the transformation was produced.
pub trait Transformer {
    /// Produce a transformed rendition of `content` in the given style.
    fn transform(&self, content: &str, style: &str) -> String;
}

/// Placeholder transformer: prefixes a style tag and reverses the text.
///
/// Stands in for a real rewriting backend during development and testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseSpin;

impl Transformer for ReverseSpin {
    fn transform(&self, content: &str, style: &str) -> String {
        debug!(style = %style, chars = content.chars().count(), "spinning content");
        let reversed: String = content.chars().rev().collect();
        format!("[AI-{}]: {}", style, reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_spin_tags_and_reverses() {
        let spun = ReverseSpin.transform("Hello world", "neutral");
        assert_eq!(spun, "[AI-neutral]: dlrow olleH");
    }

    #[test]
    fn test_reverse_spin_empty_content() {
        let spun = ReverseSpin.transform("", "formal");
        assert_eq!(spun, "[AI-formal]: ");
    }

    #[test]
    fn test_reverse_spin_handles_multibyte_chars() {
        let spun = ReverseSpin.transform("héllo", "casual");
        assert_eq!(spun, "[AI-casual]: olléh");
    }
}
