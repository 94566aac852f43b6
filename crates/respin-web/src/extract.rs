//! Paragraph text extraction from HTML.

use regex::Regex;

/// Extract plain article text from an HTML document.
///
/// Collects the text content of every `<p>` element in document order,
/// strips nested markup, decodes common entities, trims each paragraph,
/// and joins the non-empty ones with newlines. Paragraphs that contain no
/// text after stripping are dropped.
pub fn extract_paragraphs(html: &str) -> String {
    // Unwrap: the patterns are literals, known-valid.
    let paragraph_re = Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").unwrap();
    let tag_re = Regex::new(r"(?s)<[^>]+>").unwrap();

    let mut paragraphs = Vec::new();
    for capture in paragraph_re.captures_iter(html) {
        let inner = &capture[1];
        let stripped = tag_re.replace_all(inner, "");
        let decoded = decode_entities(&stripped);
        let text = decoded.trim();
        if !text.is_empty() {
            paragraphs.push(text.to_string());
        }
    }
    paragraphs.join("\n")
}

/// Decode the HTML entities that commonly appear in article prose.
///
/// Handles the named entities plus decimal and hex numeric forms.
/// `&amp;` is decoded last so entity-encoded ampersands do not cascade.
fn decode_entities(text: &str) -> String {
    let numeric_re = Regex::new(r"&#(x?)([0-9a-fA-F]+);").unwrap();
    let decoded = numeric_re.replace_all(text, |caps: &regex::Captures<'_>| {
        let radix = if caps[1].is_empty() { 10 } else { 16 };
        u32::from_str_radix(&caps[2], radix)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    decoded
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
