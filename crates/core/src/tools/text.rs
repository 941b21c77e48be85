//! # Text Primitives
//!
//! Shared segmentation helpers used by the analyzers and the writing
//! stages. Word counts are always recomputed from content with these
//! functions, never cached.

use regex::Regex;

/// Count whitespace-delimited words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters (not bytes)
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Count sentences delimited by runs of `.`, `!` or `?`
///
/// Text with no terminal punctuation counts zero sentences; the trailing
/// empty segment after a final delimiter is not counted.
pub fn sentence_count(text: &str) -> usize {
    sentence_delimiter()
        .split(text)
        .count()
        .saturating_sub(1)
}

/// The first sentence of the text, if any
pub fn first_sentence(text: &str) -> Option<&str> {
    sentence_delimiter().split(text).next().map(str::trim)
}

fn sentence_delimiter() -> Regex {
    Regex::new(r"[.!?]+").expect("valid sentence delimiter pattern")
}

/// Non-empty paragraphs, split on blank lines
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").filter(|p| !p.trim().is_empty()).collect()
}

/// Average paragraph length in words, 0 when there are no paragraphs
pub fn avg_paragraph_length(text: &str) -> f64 {
    let paras = paragraphs(text);
    if paras.is_empty() {
        return 0.0;
    }
    let total: usize = paras.iter().map(|p| word_count(p)).sum();
    total as f64 / paras.len() as f64
}

/// First `max` characters of the text (char-safe, no allocation when short)
pub fn prefix_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Last `max` characters of the text (char-safe)
pub fn suffix_chars(text: &str, max: usize) -> &str {
    let count = char_count(text);
    if count <= max {
        return text;
    }
    let skip = count - max;
    match text.char_indices().nth(skip) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Round to the given number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        assert_eq!(sentence_count("No terminal punctuation"), 0);
        assert_eq!(sentence_count(""), 0);
        // A run of delimiters is a single boundary
        assert_eq!(sentence_count("Wait... what?"), 2);
    }

    #[test]
    fn test_paragraphs() {
        let text = "First paragraph.\n\nSecond paragraph.\n\n\n\nThird.";
        assert_eq!(paragraphs(text).len(), 3);
        assert!(paragraphs("").is_empty());
    }

    #[test]
    fn test_prefix_suffix_chars() {
        assert_eq!(prefix_chars("hello world", 5), "hello");
        assert_eq!(prefix_chars("hi", 5), "hi");
        assert_eq!(suffix_chars("hello world", 5), "world");
        assert_eq!(suffix_chars("hi", 5), "hi");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.235, 1), 1.2);
    }
}
