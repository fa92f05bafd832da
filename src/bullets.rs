// src/bullets.rs
// Turns combined summary text into a fixed number of bullet lines

use once_cell::sync::Lazy;
use regex::Regex;

/// File name offered for the exported summary
pub const EXPORT_FILE_NAME: &str = "legal_summary.txt";

/// MIME type of the exported summary
pub const EXPORT_MIME_TYPE: &str = "text/plain";

// A run of non-terminators closed by exactly one terminator. Known to mis-split
// abbreviations and decimals ("Rs. 5.5 lakh.").
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]").expect("sentence pattern is valid"));

/// Sentence-like units of `text`, trimmed, in order. Trailing text without a
/// terminator is dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Picks up to `num_bullets` bullets.
///
/// Sentences from the summary come first. When the summary is too short, the
/// list is topped up with document sentences that are not already in it
/// (exact match), in document order.
pub fn extract_bullets(summary: &str, document: &str, num_bullets: usize) -> Vec<String> {
    let mut bullets = split_sentences(summary);

    if bullets.len() < num_bullets {
        for sentence in split_sentences(document) {
            if bullets.len() >= num_bullets {
                break;
            }
            if !bullets.contains(&sentence) {
                bullets.push(sentence);
            }
        }
    }

    bullets.truncate(num_bullets);
    bullets
}

/// One bullet per line, each prefixed with `"- "`.
pub fn render_bullets(bullets: &[String]) -> String {
    bullets
        .iter()
        .map(|b| format!("- {}", b))
        .collect::<Vec<_>>()
        .join("\n")
}
