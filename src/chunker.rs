/// Default chunk length, matching the summarizer's input window.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 1024;

/// Splits text into consecutive slices of at most `max_chars` characters.
///
/// Lengths count characters, not bytes. Splits may land mid-word; joining the
/// chunks back together reproduces `text` exactly. Only the last chunk may be
/// shorter than `max_chars`. An empty input, or a zero `max_chars`, yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    if max_chars == 0 {
        return chunks;
    }

    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
