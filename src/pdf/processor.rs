// src/pdf/processor.rs
// PDF text extraction for uploaded documents

use crate::error::{SummarizeError, SummarizeResult};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Extract the text of every page, in page order.
///
/// Scanned or image-only PDFs come back empty or partial; that is not treated
/// as a failure here. Only a document that cannot be parsed at all errors.
/// The PDF reader panics on some structurally broken files, so the panic is
/// caught and reported as an extraction error.
pub fn extract_pdf_text(bytes: &[u8]) -> SummarizeResult<String> {
    let text = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
        .map_err(|payload| {
            let reason = panic_reason(payload.as_ref());
            warn!(pdf_bytes = bytes.len(), reason = %reason, "PDF reader panicked");
            SummarizeError::Extraction(format!("PDF could not be read: {}", reason))
        })?
        .map_err(|e| SummarizeError::Extraction(format!("PDF parsing failed: {}", e)))?;

    if text.trim().is_empty() {
        warn!(pdf_bytes = bytes.len(), "PDF yielded no extractable text");
    } else {
        debug!(pdf_bytes = bytes.len(), text_chars = text.chars().count(), "PDF text extracted");
    }

    Ok(text)
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "malformed document".to_string()
    }
}
