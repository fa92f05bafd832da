// src/input.rs
// Input acquisition: pasted text or an uploaded .txt / .pdf document

use crate::error::{SummarizeError, SummarizeResult};
use crate::pdf::extract_pdf_text;
use crate::settings::InputMethod;
use std::path::Path;
use tracing::{debug, warn};

pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
}

impl DocumentKind {
    /// Decide the document kind from the declared content type, falling back
    /// to the file extension.
    pub fn detect(filename: &str, content_type: Option<&str>) -> SummarizeResult<Self> {
        if content_type == Some(PDF_MIME) {
            return Ok(DocumentKind::Pdf);
        }

        let ext = Path::new(filename)
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "txt" => Ok(DocumentKind::Text),
            _ if content_type == Some("text/plain") => Ok(DocumentKind::Text),
            _ => Err(SummarizeError::UnsupportedFileType(filename.to_string())),
        }
    }
}

/// A file received from the user
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            bytes,
        }
    }

    pub fn kind(&self) -> SummarizeResult<DocumentKind> {
        DocumentKind::detect(&self.filename, self.content_type.as_deref())
    }

    /// Read the upload's text. A zero-length file reads as empty text.
    pub fn read_text(&self) -> SummarizeResult<String> {
        let kind = self.kind()?;
        if self.bytes.is_empty() {
            debug!(filename = %self.filename, "Uploaded file is empty");
            return Ok(String::new());
        }
        match kind {
            DocumentKind::Pdf => extract_pdf_text(&self.bytes),
            DocumentKind::Text => String::from_utf8(self.bytes.clone()).map_err(|e| {
                SummarizeError::Extraction(format!("{} is not valid UTF-8: {}", self.filename, e))
            }),
        }
    }
}

/// Text for the chosen input method.
///
/// Fails with `MissingInput` when there is nothing to summarize. Only an empty
/// string counts as missing; whitespace is passed through unchanged.
pub fn acquire_text(
    method: InputMethod,
    pasted: Option<&str>,
    upload: Option<&UploadedFile>,
) -> SummarizeResult<String> {
    let text = match method {
        InputMethod::Paste => pasted.unwrap_or_default().to_string(),
        InputMethod::Upload => match upload {
            Some(file) => file.read_text()?,
            None => String::new(),
        },
    };

    if text.is_empty() {
        warn!(input_method = method.as_str(), "No input text provided");
        return Err(SummarizeError::MissingInput);
    }
    Ok(text)
}

/// `acquire_text` for an upload, run on the blocking thread pool.
///
/// PDF parsing is CPU-bound and must not hold up the async worker. A task that
/// dies before returning is reported as an extraction failure.
pub async fn acquire_upload_text(upload: Option<UploadedFile>) -> SummarizeResult<String> {
    tokio::task::spawn_blocking(move || acquire_text(InputMethod::Upload, None, upload.as_ref()))
        .await
        .map_err(|e| SummarizeError::Extraction(format!("Document reader failed: {}", e)))?
}
