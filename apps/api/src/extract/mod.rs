//! Text extraction boundary.
//!
//! The import core treats both document readers as black boxes that either
//! return plain text or fail. Backends are registered per [`DocumentKind`];
//! asking for a kind with no registered backend is the "capability missing at
//! runtime" failure mode.

pub mod docx;
pub mod pdf;

use std::sync::Arc;

use crate::errors::AppError;

/// Declared kind of an uploaded document, derived from its MIME type or
/// filename before any bytes are inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

impl DocumentKind {
    /// Resolves the declared kind from the upload's content type and filename.
    /// PDF is recognized by MIME type only; DOCX by MIME type or a `.docx`
    /// extension. Anything else is rejected up front, before extraction.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, AppError> {
        match content_type {
            Some("application/pdf") => return Ok(DocumentKind::Pdf),
            Some(ct) if ct == DOCX_MIME => return Ok(DocumentKind::Docx),
            _ => {}
        }
        if file_name.is_some_and(|n| n.to_lowercase().ends_with(".docx")) {
            return Ok(DocumentKind::Docx);
        }
        Err(AppError::UnsupportedFormat)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
        }
    }
}

/// A text-extraction backend for one document kind.
pub trait TextExtractor: Send + Sync {
    /// Extracts the full plain-text content of the document.
    /// Returns the text blob in document order; may legitimately return an
    /// empty string (e.g. a scanned PDF with no text layer).
    fn extract(&self, data: &[u8]) -> Result<String, AppError>;
}

impl std::fmt::Debug for dyn TextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn TextExtractor")
    }
}

/// Registry of extraction backends keyed by document kind.
#[derive(Clone, Default)]
pub struct ExtractorRegistry {
    pdf: Option<Arc<dyn TextExtractor>>,
    docx: Option<Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Registry with both production backends wired in.
    pub fn with_defaults() -> Self {
        Self {
            pdf: Some(Arc::new(pdf::PdfTextExtractor)),
            docx: Some(Arc::new(docx::DocxTextExtractor)),
        }
    }

    /// Registry with no backends. Tests register their own.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn register(mut self, kind: DocumentKind, extractor: Arc<dyn TextExtractor>) -> Self {
        match kind {
            DocumentKind::Pdf => self.pdf = Some(extractor),
            DocumentKind::Docx => self.docx = Some(extractor),
        }
        self
    }

    /// Returns a handle to the backend for `kind`, or the capability-missing
    /// error when none is registered.
    pub fn get(&self, kind: DocumentKind) -> Result<Arc<dyn TextExtractor>, AppError> {
        let slot = match kind {
            DocumentKind::Pdf => &self.pdf,
            DocumentKind::Docx => &self.docx,
        };
        slot.clone()
            .ok_or(AppError::ExtractionUnavailable(kind.label()))
    }
}
