use tracing::info;

use super::TextExtractor;
use crate::errors::AppError;

/// PDF text-layer reader.
///
/// Reads the machine-readable text layer page by page in page order. Pages
/// without a text layer (scanned images) contribute nothing; there is no OCR
/// fallback, so a fully scanned document yields an empty blob and the import
/// fails downstream with `EmptyDocument`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, AppError> {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(e.to_string()))?;
        info!("PDF extraction produced {} characters", text.len());
        Ok(text)
    }
}
