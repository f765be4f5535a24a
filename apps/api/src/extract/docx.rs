use tracing::info;

use super::TextExtractor;
use crate::errors::AppError;

/// DOCX raw-text reader.
///
/// Walks the document body paragraph by paragraph, collecting run text and
/// discarding all formatting, images, and structural markup. One paragraph
/// becomes one line of the text blob.
pub struct DocxTextExtractor;

impl TextExtractor for DocxTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, AppError> {
        let docx = docx_rs::read_docx(data).map_err(|e| AppError::Extraction(e.to_string()))?;

        let mut paragraphs: Vec<String> = Vec::new();
        for child in docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(para) = child {
                let para_text: String = para
                    .children
                    .iter()
                    .filter_map(|pc| {
                        if let docx_rs::ParagraphChild::Run(run) = pc {
                            Some(
                                run.children
                                    .iter()
                                    .filter_map(|rc| {
                                        if let docx_rs::RunChild::Text(t) = rc {
                                            Some(t.text.as_str())
                                        } else {
                                            None
                                        }
                                    })
                                    .collect::<String>(),
                            )
                        } else {
                            None
                        }
                    })
                    .collect();

                if !para_text.trim().is_empty() {
                    paragraphs.push(para_text);
                }
            }
        }

        let text = paragraphs.join("\n");
        info!("DOCX extraction produced {} characters", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_with_extraction_error() {
        let err = DocxTextExtractor.extract(b"not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
