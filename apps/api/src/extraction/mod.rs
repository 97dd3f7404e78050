//! Text Extractor: turns an uploaded file into plain text for the parsers.
//!
//! CPU-bound (PDF font decoding, DOCX unzip): callers on the async runtime must run
//! `extract_text` inside `tokio::task::spawn_blocking`.

pub mod docx;
pub mod normalize;
pub mod pdf;

use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::normalize::{collapse_whitespace, normalize_pdf_text, printable_ascii};

pub const MIME_TEXT: &str = "text/plain";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error(
        "Couldn't read any text from this file ({chars} characters found). \
         It may be a scanned image or a protected PDF. \
         Choose a different file or fill in the form manually."
    )]
    EmptyOrImageOnly { chars: usize },

    #[error(
        "This file format isn't supported or the file is empty ({chars} characters found). \
         Choose a different file or fill in the form manually."
    )]
    UnsupportedOrEmpty { chars: usize },
}

/// Minimum amount of text an extraction must produce to be handed to the parsers.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionLimits {
    pub min_chars: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self { min_chars: 50 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    PlainText,
    Pdf,
    Doc,
    Docx,
    Unknown,
}

impl MediaKind {
    /// Maps a declared MIME type; parameters (`; charset=...`) and case are ignored.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            MIME_TEXT => MediaKind::PlainText,
            MIME_PDF => MediaKind::Pdf,
            MIME_DOC => MediaKind::Doc,
            MIME_DOCX => MediaKind::Docx,
            _ => MediaKind::Unknown,
        }
    }

    /// Fallback for uploads that declare no content type.
    pub fn from_file_name(name: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "txt" | "text" => MediaKind::PlainText,
            "pdf" => MediaKind::Pdf,
            "doc" => MediaKind::Doc,
            "docx" => MediaKind::Docx,
            _ => MediaKind::Unknown,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaKind::PlainText => MIME_TEXT,
            MediaKind::Pdf => MIME_PDF,
            MediaKind::Doc => MIME_DOC,
            MediaKind::Docx => MIME_DOCX,
            MediaKind::Unknown => MIME_OCTET_STREAM,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::PlainText => "text",
            MediaKind::Pdf => "pdf",
            MediaKind::Doc => "doc",
            MediaKind::Docx => "docx",
            MediaKind::Unknown => "unknown",
        }
    }
}

/// Extracts normalized text from a file buffer according to its declared MIME type.
///
/// Plain text is returned verbatim (line breaks kept). Every other format comes
/// back whitespace-collapsed. Results shorter than `limits.min_chars` are errors.
pub fn extract_text(
    bytes: &[u8],
    mime: &str,
    limits: ExtractionLimits,
) -> Result<String, ExtractionError> {
    let kind = MediaKind::from_mime(mime);
    let text = match kind {
        MediaKind::PlainText => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            let chars = text.trim().chars().count();
            if chars < limits.min_chars {
                return Err(ExtractionError::UnsupportedOrEmpty { chars });
            }
            text
        }
        MediaKind::Pdf => {
            let pages = pdf::page_texts(bytes);
            let page_count = pages.len();
            let text = normalize_pdf_text(&pages.join("\n"));
            let chars = text.chars().count();
            if chars < limits.min_chars {
                warn!("PDF has {chars} characters over {page_count} pages; likely image-only");
                return Err(ExtractionError::EmptyOrImageOnly { chars });
            }
            text
        }
        MediaKind::Docx => {
            let text = docx::document_text(bytes)
                .map(|raw| collapse_whitespace(&raw))
                .map_err(|e| {
                    warn!("DOCX extraction failed: {e}");
                    ExtractionError::UnsupportedOrEmpty { chars: 0 }
                })?;
            at_least(text, limits)?
        }
        MediaKind::Doc => {
            let text = match docx::document_text(bytes) {
                Ok(raw) => collapse_whitespace(&raw),
                Err(e) => {
                    warn!("DOC structured extraction failed ({e}); salvaging raw text");
                    printable_ascii(bytes)
                }
            };
            at_least(text, limits)?
        }
        MediaKind::Unknown => {
            warn!("Unknown content type '{mime}'; attempting raw text salvage");
            at_least(printable_ascii(bytes), limits)?
        }
    };

    info!(
        "Extracted {} characters from {} upload",
        text.chars().count(),
        kind.as_str()
    );
    Ok(text)
}

fn at_least(text: String, limits: ExtractionLimits) -> Result<String, ExtractionError> {
    let chars = text.chars().count();
    if chars < limits.min_chars {
        return Err(ExtractionError::UnsupportedOrEmpty { chars });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME_TXT: &str = "Jane Doe\njane@example.com\n\nEXPERIENCE\nBackend Engineer at Acme | 2019 - Present\n";

    #[test]
    fn test_mime_mapping() {
        assert_eq!(MediaKind::from_mime("text/plain; charset=utf-8"), MediaKind::PlainText);
        assert_eq!(MediaKind::from_mime("Application/PDF"), MediaKind::Pdf);
        assert_eq!(MediaKind::from_mime(MIME_DOC), MediaKind::Doc);
        assert_eq!(MediaKind::from_mime(MIME_DOCX), MediaKind::Docx);
        assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Unknown);
        assert_eq!(MediaKind::from_mime(""), MediaKind::Unknown);
    }

    #[test]
    fn test_file_name_mapping() {
        assert_eq!(MediaKind::from_file_name("cv.PDF"), MediaKind::Pdf);
        assert_eq!(MediaKind::from_file_name("cv.docx"), MediaKind::Docx);
        assert_eq!(MediaKind::from_file_name("README"), MediaKind::Unknown);
        assert_eq!(MediaKind::from_file_name("notes.txt").mime(), MIME_TEXT);
    }

    #[test]
    fn test_plain_text_returned_verbatim() {
        let text = extract_text(RESUME_TXT.as_bytes(), MIME_TEXT, ExtractionLimits::default())
            .unwrap();
        assert_eq!(text, RESUME_TXT);
    }

    #[test]
    fn test_plain_text_is_idempotent() {
        let limits = ExtractionLimits::default();
        let once = extract_text(RESUME_TXT.as_bytes(), MIME_TEXT, limits).unwrap();
        let twice = extract_text(once.as_bytes(), MIME_TEXT, limits).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_short_plain_text_rejected() {
        let err = extract_text(b"too short", MIME_TEXT, ExtractionLimits::default()).unwrap_err();
        assert_eq!(err, ExtractionError::UnsupportedOrEmpty { chars: 9 });
    }

    #[test]
    fn test_unreadable_pdf_reports_image_only() {
        let err = extract_text(b"%PDF-1.4 garbage", MIME_PDF, ExtractionLimits::default())
            .unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyOrImageOnly { .. }));
    }

    #[test]
    fn test_invalid_docx_rejected() {
        let err = extract_text(RESUME_TXT.as_bytes(), MIME_DOCX, ExtractionLimits::default())
            .unwrap_err();
        assert_eq!(err, ExtractionError::UnsupportedOrEmpty { chars: 0 });
    }

    #[test]
    fn test_legacy_doc_falls_back_to_printable_ascii() {
        let mut bytes = vec![0xd0, 0xcf, 0x11, 0xe0, 0xa1, 0xb1, 0x1a, 0xe1];
        bytes.extend_from_slice(RESUME_TXT.as_bytes());
        bytes.extend_from_slice(&[0x00, 0x00, 0xff]);
        let text = extract_text(&bytes, MIME_DOC, ExtractionLimits::default()).unwrap();
        assert!(text.starts_with("Jane Doe jane@example.com EXPERIENCE"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_unknown_type_too_short_after_salvage() {
        let err = extract_text(&[0u8; 200], "application/octet-stream", ExtractionLimits::default())
            .unwrap_err();
        assert_eq!(err, ExtractionError::UnsupportedOrEmpty { chars: 0 });
    }

    #[test]
    fn test_threshold_is_configurable() {
        let limits = ExtractionLimits { min_chars: 5 };
        assert!(extract_text(b"hello world", MIME_TEXT, limits).is_ok());
    }
}
