use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

/// Returns the text of each page. A document pdf-extract cannot open yields no pages.
///
/// pdf-extract can panic inside its font decoders on malformed input, so every call
/// is isolated with `catch_unwind`. When the paged API fails, the whole-document API
/// is tried and its output counted as a single page.
pub fn page_texts(bytes: &[u8]) -> Vec<String> {
    match catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    })) {
        Ok(Ok(pages)) => {
            debug!("PDF paged extraction returned {} pages", pages.len());
            return pages;
        }
        Ok(Err(e)) => warn!("PDF paged extraction failed: {e}"),
        Err(_) => warn!("PDF paged extraction panicked"),
    }

    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => vec![text],
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            Vec::new()
        }
        Err(_) => {
            warn!("PDF extraction panicked");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_yields_no_pages() {
        assert!(page_texts(b"definitely not a pdf").is_empty());
    }
}
