//! Text layer extraction over lopdf

use crate::error::PdfError;
use lopdf::Document;
use tracing::{debug, warn};

/// Text pulled from a PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Concatenated page text in page order
    pub text: String,

    /// Number of pages in the document
    pub page_count: usize,

    /// Pages whose text could not be decoded
    pub undecodable_pages: Vec<u32>,
}

impl ExtractedText {
    /// True when no page yielded any non-whitespace text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Extract the text layer of every page, in page order.
///
/// A page whose content cannot be decoded is skipped and recorded in
/// `undecodable_pages`; only a document that cannot be loaded is an error.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, PdfError> {
    if bytes.is_empty() {
        return Err(PdfError::Empty);
    }

    let doc = Document::load_mem(bytes).map_err(|e| PdfError::Load(e.to_string()))?;
    let pages = doc.get_pages();

    let mut text = String::new();
    let mut undecodable_pages = Vec::new();

    // get_pages is a BTreeMap keyed by page number
    for page_number in pages.keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                warn!(page = page_number, error = %e, "Skipping undecodable page");
                undecodable_pages.push(*page_number);
            }
        }
    }

    debug!(
        pages = pages.len(),
        chars = text.chars().count(),
        "PDF text extracted"
    );

    Ok(ExtractedText {
        text,
        page_count: pages.len(),
        undecodable_pages,
    })
}
