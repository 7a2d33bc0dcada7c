//! Factcheck PDF Text Extraction
//!
//! Pulls the text layer out of an uploaded PDF, page by page, and
//! concatenates it. Scanned pages without a text layer contribute nothing.
//!
//! # Examples
//!
//! ```no_run
//! use factcheck_pdf::extract_text;
//!
//! # fn example(bytes: &[u8]) -> Result<(), factcheck_pdf::PdfError> {
//! let extracted = extract_text(bytes)?;
//! println!("{} pages, {} chars", extracted.page_count, extracted.text.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod extract;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use error::PdfError;
pub use extract::{extract_text, ExtractedText};
