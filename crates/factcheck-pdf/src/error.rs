//! PDF extraction errors

use thiserror::Error;

/// Errors that can occur while reading a PDF
#[derive(Error, Debug)]
pub enum PdfError {
    /// Upload had no bytes
    #[error("empty file")]
    Empty,

    /// Document could not be parsed
    #[error("{0}")]
    Load(String),
}
