//! Error handling for the resume signals application
//!
//! The analysis core never fails; everything here belongs to the boundary
//! (file decoding, configuration, output).

use thiserror::Error;

const TEXT_EXPORT_HINT: &str =
    "Export the document as a text-based PDF, or use a DOCX/TXT copy of it instead.";

#[derive(Error, Debug)]
pub enum ResumeSignalsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("No readable text found: {0}")]
    NoExtractableText(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ResumeSignalsError {
    /// Suggestion shown to the user when a document could not be turned into text.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            ResumeSignalsError::PdfExtraction(_)
            | ResumeSignalsError::UnsupportedFormat(_)
            | ResumeSignalsError::NoExtractableText(_) => Some(TEXT_EXPORT_HINT),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeSignalsError>;
