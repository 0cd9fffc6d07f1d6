//! Error handling for the career copilot application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Chat service error: {0}")]
    Service(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("History error: {0}")]
    History(String),
}

pub type Result<T> = std::result::Result<T, CopilotError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CopilotError {
    fn from(err: anyhow::Error) -> Self {
        CopilotError::InvalidInput(err.to_string())
    }
}

/// Convert reqwest errors to our custom error type
impl From<reqwest::Error> for CopilotError {
    fn from(err: reqwest::Error) -> Self {
        CopilotError::Service(err.to_string())
    }
}
