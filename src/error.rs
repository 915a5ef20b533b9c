use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a label image into an ingredient report
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The image path does not exist
    #[error("File '{}' not found", .0.display())]
    ImageNotFound(PathBuf),

    /// The OCR engine is not installed or cannot be reached
    #[error("OCR engine unavailable: {0}")]
    OcrUnavailable(String),

    /// The OCR engine ran but failed to recognize the image
    #[error("{0}")]
    Recognition(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read the image or write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to talk to a remote OCR service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
