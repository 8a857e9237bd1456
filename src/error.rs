//! Unified error types for the file upload widget.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error reading metadata of a selected path
    FileMetadata(String),
    /// Selected path exists but is not a regular file
    NotAFile(String),
    /// Error decoding an image for its thumbnail
    PreviewDecode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FileMetadata(msg) => write!(f, "Cannot read file info: {}", msg),
            AppError::NotAFile(path) => write!(f, "Not a regular file: {}", path),
            AppError::PreviewDecode(msg) => write!(f, "Cannot build preview: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::PreviewDecode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileMetadata(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
