//! I/O error types
//!
//! Provides a unified error type for all image I/O operations, so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
///
/// Wraps standard I/O errors, malformed PGM data, and core-library errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The path does not name a supported image file
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid (bad magic, malformed header)
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The pixel payload ended before `width * height` bytes were read
    #[error("truncated pixel data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] graykit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
