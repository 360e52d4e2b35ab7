//! Error types for the interactive frontend

use graykit_io::IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by menu operations
///
/// All variants except a failure to write the menu itself are shown to the
/// user and the menu continues.
#[derive(Debug, Error)]
pub enum CliError {
    /// An operation needs an image and none is loaded
    #[error("Please load an image first (Option 1)")]
    NoImageLoaded,

    /// A value could not be parsed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A menu selection outside the offered range
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    /// Input ended while a value was expected
    #[error("end of input")]
    EndOfInput,

    /// Terminal or filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input path is missing or is not a `.pgm` file
    #[error("Invalid format. Please provide a valid PGM file.")]
    InvalidFormat(#[source] IoError),

    /// The input file could not be decoded
    #[error("Error loading the image. Please check if the file is corrupted.")]
    Load(#[source] IoError),

    /// An output file could not be written
    #[error("Error saving the image")]
    Save {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// Filter construction error
    #[error(transparent)]
    Filter(#[from] graykit_filter::FilterError),
}

/// Result type for frontend operations
pub type CliResult<T> = Result<T, CliError>;
