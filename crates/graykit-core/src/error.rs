//! Error types for graykit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// graykit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel index out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Incompatible image sizes
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Region of interest does not fit inside the source image
    #[error("region {x},{y} {w}x{h} exceeds {width}x{height} image")]
    RegionOutOfBounds {
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        width: u32,
        height: u32,
    },

    /// Pixel buffer length does not match the dimensions
    #[error("buffer holds {actual} bytes, {width}x{height} image needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for graykit-core operations
pub type Result<T> = std::result::Result<T, Error>;
