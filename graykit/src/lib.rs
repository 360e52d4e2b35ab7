//! graykit - Minimal grayscale image toolkit
//!
//! # Overview
//!
//! graykit works on 8-bit grayscale images:
//!
//! - Binary PGM (P5) I/O
//! - Brightness/contrast and gamma correction
//! - Convolution with arbitrary kernels
//! - Line, circle and rectangle drawing
//! - Region-of-interest extraction and pixel arithmetic
//!
//! # Example
//!
//! ```
//! use graykit::filter::{Convolution, ImageFilter, Kernel};
//! use graykit::{Image, Point, draw_circle};
//!
//! let mut img = Image::zeros(64, 64);
//! draw_circle(&mut img, Point::new(32, 32), 20, 255);
//! let blurred = Convolution::new(Kernel::gaussian_blur()).apply(&img);
//! assert_eq!(blurred.dimensions(), (64, 64));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use graykit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use graykit_filter as filter;
pub use graykit_io as io;

pub mod cli;
