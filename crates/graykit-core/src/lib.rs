//! graykit Core - Basic data structures for grayscale image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the graykit toolkit:
//!
//! - [`Image`] - Dense 8-bit grayscale pixel buffer with value semantics
//! - [`Point`] - Integer 2D coordinate
//! - [`Rect`] - Axis-aligned rectangle given by two corners
//! - [`graphics`] - Line, circle and rectangle rasterization

pub mod error;
pub mod image;
pub mod point;
pub mod rect;

pub use error::{Error, Result};
pub use image::Image;
pub use image::graphics;
pub use image::graphics::{draw_circle, draw_line, draw_rect, draw_rectangle};
pub use point::Point;
pub use rect::Rect;
