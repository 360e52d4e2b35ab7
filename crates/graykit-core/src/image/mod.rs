//! Image - The main grayscale image container
//!
//! `Image` is the fundamental type of the toolkit: a dense, row-major
//! buffer of 8-bit samples.
//!
//! # Pixel layout
//!
//! - One byte per pixel, rows stored top to bottom
//! - Pixel `(x, y)` lives at index `y * width + x`
//! - No row padding
//!
//! # Ownership model
//!
//! Every `Image` exclusively owns its buffer. `clone()` is a deep copy, so
//! mutation through one value is never observable through another. The
//! buffer is freed exactly once when the value is dropped, or earlier via
//! [`Image::release`].
//!
//! # Empty images
//!
//! An image with either dimension 0 is normalized to the canonical empty
//! state: `0 x 0` with no allocated buffer.

mod access;
pub mod arith;
mod clip;
pub mod graphics;

use crate::error::{Error, Result};
use std::fmt;

/// Main image container
///
/// # Examples
///
/// ```
/// use graykit_core::Image;
///
/// let img = Image::zeros(640, 480);
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.at(10, 10), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major pixel data, `width * height` bytes
    data: Vec<u8>,
}

impl Image {
    /// Create the canonical empty image.
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Create a new image with the specified dimensions.
    ///
    /// Callers must not rely on the initial pixel values; use
    /// [`Image::zeros`], [`Image::ones`] or [`Image::filled`] when the
    /// contents matter. If either dimension is 0 the empty image is
    /// returned.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` does not fit in `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create an image with every pixel set to 0.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create an image with every pixel set to 255.
    pub fn ones(width: u32, height: u32) -> Self {
        Self::filled(width, height, u8::MAX)
    }

    /// Create an image with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }
        Self {
            width,
            height,
            data: vec![value; Self::buffer_len(width, height)],
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            if data.is_empty() {
                return Ok(Self::empty());
            }
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = Self::buffer_len(width, height);
        if data.len() != expected {
            return Err(Error::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of bytes needed for a `width x height` buffer.
    ///
    /// # Panics
    ///
    /// Panics if the result would overflow `usize`.
    #[inline]
    fn buffer_len(width: u32, height: u32) -> usize {
        (width as usize)
            .checked_mul(height as usize)
            .unwrap_or_else(|| panic!("image too large: {width}x{height}"))
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether the image has no pixel buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.width == 0 || self.height == 0
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable raw access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Free the pixel buffer and reset the dimensions to 0.
    ///
    /// Calling this on an already empty image is a no-op.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    /// Build a same-sized image by mapping every pixel through `f`.
    pub(crate) fn map_pixels(&self, f: impl Fn(u8) -> u8) -> Image {
        Image {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

/// Prints the pixel grid, each value right-aligned in 3 columns.
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for row in self.data.chunks_exact(self.width as usize) {
            for v in row {
                write!(f, "{v:>3} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let img = Image::new(100, 200);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 200);
        assert_eq!(img.data().len(), 20_000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let img = Image::new(w, h);
            assert!(img.is_empty());
            assert_eq!(img.dimensions(), (0, 0));
            assert!(img.data().is_empty());
        }
        assert!(Image::empty().is_empty());
        assert_eq!(Image::default(), Image::empty());
    }

    #[test]
    fn test_zeros_and_ones() {
        let z = Image::zeros(4, 3);
        assert!(z.data().iter().all(|&v| v == 0));
        let o = Image::ones(4, 3);
        assert!(o.data().iter().all(|&v| v == 255));
        let f = Image::filled(2, 2, 77);
        assert_eq!(f.data(), &[77, 77, 77, 77]);
    }

    #[test]
    fn test_from_vec() {
        let img = Image::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.at(2, 1), 6);
        assert!(matches!(
            Image::from_vec(3, 2, vec![0; 5]),
            Err(Error::BufferSize {
                expected: 6,
                actual: 5,
                ..
            })
        ));
        assert!(Image::from_vec(0, 2, Vec::new()).unwrap().is_empty());
        assert!(Image::from_vec(0, 2, vec![1]).is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Image::zeros(5, 5);
        let mut copy = original.clone();
        *copy.at_mut(2, 2) = 200;
        assert_eq!(copy.at(2, 2), 200);
        assert_eq!(original.at(2, 2), 0);
        assert_ne!(original.data().as_ptr(), copy.data().as_ptr());
    }

    #[test]
    fn test_assignment_replaces_buffer() {
        let mut dst = Image::ones(2, 2);
        let src = Image::zeros(7, 3);
        dst.clone_from(&src);
        assert_eq!(dst.dimensions(), (7, 3));
        assert!(dst.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut img = Image::ones(10, 10);
        img.release();
        assert!(img.is_empty());
        assert_eq!(img.dimensions(), (0, 0));
        img.release();
        assert!(img.is_empty());
    }

    #[test]
    fn test_display_grid() {
        let img = Image::from_vec(3, 2, vec![0, 7, 255, 10, 100, 1]).unwrap();
        assert_eq!(img.to_string(), "  0   7 255 \n 10 100   1 \n");
        assert_eq!(Image::empty().to_string(), "");
    }

    #[test]
    fn test_sizes_equal() {
        let a = Image::zeros(3, 4);
        assert!(a.sizes_equal(&Image::ones(3, 4)));
        assert!(!a.sizes_equal(&Image::ones(4, 3)));
    }
}
