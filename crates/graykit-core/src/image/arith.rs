//! Image arithmetic operations
//!
//! Pixel-wise arithmetic on 8-bit images:
//!
//! - Image + image, image - image (`arith_add`, `arith_subtract`)
//! - Image + constant, image - constant (`add_constant`, `subtract_constant`)
//! - Image * scalar (`multiply_constant`)
//!
//! Every result is saturated to `[0, 255]`.
//!
//! The method forms report a size mismatch as
//! [`Error::IncompatibleSizes`]. The operator forms (`&a + &b`, `&a - &b`)
//! cannot fail, so on mismatch they return the empty image instead.

use super::Image;
use crate::error::{Error, Result};
use log::warn;
use std::ops::{Add, Mul, Sub};

impl Image {
    /// Add another image to this one: `self + other`
    ///
    /// Each output pixel is `min(255, a + b)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the dimensions differ.
    ///
    /// # Example
    ///
    /// ```
    /// use graykit_core::Image;
    ///
    /// let a = Image::filled(4, 4, 200);
    /// let b = Image::filled(4, 4, 100);
    /// let sum = a.arith_add(&b).unwrap();
    /// assert_eq!(sum.at(0, 0), 255);
    /// ```
    pub fn arith_add(&self, other: &Image) -> Result<Image> {
        self.arith_binary_op(other, ArithBinaryOp::Add)
    }

    /// Subtract another image from this one: `self - other`
    ///
    /// Each output pixel is `max(0, a - b)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the dimensions differ.
    pub fn arith_subtract(&self, other: &Image) -> Result<Image> {
        self.arith_binary_op(other, ArithBinaryOp::Subtract)
    }

    /// Add a constant to all pixels, saturating at 255.
    pub fn add_constant(&self, val: u8) -> Image {
        self.map_pixels(|v| v.saturating_add(val))
    }

    /// Subtract a constant from all pixels, saturating at 0.
    pub fn subtract_constant(&self, val: u8) -> Image {
        self.map_pixels(|v| v.saturating_sub(val))
    }

    /// Multiply all pixels by `factor`.
    ///
    /// Each output pixel is `trunc(v * factor)` clamped to `[0, 255]`, so a
    /// negative factor produces black.
    pub fn multiply_constant(&self, factor: f64) -> Image {
        self.map_pixels(|v| (v as f64 * factor).trunc().clamp(0.0, 255.0) as u8)
    }

    fn arith_binary_op(&self, other: &Image, op: ArithBinaryOp) -> Result<Image> {
        if !self.sizes_equal(other) {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| match op {
                ArithBinaryOp::Add => a.saturating_add(b),
                ArithBinaryOp::Subtract => a.saturating_sub(b),
            })
            .collect();

        Ok(Image {
            width: self.width,
            height: self.height,
            data,
        })
    }

    fn arith_or_empty(&self, other: &Image, op: ArithBinaryOp) -> Image {
        self.arith_binary_op(other, op).unwrap_or_else(|e| {
            warn!("{op:?}: {e}, returning empty image");
            Image::empty()
        })
    }
}

/// Binary arithmetic operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithBinaryOp {
    Add,
    Subtract,
}

impl Add for &Image {
    type Output = Image;

    fn add(self, rhs: &Image) -> Image {
        self.arith_or_empty(rhs, ArithBinaryOp::Add)
    }
}

impl Sub for &Image {
    type Output = Image;

    fn sub(self, rhs: &Image) -> Image {
        self.arith_or_empty(rhs, ArithBinaryOp::Subtract)
    }
}

impl Add<u8> for &Image {
    type Output = Image;

    fn add(self, rhs: u8) -> Image {
        self.add_constant(rhs)
    }
}

impl Sub<u8> for &Image {
    type Output = Image;

    fn sub(self, rhs: u8) -> Image {
        self.subtract_constant(rhs)
    }
}

impl Mul<f64> for &Image {
    type Output = Image;

    fn mul(self, rhs: f64) -> Image {
        self.multiply_constant(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_constant_gray() {
        let mut img = Image::zeros(10, 10);
        img.set_pixel(5, 5, 100).unwrap();

        let result = img.add_constant(50);
        assert_eq!(result.get_pixel(5, 5), Some(150));
        assert_eq!(result.get_pixel(0, 0), Some(50));
        // Source untouched
        assert_eq!(img.get_pixel(5, 5), Some(100));
    }

    #[test]
    fn test_add_constant_clipping() {
        let img = Image::filled(10, 10, 200);
        let result = &img + 100;
        // 200 + 100 = 300, should clip to 255
        assert!(result.data().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_subtract_constant_clipping() {
        let img = Image::filled(3, 3, 10);
        let result = &img - 50;
        assert!(result.data().iter().all(|&v| v == 0));
        assert_eq!((&img - 4).at(1, 1), 6);
    }

    #[test]
    fn test_multiply_constant() {
        let img = Image::from_vec(3, 1, vec![10, 100, 200]).unwrap();
        let result = &img * 1.5;
        assert_eq!(result.data(), &[15, 150, 255]);

        let half = img.multiply_constant(0.5);
        assert_eq!(half.data(), &[5, 50, 100]);

        // Fractions truncate
        let third = Image::filled(1, 1, 10).multiply_constant(0.33);
        assert_eq!(third.at(0, 0), 3);
    }

    #[test]
    fn test_multiply_constant_negative_is_black() {
        let img = Image::filled(2, 2, 100);
        assert!((&img * -2.0).data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_arith_add_clipping() {
        let a = Image::from_vec(2, 1, vec![100, 200]).unwrap();
        let b = Image::from_vec(2, 1, vec![50, 100]).unwrap();
        let sum = a.arith_add(&b).unwrap();
        assert_eq!(sum.data(), &[150, 255]);
        assert_eq!((&a + &b).data(), &[150, 255]);
    }

    #[test]
    fn test_arith_subtract_clipping() {
        let a = Image::from_vec(2, 1, vec![100, 20]).unwrap();
        let b = Image::from_vec(2, 1, vec![30, 50]).unwrap();
        assert_eq!(a.arith_subtract(&b).unwrap().data(), &[70, 0]);
        assert_eq!((&a - &b).data(), &[70, 0]);
    }

    #[test]
    fn test_size_mismatch() {
        let a = Image::zeros(4, 4);
        let b = Image::zeros(4, 5);
        assert!(matches!(
            a.arith_add(&b),
            Err(Error::IncompatibleSizes(4, 4, 4, 5))
        ));
        assert!(a.arith_subtract(&b).is_err());
        assert!((&a + &b).is_empty());
        assert!((&a - &b).is_empty());
    }

    #[test]
    fn test_empty_operands() {
        let e = Image::empty();
        assert!((&e + &e).is_empty());
        assert!(e.add_constant(10).is_empty());
        assert!((&e * 2.0).is_empty());
    }
}
