//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! `at*` accessors are the fast path: they do not report errors and panic
//! on an out-of-range coordinate. `get_pixel` / `set_pixel` are the checked
//! variants.

use super::Image;
use crate::error::{Error, Result};
use crate::point::Point;

impl Image {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    /// Get a mutable reference to the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut u8 {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    /// Get the pixel at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside the image.
    #[inline]
    pub fn at_point(&self, p: Point) -> u8 {
        let (x, y) = Self::point_coords(p);
        self.at(x, y)
    }

    /// Get a mutable reference to the pixel at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside the image.
    #[inline]
    pub fn at_point_mut(&mut self, p: Point) -> &mut u8 {
        let (x, y) = Self::point_coords(p);
        self.at_mut(x, y)
    }

    fn point_coords(p: Point) -> (u32, u32) {
        match (u32::try_from(p.x), u32::try_from(p.y)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => panic!("pixel {p} has a negative coordinate"),
        }
    }

    /// Get a pixel value at `(x, y)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set a pixel value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = val;
        Ok(())
    }

    /// Get row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Get row `y` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.data[start..start + w]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_row_major() {
        let mut img = Image::zeros(4, 3);
        *img.at_mut(3, 1) = 42;
        assert_eq!(img.data()[4 + 3], 42);
        assert_eq!(img.at(3, 1), 42);
        assert_eq!(img.at_point(Point::new(3, 1)), 42);
        *img.at_point_mut(Point::new(0, 2)) = 9;
        assert_eq!(img.at(0, 2), 9);
    }

    #[test]
    #[should_panic]
    fn test_at_out_of_bounds_panics() {
        let img = Image::zeros(4, 3);
        let _ = img.at(4, 0);
    }

    #[test]
    #[should_panic]
    fn test_at_point_negative_panics() {
        let img = Image::zeros(4, 3);
        let _ = img.at_point(Point::new(-1, 0));
    }

    #[test]
    fn test_get_set_pixel_checked() {
        let mut img = Image::zeros(5, 5);
        img.set_pixel(2, 3, 128).unwrap();
        assert_eq!(img.get_pixel(2, 3), Some(128));
        assert_eq!(img.get_pixel(5, 0), None);
        assert!(matches!(
            img.set_pixel(0, 5, 1),
            Err(Error::IndexOutOfBounds { x: 0, y: 5, .. })
        ));
    }

    #[test]
    fn test_rows() {
        let mut img = Image::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.row(1), &[3, 4]);
        img.row_mut(2).copy_from_slice(&[7, 8]);
        let rows: Vec<&[u8]> = img.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2][..], &[3, 4], &[7, 8]]);
        assert_eq!(Image::empty().rows().count(), 0);
    }
}
