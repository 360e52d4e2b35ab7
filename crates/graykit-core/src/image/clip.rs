//! Region-of-interest extraction
//!
//! Unlike a clipping crop, a region that extends past the image edge is an
//! error here: the requested rectangle must fit entirely inside the source.

use super::Image;
use crate::error::{Error, Result};
use crate::rect::Rect;
use log::debug;

impl Image {
    /// Copy the region `rect` into `dst`, replacing its previous buffer.
    ///
    /// A zero-sized region succeeds and leaves `dst` empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the origin or either extent
    /// is negative, or if `x + w > width` or `y + h > height`. `dst` is not
    /// modified on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use graykit_core::{Image, Rect};
    ///
    /// let img = Image::filled(100, 80, 7);
    /// let mut roi = Image::empty();
    /// img.get_roi(&mut roi, &Rect::from_xywh(10, 20, 50, 40)).unwrap();
    /// assert_eq!(roi.dimensions(), (50, 40));
    ///
    /// // Regions past the edge are rejected
    /// assert!(img.get_roi(&mut roi, &Rect::from_xywh(80, 60, 50, 50)).is_err());
    /// assert_eq!(roi.dimensions(), (50, 40));
    /// ```
    pub fn get_roi(&self, dst: &mut Image, rect: &Rect) -> Result<()> {
        let (x, y) = (rect.x(), rect.y());
        let (w, h) = rect.extent();
        match (
            u32::try_from(x),
            u32::try_from(y),
            u32::try_from(w),
            u32::try_from(h),
        ) {
            (Ok(x), Ok(y), Ok(w), Ok(h)) => self.get_roi_xywh(dst, x, y, w, h),
            _ => Err(self.region_error(x.into(), y.into(), w, h)),
        }
    }

    /// Copy the region at `(x, y)` of size `w x h` into `dst`.
    ///
    /// See [`Image::get_roi`].
    pub fn get_roi_xywh(&self, dst: &mut Image, x: u32, y: u32, w: u32, h: u32) -> Result<()> {
        if u64::from(x) + u64::from(w) > u64::from(self.width)
            || u64::from(y) + u64::from(h) > u64::from(self.height)
        {
            return Err(self.region_error(x.into(), y.into(), w.into(), h.into()));
        }

        debug!("roi {x},{y} {w}x{h} from {}x{}", self.width, self.height);

        let mut roi = Image::new(w, h);
        if !roi.is_empty() {
            for dy in 0..h {
                let start = x as usize;
                roi.row_mut(dy)
                    .copy_from_slice(&self.row(y + dy)[start..start + w as usize]);
            }
        }
        *dst = roi;
        Ok(())
    }

    /// Extract the region `rect` as a new image.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Image::get_roi`].
    pub fn clip_rect(&self, rect: &Rect) -> Result<Image> {
        let mut roi = Image::empty();
        self.get_roi(&mut roi, rect)?;
        Ok(roi)
    }

    fn region_error(&self, x: i64, y: i64, w: i64, h: i64) -> Error {
        Error::RegionOutOfBounds {
            x,
            y,
            w,
            h,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn ramp(w: u32, h: u32) -> Image {
        let data = (0..w * h).map(|i| (i % 256) as u8).collect();
        Image::from_vec(w, h, data).unwrap()
    }

    #[test]
    fn test_get_roi_copies_region() {
        let img = ramp(10, 10);
        let mut roi = Image::empty();
        img.get_roi(&mut roi, &Rect::from_xywh(2, 3, 4, 2)).unwrap();
        assert_eq!(roi.dimensions(), (4, 2));
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(roi.at(x, y), img.at(x + 2, y + 3));
            }
        }
    }

    #[test]
    fn test_get_roi_whole_image() {
        let img = ramp(6, 4);
        let roi = img.clip_rect(&Rect::from_xywh(0, 0, 6, 4)).unwrap();
        assert_eq!(roi, img);
    }

    #[test]
    fn test_get_roi_out_of_bounds_leaves_dst() {
        let img = ramp(10, 10);
        let mut dst = Image::filled(3, 3, 9);
        let before = dst.clone();

        let err = img
            .get_roi(&mut dst, &Rect::from_xywh(8, 8, 5, 5))
            .unwrap_err();
        assert!(matches!(err, Error::RegionOutOfBounds { x: 8, y: 8, .. }));
        assert_eq!(dst, before);

        assert!(img.get_roi_xywh(&mut dst, 0, 9, 1, 2).is_err());
        assert!(img.get_roi_xywh(&mut dst, u32::MAX, 0, 2, 1).is_err());
        assert_eq!(dst, before);
    }

    #[test]
    fn test_get_roi_negative_rect() {
        let img = ramp(10, 10);
        let mut dst = Image::empty();
        let inverted = Rect::new(Point::new(5, 5), Point::new(2, 8));
        assert!(img.get_roi(&mut dst, &inverted).is_err());
        assert!(img.get_roi(&mut dst, &Rect::from_xywh(-1, 0, 2, 2)).is_err());
    }

    #[test]
    fn test_get_roi_extreme_rect() {
        let img = ramp(10, 10);
        let mut dst = Image::ones(1, 1);
        let huge = Rect::new(Point::new(i32::MIN, 0), Point::new(i32::MAX, 1));
        let err = img.get_roi(&mut dst, &huge).unwrap_err();
        assert!(matches!(
            err,
            Error::RegionOutOfBounds { w, .. } if w == i64::from(u32::MAX)
        ));
        let wide = Rect::new(Point::new(0, 0), Point::new(i32::MAX, 1));
        assert!(img.get_roi(&mut dst, &wide).is_err());
        assert_eq!(dst, Image::ones(1, 1));
    }

    #[test]
    fn test_get_roi_zero_size() {
        let img = ramp(10, 10);
        let mut dst = Image::ones(2, 2);
        img.get_roi_xywh(&mut dst, 3, 3, 0, 5).unwrap();
        assert!(dst.is_empty());
        // Zero width at the right edge is still in bounds
        img.get_roi_xywh(&mut dst, 10, 0, 0, 0).unwrap();
        assert!(dst.is_empty());
    }
}
