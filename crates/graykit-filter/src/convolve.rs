//! Convolution operations
//!
//! Each output pixel is the weighted sum of the source pixels under the
//! kernel footprint, centered on the kernel origin. Taps that fall outside
//! the image are omitted (they contribute nothing), so borders darken for
//! blur kernels. The sum is passed through a scaling function, truncated,
//! and clamped to `[0, 255]`.

use crate::{ImageFilter, Kernel};
use graykit_core::Image;
use log::debug;
use std::fmt;

/// Maps a raw convolution sum to an output level before clamping.
pub type ScalingFn = Box<dyn Fn(f64) -> f64>;

/// Convolve `src` with `kernel` using the identity scaling.
pub fn convolve(src: &Image, kernel: &Kernel) -> Image {
    convolve_scaled(src, kernel, |v| v)
}

/// Convolve `src` with `kernel`, mapping every sum through `scale`.
pub fn convolve_scaled(src: &Image, kernel: &Kernel, scale: impl Fn(f64) -> f64) -> Image {
    let w = src.width() as i64;
    let h = src.height() as i64;
    let kw = kernel.width();
    let kh = kernel.height();
    let rx = kernel.radius_x() as i64;
    let ry = kernel.radius_y() as i64;

    debug!("convolve {w}x{h} with {kw}x{kh} kernel");

    let mut out = Image::new(src.width(), src.height());

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f64;

            for ky in 0..kh {
                let sy = y + ky as i64 - ry;
                if sy < 0 || sy >= h {
                    continue;
                }
                let row = src.row(sy as u32);
                for kx in 0..kw {
                    let sx = x + kx as i64 - rx;
                    if sx < 0 || sx >= w {
                        continue;
                    }
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    sum += f64::from(row[sx as usize]) * k;
                }
            }

            // NaN saturates to 0 in the cast
            *out.at_mut(x as u32, y as u32) = scale(sum).trunc().clamp(0.0, 255.0) as u8;
        }
    }

    out
}

/// Convolution filter
///
/// Owns its kernel and scaling function. Not `Clone`: the scaling function
/// is an arbitrary boxed closure.
///
/// # Examples
///
/// ```
/// use graykit_core::Image;
/// use graykit_filter::{Convolution, ImageFilter, Kernel};
///
/// let src = Image::filled(5, 5, 90);
/// let blur = Convolution::new(Kernel::mean_blur());
/// assert_eq!(blur.apply(&src).at(2, 2), 90);
///
/// // Edge magnitude instead of signed response
/// let sobel = Convolution::with_scaling(Kernel::sobel_vertical(), f64::abs);
/// assert_eq!(sobel.apply(&src).at(2, 2), 0);
/// ```
pub struct Convolution {
    kernel: Kernel,
    scale: ScalingFn,
}

impl Convolution {
    /// Create a convolution with the identity scaling function.
    pub fn new(kernel: Kernel) -> Self {
        Self::with_scaling(kernel, |v| v)
    }

    /// Create a convolution with a custom scaling function.
    pub fn with_scaling<F>(kernel: Kernel, scale: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        Self {
            kernel,
            scale: Box::new(scale),
        }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

impl fmt::Debug for Convolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Convolution")
            .field("kernel", &self.kernel)
            .finish_non_exhaustive()
    }
}

impl ImageFilter for Convolution {
    fn process(&self, src: &Image, dst: &mut Image) {
        *dst = convolve_scaled(src, &self.kernel, &self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: u32, h: u32) -> Image {
        let data = (0..w * h).map(|i| (i * 7 % 256) as u8).collect();
        Image::from_vec(w, h, data).unwrap()
    }

    #[test]
    fn test_identity_exact() {
        let src = ramp(13, 9);
        assert_eq!(convolve(&src, &Kernel::identity()), src);
    }

    #[test]
    fn test_mean_blur_borders_omitted() {
        let src = Image::filled(3, 3, 90);
        let out = convolve(&src, &Kernel::mean_blur());
        // Center sees all 9 taps
        assert_eq!(out.at(1, 1), 90);
        // Corner sees 4 taps: 4 * 90 / 9 = 40
        assert_eq!(out.at(0, 0), 40);
        // Edge sees 6 taps: 6 * 90 / 9 = 60
        assert_eq!(out.at(1, 0), 60);
    }

    #[test]
    fn test_sobel_clamps_negative() {
        // Bright top half, dark bottom half
        let mut src = Image::zeros(5, 6);
        for y in 0..3 {
            src.row_mut(y).fill(200);
        }
        let h = convolve(&src, &Kernel::sobel_horizontal());
        // Top-to-bottom drop gives a negative response, clamped to 0
        assert_eq!(h.at(2, 2), 0);

        let flipped = Convolution::with_scaling(Kernel::sobel_horizontal(), |v| -v).apply(&src);
        assert_eq!(flipped.at(2, 2), 255);
        // Row 0 has no taps above it, leaving only the positive weights
        assert_eq!(h.at(2, 0), 255);
        assert_eq!(flipped.at(2, 0), 0);
    }

    #[test]
    fn test_even_kernel_origin() {
        // 2x1 kernel [a b] with origin at column 1: out(x) = a*src(x-1) + b*src(x)
        let k = Kernel::from_slice(2, 1, &[1.0, 0.0]).unwrap();
        let src = Image::from_vec(3, 1, vec![10, 20, 30]).unwrap();
        assert_eq!(convolve(&src, &k).data(), &[0, 10, 20]);
    }

    #[test]
    fn test_scaling_then_truncate() {
        let src = Image::filled(1, 1, 10);
        let conv = Convolution::with_scaling(Kernel::identity(), |v| v * 0.55);
        assert_eq!(conv.apply(&src).at(0, 0), 5);
        let nan = Convolution::with_scaling(Kernel::identity(), |_| f64::NAN);
        assert_eq!(nan.apply(&src).at(0, 0), 0);
    }

    #[test]
    fn test_process_replaces_dst() {
        let src = ramp(4, 2);
        let mut dst = Image::ones(9, 9);
        Convolution::new(Kernel::identity()).process(&src, &mut dst);
        assert_eq!(dst, src);
        assert!(Convolution::new(Kernel::identity()).apply(&Image::empty()).is_empty());
    }
}
