//! Convolution kernels
//!
//! A kernel is a dense `width x height` grid of weights stored row-major.
//! Its origin is the cell at `(width / 2, height / 2)`, so even-sized
//! kernels reach one cell further to the left/top than to the right/bottom.

use crate::{FilterError, FilterResult};
use std::fmt;
use std::str::FromStr;

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a zero-filled kernel with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        })
    }

    /// Create a kernel from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is 0 or
    /// `data.len() != width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "{width}x{height} kernel needs {} values, got {}",
                kernel.data.len(),
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Build a 3x3 kernel from rows. Always valid.
    fn from_3x3(rows: [[f64; 3]; 3]) -> Self {
        Self {
            width: 3,
            height: 3,
            data: rows.concat(),
        }
    }

    /// 3x3 identity: the center weight is 1, all others 0.
    pub fn identity() -> Self {
        Self::from_3x3([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]])
    }

    /// 3x3 mean blur: all weights are 1/9.
    pub fn mean_blur() -> Self {
        Self::from_3x3([[1.0 / 9.0; 3]; 3])
    }

    /// 3x3 Gaussian blur with weights `[1 2 1; 2 4 2; 1 2 1] / 16`.
    pub fn gaussian_blur() -> Self {
        Self::from_3x3([
            [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
            [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
            [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
        ])
    }

    /// Sobel kernel responding to horizontal edges (vertical gradient).
    pub fn sobel_horizontal() -> Self {
        Self::from_3x3([[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]])
    }

    /// Sobel kernel responding to vertical edges (horizontal gradient).
    pub fn sobel_vertical() -> Self {
        Self::from_3x3([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]])
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal reach from the origin (`width / 2`).
    #[inline]
    pub fn radius_x(&self) -> u32 {
        self.width / 2
    }

    /// Vertical reach from the origin (`height / 2`).
    #[inline]
    pub fn radius_y(&self) -> u32 {
        self.height / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the weight at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the weight at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `(x, y)` lies outside
    /// the kernel.
    pub fn set(&mut self, x: u32, y: u32, value: f64) -> FilterResult<()> {
        if x >= self.width || y >= self.height {
            return Err(FilterError::InvalidParameters(format!(
                "kernel cell ({x}, {y}) outside {}x{} kernel",
                self.width, self.height
            )));
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Scale the weights so that they sum to 1.
    ///
    /// A kernel whose weights sum to (nearly) zero, like a Sobel kernel, is
    /// left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() < 1e-12 {
            return;
        }
        for v in &mut self.data {
            *v /= sum;
        }
    }
}

/// The kernels offered by the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelPreset {
    Identity,
    MeanBlur,
    GaussianBlur,
    SobelHorizontal,
    SobelVertical,
}

impl KernelPreset {
    /// All presets in menu order.
    pub const ALL: [KernelPreset; 5] = [
        Self::Identity,
        Self::MeanBlur,
        Self::GaussianBlur,
        Self::SobelHorizontal,
        Self::SobelVertical,
    ];

    /// Stable short name, also used as the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::MeanBlur => "mean_blur",
            Self::GaussianBlur => "gaussian_blur",
            Self::SobelHorizontal => "sobel_h",
            Self::SobelVertical => "sobel_v",
        }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Identity => "Identity kernel",
            Self::MeanBlur => "Mean blur kernel",
            Self::GaussianBlur => "3x3 Gaussian blur kernel",
            Self::SobelHorizontal => "Horizontal Sobel kernel",
            Self::SobelVertical => "Vertical Sobel kernel",
        }
    }

    /// Build the kernel.
    pub fn kernel(self) -> Kernel {
        match self {
            Self::Identity => Kernel::identity(),
            Self::MeanBlur => Kernel::mean_blur(),
            Self::GaussianBlur => Kernel::gaussian_blur(),
            Self::SobelHorizontal => Kernel::sobel_horizontal(),
            Self::SobelVertical => Kernel::sobel_vertical(),
        }
    }
}

impl fmt::Display for KernelPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelPreset {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| FilterError::InvalidKernel(format!("unknown kernel preset {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_new() {
        let k = Kernel::new(3, 5).unwrap();
        assert_eq!((k.width(), k.height()), (3, 5));
        assert_eq!((k.radius_x(), k.radius_y()), (1, 2));
        assert_eq!(k.sum(), 0.0);
        assert!(Kernel::new(0, 3).is_err());
        assert!(Kernel::new(3, 0).is_err());
    }

    #[test]
    fn test_kernel_from_slice() {
        let k = Kernel::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(k.get(1, 0), Some(2.0));
        assert_eq!(k.get(0, 1), Some(3.0));
        assert_eq!(k.get(2, 0), None);
        assert_eq!((k.radius_x(), k.radius_y()), (1, 1));
        assert!(matches!(
            Kernel::from_slice(2, 2, &[1.0; 3]),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_kernel_set_and_normalize() {
        let mut k = Kernel::new(2, 1).unwrap();
        k.set(0, 0, 1.0).unwrap();
        k.set(1, 0, 3.0).unwrap();
        assert!(k.set(2, 0, 1.0).is_err());
        k.normalize();
        assert!((k.get(0, 0).unwrap() - 0.25).abs() < 1e-12);
        assert!((k.sum() - 1.0).abs() < 1e-12);

        let mut sobel = Kernel::sobel_horizontal();
        sobel.normalize();
        assert_eq!(sobel, Kernel::sobel_horizontal());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Kernel::identity().sum(), 1.0);
        assert!((Kernel::mean_blur().sum() - 1.0).abs() < 1e-12);
        assert!((Kernel::gaussian_blur().sum() - 1.0).abs() < 1e-12);
        assert_eq!(Kernel::gaussian_blur().get(1, 1), Some(0.25));
        assert_eq!(Kernel::sobel_horizontal().get(1, 0), Some(-2.0));
        assert_eq!(Kernel::sobel_vertical().get(0, 1), Some(-2.0));
        assert_eq!(Kernel::sobel_vertical().sum(), 0.0);
    }

    #[test]
    fn test_preset_names() {
        let names: Vec<_> = KernelPreset::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            ["identity", "mean_blur", "gaussian_blur", "sobel_h", "sobel_v"]
        );
        for p in KernelPreset::ALL {
            assert_eq!(p.to_string().parse::<KernelPreset>().unwrap(), p);
        }
        assert!("sharpen".parse::<KernelPreset>().is_err());
        assert_eq!(KernelPreset::SobelVertical.kernel(), Kernel::sobel_vertical());
    }
}
