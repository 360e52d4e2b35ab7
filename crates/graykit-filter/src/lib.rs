//! graykit-filter - Image filtering operations
//!
//! This crate provides filters over 8-bit grayscale images:
//!
//! - Brightness/contrast adjustment and gamma correction (lookup tables)
//! - Convolution with arbitrary kernels and a custom scaling function
//! - The standard 3x3 kernels: identity, mean blur, Gaussian blur, Sobel
//!
//! Every filter implements [`ImageFilter`].

pub mod convolve;
pub mod enhance;
mod error;
mod filter;
pub mod kernel;

pub use convolve::{Convolution, ScalingFn, convolve, convolve_scaled};
pub use enhance::{
    BrightnessContrast, GammaCorrection, TrcLut, brightness_contrast_trc, gamma_trc, trc_map,
};
pub use error::{FilterError, FilterResult};
pub use filter::ImageFilter;
pub use kernel::{Kernel, KernelPreset};
