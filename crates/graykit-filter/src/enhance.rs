//! Pointwise tone mapping
//!
//! Brightness/contrast adjustment and gamma correction are both functions
//! of a single 8-bit input value, so each filter precomputes a 256-entry
//! tone reproduction curve (TRC) at construction and remaps pixels through
//! it.

use crate::{FilterError, FilterResult, ImageFilter};
use graykit_core::Image;
use log::debug;

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input pixel values [0..255] to output pixel values [0..255].
pub type TrcLut = [u8; 256];

/// Generate a linear TRC: `clamp(trunc(alpha * v + beta), 0, 255)`.
///
/// `alpha` scales contrast and `beta` shifts brightness.
pub fn brightness_contrast_trc(alpha: f64, beta: i32) -> TrcLut {
    let beta = f64::from(beta);
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = (i as f64 * alpha + beta).trunc().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Generate a gamma TRC: `min(255, trunc(255 * (v / 255) ^ gamma))`.
///
/// Gamma below 1 brightens dark regions; above 1 darkens bright ones.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `gamma` is negative or
/// not finite.
pub fn gamma_trc(gamma: f64) -> FilterResult<TrcLut> {
    if !gamma.is_finite() || gamma < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "gamma must be a finite value >= 0, got {gamma}"
        )));
    }

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let v = 255.0 * (i as f64 / 255.0).powf(gamma);
        *entry = v.trunc().min(255.0) as u8;
    }
    Ok(lut)
}

/// Remap every pixel of `image` through `lut` in place.
pub fn trc_map(image: &mut Image, lut: &TrcLut) {
    for v in image.data_mut() {
        *v = lut[*v as usize];
    }
}

/// Linear brightness and contrast adjustment
///
/// `dst = clamp(trunc(alpha * src + beta), 0, 255)`
///
/// # Examples
///
/// ```
/// use graykit_core::Image;
/// use graykit_filter::{BrightnessContrast, ImageFilter};
///
/// let src = Image::filled(2, 2, 100);
/// let dst = BrightnessContrast::new(1.5, 10).apply(&src);
/// assert_eq!(dst.at(0, 0), 160);
/// ```
#[derive(Debug, Clone)]
pub struct BrightnessContrast {
    alpha: f64,
    beta: i32,
    lut: TrcLut,
}

impl BrightnessContrast {
    /// Create the filter. `alpha` is the contrast gain, `beta` the
    /// brightness offset.
    pub fn new(alpha: f64, beta: i32) -> Self {
        Self {
            alpha,
            beta,
            lut: brightness_contrast_trc(alpha, beta),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> i32 {
        self.beta
    }

    /// The precomputed lookup table.
    pub fn lut(&self) -> &TrcLut {
        &self.lut
    }
}

impl ImageFilter for BrightnessContrast {
    fn process(&self, src: &Image, dst: &mut Image) {
        debug!(
            "brightness/contrast alpha={} beta={} on {}x{}",
            self.alpha,
            self.beta,
            src.width(),
            src.height()
        );
        let mut out = src.clone();
        trc_map(&mut out, &self.lut);
        *dst = out;
    }
}

/// Power-law gamma correction
///
/// `dst = min(255, trunc(255 * (src / 255) ^ gamma))`
#[derive(Debug, Clone)]
pub struct GammaCorrection {
    gamma: f64,
    lut: TrcLut,
}

impl GammaCorrection {
    /// Create the filter.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `gamma` is negative or
    /// not finite.
    pub fn new(gamma: f64) -> FilterResult<Self> {
        Ok(Self {
            gamma,
            lut: gamma_trc(gamma)?,
        })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The precomputed lookup table.
    pub fn lut(&self) -> &TrcLut {
        &self.lut
    }
}

impl ImageFilter for GammaCorrection {
    fn process(&self, src: &Image, dst: &mut Image) {
        debug!(
            "gamma {} on {}x{}",
            self.gamma,
            src.width(),
            src.height()
        );
        let mut out = src.clone();
        trc_map(&mut out, &self.lut);
        *dst = out;
    }
}
