//! graykit-test - Regression test framework for graykit
//!
//! Supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! Golden files live in `tests/golden` at the workspace root and are not
//! committed; that directory is created only by generate mode. Until it
//! is populated, compare mode checks each written image by reading it
//! back.
//!
//! # Usage
//!
//! ```ignore
//! use graykit_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("convolve");
//! rp.compare_values(255.0, pixel as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//! - `RUST_LOG`: Log filter picked up by [`init_logging`]

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use graykit_core::Image;

/// Route `log` output through the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Horizontal-plus-vertical gradient from 0 at the top-left corner to 255
/// at the bottom-right.
pub fn gradient_image(width: u32, height: u32) -> Image {
    let span = (u64::from(width) + u64::from(height)).saturating_sub(2).max(1);
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| (u64::from(x + y) * 255 / span) as u8))
        .collect();
    Image::from_vec(width, height, data).unwrap_or_default()
}

/// Black and white squares of `cell` pixels, white first.
pub fn checkerboard_image(width: u32, height: u32, cell: u32) -> Image {
    let cell = cell.max(1);
    let data = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| if (x / cell + y / cell) % 2 == 0 { 255 } else { 0 })
        })
        .collect();
    Image::from_vec(width, height, data).unwrap_or_default()
}

/// Row-major ramp: pixel `i` holds `i mod 256`.
pub fn ramp_image(width: u32, height: u32) -> Image {
    let n = width as usize * height as usize;
    let data = (0..n).map(|i| (i % 256) as u8).collect();
    Image::from_vec(width, height, data).unwrap_or_default()
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // graykit-test is at crates/graykit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/target/regout", workspace_root())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_corners() {
        let img = gradient_image(16, 16);
        assert_eq!(img.at(0, 0), 0);
        assert_eq!(img.at(15, 15), 255);
        assert!(img.at(8, 0) < img.at(8, 8));
    }

    #[test]
    fn test_checkerboard_cells() {
        let img = checkerboard_image(8, 8, 4);
        assert_eq!(img.at(0, 0), 255);
        assert_eq!(img.at(4, 0), 0);
        assert_eq!(img.at(4, 4), 255);
    }

    #[test]
    fn test_ramp_wraps() {
        let img = ramp_image(300, 1);
        assert_eq!(img.at(255, 0), 255);
        assert_eq!(img.at(256, 0), 0);
    }
}
