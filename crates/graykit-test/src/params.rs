//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use graykit_core::Image;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognized means compare.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current index,
/// mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable. No
    /// directories are created here: the output directory appears on the
    /// first written file and the golden directory only in generate mode.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    pub fn compare_images(&mut self, img1: &Image, img2: &Image) -> bool {
        self.compare_images_within(img1, img2, 0)
    }

    /// Compare two images, allowing each pixel to differ by up to `delta`
    pub fn compare_images_within(&mut self, img1: &Image, img2: &Image, delta: u8) -> bool {
        self.index += 1;

        if !img1.sizes_equal(img2) {
            self.fail(format!(
                "Failure in {}_reg: image comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                img1.width(),
                img1.height(),
                img2.width(),
                img2.height()
            ));
            return false;
        }

        let mismatch = img1
            .data()
            .iter()
            .zip(img2.data())
            .position(|(a, b)| a.abs_diff(*b) > delta);

        if let Some(i) = mismatch {
            let w = img1.width() as usize;
            self.fail(format!(
                "Failure in {}_reg: image comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % w,
                i / w
            ));
            return false;
        }

        true
    }

    /// Compare two byte arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            self.fail(format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            ));
            false
        } else {
            true
        }
    }

    /// Write an image as PGM and check it against its golden file
    ///
    /// Without a golden file, compare mode only checks that the written
    /// file reads back as `img`.
    pub fn write_image_and_check(&mut self, img: &Image) -> TestResult<()> {
        self.index += 1;
        fs::create_dir_all(regout_dir())?;

        let local_path = format!(
            "{}/{}.{:02}.pgm",
            regout_dir(),
            self.test_name,
            self.index
        );

        graykit_io::write_image(img, &local_path).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        self.check_file(&local_path, img)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with the golden file when one exists and
    /// otherwise reads the file back and compares it with `img`.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str, img: &Image) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::create_dir_all(golden_dir())?;
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    // Golden files are produced with REGTEST_MODE=generate
                    eprintln!("No golden file, checking read-back: {}", golden_path);
                    let same = graykit_io::read_image(local_path).is_ok_and(|back| &back == img);
                    if !same {
                        self.fail(format!(
                            "Failure in {}_reg, index {}: {} does not read back",
                            self.test_name, self.index, local_path
                        ));
                    }
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data && !Self::same_image_files(local_path, &golden_path)
                {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Compare two image files pixel-by-pixel
    fn same_image_files(path1: &str, path2: &str) -> bool {
        match (graykit_io::read_image(path1), graykit_io::read_image(path2)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Generate);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("bogus"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_images() {
        let mut rp = RegParams::new("test");
        let a = Image::filled(4, 4, 10);
        let mut b = a.clone();
        assert!(rp.compare_images(&a, &b));
        *b.at_mut(3, 2) = 11;
        assert!(rp.compare_images_within(&a, &b, 1));
        assert!(!rp.compare_images(&a, &b));
        assert!(rp.failures()[0].contains("(3, 2)"));
        assert!(!rp.compare_images(&a, &Image::filled(4, 5, 10)));
    }

    #[test]
    fn test_write_image_and_check() {
        let mut rp = RegParams::new("params_write");
        rp.mode = RegTestMode::Compare;
        let img = Image::filled(3, 2, 77);
        rp.write_image_and_check(&img).unwrap();
        assert!(rp.is_success(), "{:?}", rp.failures());
        assert_eq!(rp.index(), 1);
        let written = format!("{}/params_write.01.pgm", regout_dir());
        assert_eq!(graykit_io::read_image(written).unwrap(), img);
    }
}
