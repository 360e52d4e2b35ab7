//! Interactive session state

use super::{CliError, CliResult};
use graykit_core::{Image, Point, draw_circle, draw_line, draw_rectangle};
use graykit_filter::ImageFilter;
use graykit_io::{ImageFileExt, read_image, validate_input_path};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Output file for brightness/contrast results.
pub const BRIGHTNESS_CONTRAST_FILE: &str = "brightness_contrast.pgm";
/// Output file for gamma correction results.
pub const GAMMA_FILE: &str = "gamma_corrected.pgm";
/// Output file for drawing results.
pub const DRAWN_SHAPE_FILE: &str = "drawn_shape.pgm";

/// A shape to draw onto the loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle { center: Point, radius: i32 },
    Line { from: Point, to: Point },
    Rectangle { top_left: Point, bottom_right: Point },
}

impl Shape {
    /// Rasterize the shape onto `image`, clipping at the borders.
    pub fn draw(&self, image: &mut Image, value: u8) {
        match *self {
            Shape::Circle { center, radius } => draw_circle(image, center, radius, value),
            Shape::Line { from, to } => draw_line(image, from, to, value),
            Shape::Rectangle {
                top_left,
                bottom_right,
            } => draw_rectangle(image, top_left, bottom_right, value),
        }
    }
}

/// The loaded image and output location shared by all menu actions.
#[derive(Debug, Default)]
pub struct Session {
    image: Option<Image>,
    output_dir: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a PGM file, replacing the current image.
    ///
    /// The path must exist and end in `.pgm`. On failure the previous image
    /// stays loaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> CliResult<()> {
        let path = path.as_ref();
        validate_input_path(path).map_err(CliError::InvalidFormat)?;
        let image = read_image(path).map_err(CliError::Load)?;
        info!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.image = Some(image);
        Ok(())
    }

    /// Set the output directory, creating it when absent.
    ///
    /// Returns `true` if the directory was created. An empty path resets
    /// output to the current directory.
    pub fn set_output_dir<P: AsRef<Path>>(&mut self, dir: P) -> CliResult<bool> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            self.output_dir = None;
            return Ok(false);
        }

        let created = !dir.exists();
        if created {
            fs::create_dir_all(dir)?;
            debug!("created output directory {}", dir.display());
        }
        self.output_dir = Some(dir.to_path_buf());
        Ok(created)
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Where an output file named `file_name` is written.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// The loaded image.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoImageLoaded`] before a successful load.
    pub fn image(&self) -> CliResult<&Image> {
        self.image.as_ref().ok_or(CliError::NoImageLoaded)
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Filter the loaded image into a new file; the loaded image is kept.
    pub fn apply_filter(&self, filter: &dyn ImageFilter, file_name: &str) -> CliResult<PathBuf> {
        let result = filter.apply(self.image()?);
        let path = self.output_path(file_name);
        save_to(&result, path)
    }

    /// Draw onto the loaded image and save it as [`DRAWN_SHAPE_FILE`].
    ///
    /// Shapes accumulate: later draws see earlier ones.
    pub fn draw(&mut self, shape: &Shape, value: u8) -> CliResult<PathBuf> {
        let path = self.output_path(DRAWN_SHAPE_FILE);
        let image = self.image.as_mut().ok_or(CliError::NoImageLoaded)?;
        shape.draw(image, value);
        debug!("drew {shape:?} with value {value}");
        save_to(image, path)
    }
}

fn save_to(image: &Image, path: PathBuf) -> CliResult<PathBuf> {
    match image.save(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(CliError::Save { path, source }),
    }
}
