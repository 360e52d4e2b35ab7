//! graykit-io - Image I/O for graykit
//!
//! Reads and writes binary PGM (P5) files.
//!
//! # Examples
//!
//! ```no_run
//! use graykit_io::{ImageFileExt, read_image, write_image};
//!
//! let img = read_image("input.pgm").unwrap();
//! write_image(&img, "output.pgm").unwrap();
//!
//! let mut reloaded = graykit_core::Image::empty();
//! reloaded.load("input.pgm").unwrap();
//! ```

mod error;
pub mod format;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_pgm, has_pgm_extension, is_pgm_magic, validate_input_path};
pub use pnm::{read_pgm, read_pgm_mem, write_pgm, write_pgm_mem};

use graykit_core::Image;
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let image = read_pgm(BufReader::new(file))?;
    debug!(
        "read {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Write an image to a file path, creating or truncating the file.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pgm(image, &mut writer)?;
    writer.flush()?;
    debug!(
        "wrote {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

/// File persistence for [`Image`].
pub trait ImageFileExt {
    /// Replace the image with the contents of a PGM file.
    ///
    /// On any failure the image is left unchanged.
    fn load<P: AsRef<Path>>(&mut self, path: P) -> IoResult<()>;

    /// Save the image as a PGM file.
    fn save<P: AsRef<Path>>(&self, path: P) -> IoResult<()>;
}

impl ImageFileExt for Image {
    fn load<P: AsRef<Path>>(&mut self, path: P) -> IoResult<()> {
        *self = read_image(path)?;
        Ok(())
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        write_image(self, path)
    }
}
