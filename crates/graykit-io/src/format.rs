//! Image format detection
//!
//! Recognizes binary PGM by its magic number and input paths by their
//! `.pgm` suffix.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for format detection
pub(crate) mod magic {
    /// Binary PGM: "P5"
    pub const PGM_BINARY: &[u8] = b"P5";
}

/// File extension written and accepted for PGM files
pub const PGM_EXTENSION: &str = "pgm";

/// Check whether `data` starts with a binary PGM magic number.
///
/// The magic must be followed by whitespace, or be the whole input.
pub fn is_pgm_magic(data: &[u8]) -> bool {
    data.starts_with(magic::PGM_BINARY)
        && data
            .get(magic::PGM_BINARY.len())
            .is_none_or(|b| b.is_ascii_whitespace())
}

/// Check whether the file at `path` starts with a binary PGM magic number.
pub fn detect_pgm<P: AsRef<Path>>(path: P) -> IoResult<bool> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 3];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    Ok(is_pgm_magic(&header[..bytes_read]))
}

/// Check whether `path` ends in `.pgm` (case-sensitive).
pub fn has_pgm_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext == PGM_EXTENSION)
}

/// Validate a path given as image input: it must exist and end in `.pgm`.
///
/// # Errors
///
/// - [`IoError::Io`] with `NotFound` if nothing exists at `path`
/// - [`IoError::UnsupportedFormat`] if the suffix is not `.pgm`
pub fn validate_input_path<P: AsRef<Path>>(path: P) -> IoResult<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )));
    }
    if !has_pgm_extension(path) {
        return Err(IoError::UnsupportedFormat(format!(
            "{} is not a .{PGM_EXTENSION} file",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pgm_magic() {
        assert!(is_pgm_magic(b"P5\n100 100\n255\n"));
        assert!(is_pgm_magic(b"P5 "));
        assert!(is_pgm_magic(b"P5"));
        assert!(!is_pgm_magic(b"P6\n100 100\n255\n"));
        assert!(!is_pgm_magic(b"P2\n"));
        assert!(!is_pgm_magic(b"P55"));
        assert!(!is_pgm_magic(b"P"));
    }

    #[test]
    fn test_pgm_extension() {
        assert!(has_pgm_extension("a/b/photo.pgm"));
        assert!(!has_pgm_extension("photo.PGM"));
        assert!(!has_pgm_extension("photo.pgm.bak"));
        assert!(!has_pgm_extension("photo"));
    }

    #[test]
    fn test_validate_missing_path() {
        let err = validate_input_path("/definitely/not/here.pgm").unwrap_err();
        assert!(matches!(err, IoError::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
    }
}
