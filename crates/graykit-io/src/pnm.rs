//! PGM (Portable Graymap) format support
//!
//! Reads and writes binary PGM (P5) with 8-bit samples:
//!
//! ```text
//! P5 <ws> width <ws> height <ws> maxval <one byte> <width * height bytes>
//! ```
//!
//! The reader accepts any run of ASCII whitespace between header tokens,
//! skips exactly one byte after `maxval`, and does not interpret `maxval`
//! beyond requiring an integer. Header comments (`#`) are not supported.
//! ASCII PGM (P2) and the other PNM variants are rejected.

use crate::format::magic;
use crate::{IoError, IoResult};
use graykit_core::Image;
use std::io::{BufRead, Read, Write};

/// Longest header token accepted before the header is declared malformed.
const MAX_TOKEN_LEN: usize = 32;

/// Read a P5 image from a reader.
///
/// # Errors
///
/// - [`IoError::InvalidData`] for a wrong magic or malformed header
/// - [`IoError::Truncated`] if the payload is shorter than `width * height`
/// - [`IoError::Io`] for read failures
pub fn read_pgm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    let magic_token = next_token(&mut reader, "magic number")?;
    if magic_token.as_bytes() != magic::PGM_BINARY {
        return Err(IoError::InvalidData(format!(
            "expected P5 magic, found {magic_token:?}"
        )));
    }

    let width: u32 = parse_field(&mut reader, "width")?;
    let height: u32 = parse_field(&mut reader, "height")?;
    let _maxval: i64 = parse_field(&mut reader, "maxval")?;

    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| IoError::InvalidData(format!("image too large: {width}x{height}")))?;

    // Single separator byte after maxval
    let mut sep = [0u8; 1];
    let sep_read = reader.read(&mut sep)?;
    if sep_read == 0 && expected > 0 {
        return Err(IoError::Truncated {
            expected,
            actual: 0,
        });
    }

    let mut data = Vec::with_capacity(expected.min(1 << 24));
    reader.by_ref().take(expected as u64).read_to_end(&mut data)?;
    if data.len() < expected {
        return Err(IoError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    Ok(Image::from_vec(width, height, data)?)
}

/// Write an image as P5 to a writer.
///
/// Emits exactly `P5\n{width} {height}\n255\n` followed by the raw rows.
pub fn write_pgm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", image.width(), image.height())?;
    writer.write_all(image.data())?;
    Ok(())
}

/// Read a P5 image from memory.
pub fn read_pgm_mem(data: &[u8]) -> IoResult<Image> {
    read_pgm(data)
}

/// Encode an image as P5 in memory.
pub fn write_pgm_mem(image: &Image) -> IoResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(image.data().len() + 32);
    write_pgm(image, &mut buf)?;
    Ok(buf)
}

/// Read the next whitespace-delimited header token.
///
/// The delimiter that ends the token is left in the reader.
fn next_token<R: BufRead>(reader: &mut R, what: &str) -> IoResult<String> {
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut done = false;
        for &b in buf {
            if b.is_ascii_whitespace() {
                if token.is_empty() {
                    used += 1;
                    continue;
                }
                done = true;
                break;
            }
            token.push(b);
            used += 1;
            if token.len() > MAX_TOKEN_LEN {
                return Err(IoError::InvalidData(format!("{what} token too long")));
            }
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(IoError::InvalidData(format!(
            "header ended before {what}"
        )));
    }
    String::from_utf8(token)
        .map_err(|_| IoError::InvalidData(format!("{what} is not ASCII")))
}

fn parse_field<R: BufRead, T: std::str::FromStr>(reader: &mut R, what: &str) -> IoResult<T> {
    let token = next_token(reader, what)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad {what}: {token:?}")))
}
