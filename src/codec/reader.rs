//! NetPBM decoder for colour images (P3 and P6)
//!
//! Header layout: magic number, one delimiter, zero or more contiguous `#`
//! comment lines, then width, height and maxval as whitespace-separated
//! integers followed by exactly one delimiter before the pixel payload.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use std::str::FromStr;

use super::error::{CodecError, Result};
use crate::image::{Image, InputFormat};
use crate::plane::Plane;

/// Header and sample delimiters: space, tab, newline, carriage return,
/// vertical tab, form feed.
fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Byte-level cursor over a buffered stream.
struct Scanner<R> {
    inner: R,
}

impl<R: BufRead> Scanner<R> {
    fn new(inner: R) -> Self {
        Self { inner }
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        Ok(self.inner.fill_buf()?.first().copied())
    }

    fn bump(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    fn skip_delimiters(&mut self) -> io::Result<()> {
        while let Some(byte) = self.peek()? {
            if !is_delimiter(byte) {
                break;
            }
            self.inner.consume(1);
        }
        Ok(())
    }

    /// Next whitespace-delimited token, or `None` at end of stream.
    fn token(&mut self) -> io::Result<Option<String>> {
        self.skip_delimiters()?;
        let mut bytes = Vec::new();
        while let Some(byte) = self.peek()? {
            if is_delimiter(byte) {
                break;
            }
            bytes.push(byte);
            self.inner.consume(1);
        }
        if bytes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        }
    }

    /// Append the rest of the current line to `out`, always ending in `\n`.
    fn line_into(&mut self, out: &mut Vec<u8>) -> io::Result<()> {
        self.inner.read_until(b'\n', out)?;
        if out.last() != Some(&b'\n') {
            out.push(b'\n');
        }
        Ok(())
    }

    fn header_field<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        let token = self.token()?.ok_or(CodecError::UnexpectedEof(field))?;
        token.parse().map_err(|_| CodecError::InvalidHeader { field, token })
    }

    /// One ASCII sample, narrowed to its low byte.
    fn ascii_sample(&mut self, row: usize, col: usize) -> Result<u8> {
        let token = self.token()?.ok_or(CodecError::UnexpectedEof("pixel data"))?;
        let value: i64 =
            token.parse().map_err(|_| CodecError::InvalidSample { row, col, token })?;
        Ok(value as u8)
    }

    fn binary_pixel(&mut self) -> Result<[u8; 3]> {
        let mut px = [0u8; 3];
        self.inner.read_exact(&mut px).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => CodecError::UnexpectedEof("pixel data"),
            _ => CodecError::Io(e),
        })?;
        Ok(px)
    }
}

/// Decode a P3 or P6 image.
///
/// The stream is rewound to its start first, so it may be positioned
/// anywhere on entry.
pub fn decode<R: Read + Seek>(mut reader: R) -> Result<Image> {
    reader.seek(SeekFrom::Start(0))?;
    let mut scanner = Scanner::new(BufReader::new(reader));

    let magic = scanner.token()?.unwrap_or_default();
    let format = InputFormat::from_magic(&magic).ok_or(CodecError::InvalidMagic(magic))?;
    scanner.bump()?;

    let mut comment = Vec::new();
    while scanner.peek()? == Some(b'#') {
        scanner.line_into(&mut comment)?;
    }

    let cols: usize = scanner.header_field("width")?;
    let rows: usize = scanner.header_field("height")?;
    let max_sample: u32 = scanner.header_field("maxval")?;
    scanner.bump()?;

    // Reserved but untouched: a header promising more than the body holds
    // fails on the first missing sample without paging in the whole image.
    let mut red = Plane::reserve(rows, cols)?;
    let mut green = Plane::reserve(rows, cols)?;
    let mut blue = Plane::reserve(rows, cols)?;

    for row in 0..rows {
        for col in 0..cols {
            let [r, g, b] = match format {
                InputFormat::AsciiColor => [
                    scanner.ascii_sample(row, col)?,
                    scanner.ascii_sample(row, col)?,
                    scanner.ascii_sample(row, col)?,
                ],
                InputFormat::BinaryColor => scanner.binary_pixel()?,
            };
            red.push(r);
            green.push(g);
            blue.push(b);
        }
    }

    Ok(Image::assemble(
        format,
        comment,
        max_sample,
        Plane::from_samples(rows, cols, red),
        Plane::from_samples(rows, cols, green),
        Plane::from_samples(rows, cols, blue),
    ))
}

/// Open and decode the image at `path`.
pub fn read_image(path: &Path) -> Result<Image> {
    let file =
        File::open(path).map_err(|source| CodecError::Open { path: path.to_path_buf(), source })?;
    decode(file)
}
