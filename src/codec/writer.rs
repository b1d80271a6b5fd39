//! NetPBM encoders: P3, P6, P2 and P5
//!
//! Every variant shares one header shape: magic number, the image's comment
//! block verbatim, `cols rows`, maxval. ASCII bodies put one decimal sample
//! per line; binary bodies are raw bytes with no separators.

use std::fmt;
use std::io::Write;

use super::error::Result;
use crate::image::Image;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// `P3`: red, green, blue as decimal lines
    AsciiColor,
    /// `P6`: red, green, blue as raw bytes
    BinaryColor,
    /// `P2`: gray plane as decimal lines
    AsciiGray,
    /// `P5`: gray plane as raw bytes
    BinaryGray,
}

impl Encoding {
    /// Magic number written at the start of the file.
    pub fn magic(self) -> &'static str {
        match self {
            Encoding::AsciiColor => "P3",
            Encoding::BinaryColor => "P6",
            Encoding::AsciiGray => "P2",
            Encoding::BinaryGray => "P5",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

fn write_header<W: Write>(out: &mut W, image: &Image, encoding: Encoding) -> Result<()> {
    writeln!(out, "{}", encoding.magic())?;
    out.write_all(&image.comment)?;
    writeln!(out, "{} {}", image.cols(), image.rows())?;
    writeln!(out, "{}", image.max_sample)?;
    Ok(())
}

/// Serialize `image` in the given encoding.
///
/// The image is only borrowed; maxval and comment are echoed as captured.
pub fn encode<W: Write>(out: &mut W, image: &Image, encoding: Encoding) -> Result<()> {
    write_header(out, image, encoding)?;

    let (red, green, blue) = (image.red_or_gray(), image.green(), image.blue());
    match encoding {
        Encoding::AsciiColor => {
            for row in 0..image.rows() {
                for col in 0..image.cols() {
                    writeln!(out, "{}", red.get(row, col))?;
                    writeln!(out, "{}", green.get(row, col))?;
                    writeln!(out, "{}", blue.get(row, col))?;
                }
            }
        }
        Encoding::BinaryColor => {
            for row in 0..image.rows() {
                let line: Vec<u8> = red
                    .row(row)
                    .iter()
                    .zip(green.row(row))
                    .zip(blue.row(row))
                    .flat_map(|((&r, &g), &b)| [r, g, b])
                    .collect();
                out.write_all(&line)?;
            }
        }
        Encoding::AsciiGray => {
            for sample in red.as_slice() {
                writeln!(out, "{}", sample)?;
            }
        }
        Encoding::BinaryGray => out.write_all(red.as_slice())?,
    }
    Ok(())
}

/// Serialize `image` into a fresh byte buffer.
pub fn encode_to_vec(image: &Image, encoding: Encoding) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    encode(&mut bytes, image, encoding)?;
    Ok(bytes)
}
