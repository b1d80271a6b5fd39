//! In-memory image model
//!
//! An [`Image`] owns three equally sized channel planes plus the header
//! metadata captured at read time (magic number, comment block, maxval).

use std::fmt;

use crate::plane::Plane;

/// Encoding of the file an image was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// `P3`: whitespace-separated decimal samples
    AsciiColor,
    /// `P6`: raw bytes, three per pixel
    BinaryColor,
}

impl InputFormat {
    /// Map a magic number token to a supported input format.
    pub fn from_magic(magic: &str) -> Option<Self> {
        match magic {
            "P3" => Some(Self::AsciiColor),
            "P6" => Some(Self::BinaryColor),
            _ => None,
        }
    }

    /// The magic number token for this format.
    pub fn magic(self) -> &'static str {
        match self {
            Self::AsciiColor => "P3",
            Self::BinaryColor => "P6",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

/// A decoded colour image.
///
/// All three planes always share the same dimensions; `rows()` and `cols()`
/// are read from them. After a grayscale conversion only `red_or_gray` holds
/// meaningful samples and `green`/`blue` are stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    /// Format of the source file
    pub format: InputFormat,
    /// Comment lines from the header, each ending in `\n`, kept verbatim
    pub comment: Vec<u8>,
    /// Declared maximum sample value, echoed on output
    pub max_sample: u32,
    red_or_gray: Plane,
    green: Plane,
    blue: Plane,
}

impl Image {
    /// Assemble an image from three planes.
    ///
    /// Returns `None` if the planes differ in size.
    pub fn new(
        format: InputFormat,
        comment: Vec<u8>,
        max_sample: u32,
        red_or_gray: Plane,
        green: Plane,
        blue: Plane,
    ) -> Option<Self> {
        let image = Self { format, comment, max_sample, red_or_gray, green, blue };
        image.planes_agree().then_some(image)
    }

    /// Assemble an image from planes the caller allocated with equal sizes.
    pub(crate) fn assemble(
        format: InputFormat,
        comment: Vec<u8>,
        max_sample: u32,
        red_or_gray: Plane,
        green: Plane,
        blue: Plane,
    ) -> Self {
        let image = Self { format, comment, max_sample, red_or_gray, green, blue };
        debug_assert!(image.planes_agree());
        image
    }

    /// Build an image from row-major RGB triples, with no comment and maxval 255.
    ///
    /// Returns `None` if `pixels.len() != rows * cols`.
    pub fn from_pixels(
        format: InputFormat,
        rows: usize,
        cols: usize,
        pixels: &[[u8; 3]],
    ) -> Option<Self> {
        let split = |channel: usize| pixels.iter().map(|px| px[channel]).collect::<Vec<u8>>();
        Self::new(
            format,
            Vec::new(),
            255,
            Plane::from_vec(rows, cols, split(0))?,
            Plane::from_vec(rows, cols, split(1))?,
            Plane::from_vec(rows, cols, split(2))?,
        )
    }

    fn planes_agree(&self) -> bool {
        let dims = |p: &Plane| (p.rows(), p.cols());
        dims(&self.red_or_gray) == dims(&self.green) && dims(&self.green) == dims(&self.blue)
    }

    /// Number of pixel rows
    pub fn rows(&self) -> usize {
        self.red_or_gray.rows()
    }

    /// Number of pixel columns
    pub fn cols(&self) -> usize {
        self.red_or_gray.cols()
    }

    /// Red plane, or the gray plane after grayscale conversion
    pub fn red_or_gray(&self) -> &Plane {
        &self.red_or_gray
    }

    /// Green plane
    pub fn green(&self) -> &Plane {
        &self.green
    }

    /// Blue plane
    pub fn blue(&self) -> &Plane {
        &self.blue
    }

    /// The RGB triple at (`row`, `col`).
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.red_or_gray.get(row, col),
            self.green.get(row, col),
            self.blue.get(row, col),
        ]
    }

    /// Mutable access to the samples of all three planes at once.
    pub fn samples_mut(&mut self) -> (&mut [u8], &mut [u8], &mut [u8]) {
        (
            self.red_or_gray.as_mut_slice(),
            self.green.as_mut_slice(),
            self.blue.as_mut_slice(),
        )
    }

    /// Swap in a fully populated set of planes, dropping the old ones.
    ///
    /// The new planes must agree with each other in size; they may differ
    /// from the current ones (rotations swap rows and columns).
    pub(crate) fn replace_planes(&mut self, red_or_gray: Plane, green: Plane, blue: Plane) {
        debug_assert!(
            (red_or_gray.rows(), red_or_gray.cols()) == (green.rows(), green.cols())
                && (green.rows(), green.cols()) == (blue.rows(), blue.cols())
        );
        self.red_or_gray = red_or_gray;
        self.green = green;
        self.blue = blue;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_magic() {
        assert_eq!(InputFormat::from_magic("P3"), Some(InputFormat::AsciiColor));
        assert_eq!(InputFormat::from_magic("P6"), Some(InputFormat::BinaryColor));
        assert_eq!(InputFormat::from_magic("P2"), None);
        assert_eq!(InputFormat::from_magic("p6"), None);
        assert_eq!(InputFormat::BinaryColor.to_string(), "P6");
    }

    #[test]
    fn test_new_rejects_mismatched_planes() {
        let a = Plane::new(2, 3).unwrap();
        let b = Plane::new(3, 2).unwrap();
        assert!(Image::new(InputFormat::AsciiColor, Vec::new(), 255, a.clone(), a.clone(), b)
            .is_none());
        assert!(Image::new(InputFormat::AsciiColor, Vec::new(), 255, a.clone(), a.clone(), a)
            .is_some());
    }

    #[test]
    fn test_from_pixels_splits_channels() {
        let image =
            Image::from_pixels(InputFormat::BinaryColor, 1, 2, &[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(image.rows(), 1);
        assert_eq!(image.cols(), 2);
        assert_eq!(image.red_or_gray().as_slice(), &[1, 4]);
        assert_eq!(image.green().as_slice(), &[2, 5]);
        assert_eq!(image.blue().as_slice(), &[3, 6]);
        assert_eq!(image.pixel(0, 1), [4, 5, 6]);
    }

    #[test]
    fn test_from_pixels_wrong_count() {
        assert!(Image::from_pixels(InputFormat::BinaryColor, 2, 2, &[[0, 0, 0]]).is_none());
    }
}
