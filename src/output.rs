//! Output selection, file naming and writing

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::{encode_to_vec, CodecError, Encoding};
use crate::image::Image;
use crate::transforms::Transform;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// Parent directory could not be created
    #[error("Unable to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Output file could not be created or written
    #[error("Unable to open output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Serialization failed
    #[error(transparent)]
    Encode(#[from] CodecError),
}

impl OutputError {
    /// Short machine-readable category, used by the error log.
    pub fn kind(&self) -> &'static str {
        match self {
            OutputError::CreateDir { .. } | OutputError::Write { .. } => "io_error",
            OutputError::Encode(e) => e.kind(),
        }
    }
}

/// Sample representation requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputType {
    /// Decimal text samples (`--ascii`)
    Ascii,
    /// Raw byte samples (`--binary`)
    Binary,
}

/// Choose the encoder for a run.
///
/// The gray encoders are used exactly when the grayscale transform was
/// requested; the pixel data itself is not inspected.
///
/// | Transform | `--ascii` | `--binary` |
/// |-----------|-----------|------------|
/// | `--grayscale` | P2 | P5 |
/// | anything else or none | P3 | P6 |
pub fn select_encoding(transform: Option<Transform>, output_type: OutputType) -> Encoding {
    let gray = transform == Some(Transform::Grayscale);
    match (gray, output_type) {
        (true, OutputType::Ascii) => Encoding::AsciiGray,
        (true, OutputType::Binary) => Encoding::BinaryGray,
        (false, OutputType::Ascii) => Encoding::AsciiColor,
        (false, OutputType::Binary) => Encoding::BinaryColor,
    }
}

/// Build the output file name: `basename.pgm` for grayscale, else `basename.ppm`.
///
/// The extension is appended, never substituted, so `out.v2` becomes
/// `out.v2.ppm`.
///
/// # Arguments
///
/// * `basename` - Output path without extension, as given on the command line
/// * `transform` - The transform being applied, if any
///
/// # Returns
///
/// The path the image should be written to
///
/// # Example
/// ```ignore
/// let path = generate_output_path(Path::new("out"), Some(Transform::Grayscale));
/// assert_eq!(path, PathBuf::from("out.pgm"));
/// ```
pub fn generate_output_path(basename: &Path, transform: Option<Transform>) -> PathBuf {
    let extension = if transform == Some(Transform::Grayscale) { ".pgm" } else { ".ppm" };
    let mut name = OsString::from(basename.as_os_str());
    name.push(extension);
    PathBuf::from(name)
}

/// Encode `image` and write it to `path` in one call.
///
/// The whole file is serialized in memory first. If writing fails, any
/// partially written file is removed.
///
/// # Arguments
///
/// * `path` - The output file path
/// * `image` - The image to save
/// * `encoding` - Which of P3, P6, P2 or P5 to emit
/// * `create_dirs` - Create missing parent directories first
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(OutputError)` on failure, with no file left at `path`
pub fn write_image(
    path: &Path,
    image: &Image,
    encoding: Encoding,
    create_dirs: bool,
) -> Result<(), OutputError> {
    let bytes = encode_to_vec(image, encoding)?;

    if create_dirs {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
    }

    if let Err(source) = fs::write(path, &bytes) {
        let _ = fs::remove_file(path);
        return Err(OutputError::Write { path: path.to_path_buf(), source });
    }
    Ok(())
}
