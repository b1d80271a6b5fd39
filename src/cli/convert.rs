//! Read → transform → write pipeline behind the command line

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;

use crate::codec::{read_image, CodecError};
use crate::config::{load_config, PnmConfig};
use crate::output::{generate_output_path, select_encoding, write_image, OutputError, OutputType};
use crate::telemetry::{ErrorCollector, ErrorEntry};
use crate::transforms::{apply_transform, Transform};

use super::EXIT_SUCCESS;

/// A failure at one stage of a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Opening or decoding the input
    #[error(transparent)]
    Read(CodecError),
    /// Applying the transform
    #[error(transparent)]
    Transform(CodecError),
    /// Encoding or writing the output
    #[error(transparent)]
    Write(#[from] OutputError),
}

impl ConvertError {
    /// Pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            ConvertError::Read(_) => "read",
            ConvertError::Transform(_) => "transform",
            ConvertError::Write(_) => "write",
        }
    }

    /// Error category.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Read(e) | ConvertError::Transform(e) => e.kind(),
            ConvertError::Write(e) => e.kind(),
        }
    }
}

/// Decode `input`, apply `transform` if given, and write the result next to
/// `basename`. Returns the path written.
///
/// Nothing is created on disk unless decoding and the transform succeed.
pub fn convert(
    input: &Path,
    basename: &Path,
    transform: Option<Transform>,
    output_type: OutputType,
    config: &PnmConfig,
) -> Result<PathBuf, ConvertError> {
    let mut image = read_image(input).map_err(ConvertError::Read)?;

    if let Some(transform) = transform {
        apply_transform(&mut image, transform).map_err(ConvertError::Transform)?;
    }

    let encoding = select_encoding(transform, output_type);
    let path = generate_output_path(basename, transform);
    write_image(&path, &image, encoding, config.output.create_dirs)?;
    Ok(path)
}

/// Execute a conversion and report the outcome.
pub fn run_convert(
    input: &Path,
    basename: &Path,
    transform: Option<Transform>,
    output_type: OutputType,
) -> ExitCode {
    // Without a config there is no error log to write to.
    let config = match load_config(None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_SUCCESS);
        }
    };

    let collector =
        ErrorCollector::new(&config.telemetry.error_log, config.telemetry.collect_errors);

    match convert(input, basename, transform, output_type, &config) {
        Ok(path) => eprintln!("Wrote: {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            if collector.is_enabled() {
                let entry = ErrorEntry::new(e.stage(), e.kind(), e.to_string())
                    .with_file(input.display().to_string());
                let _ = collector.log(&entry);
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
