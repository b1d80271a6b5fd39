//! Command-line interface implementation
//!
//! This module parses the command line and dispatches to [`convert`], which
//! runs the read → transform → write pipeline.

mod convert;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::output::OutputType;
use crate::transforms::Transform;

pub use convert::{convert, ConvertError};

/// Exit code for every outcome.
///
/// Usage, I/O, format and allocation errors are reported on stderr and
/// leave no output file behind, but the process still exits with 0.
pub(crate) const EXIT_SUCCESS: u8 = 0;

/// pnmtool - Flip, rotate or recolor a PPM image and write it as PPM or PGM
#[derive(Parser, Debug)]
#[command(name = "pnmtool")]
#[command(about = "Read a P3/P6 image, apply at most one transform, and write it as P3, P6, P2 or P5")]
#[command(version)]
#[command(override_usage = "pnmtool [OPTION] --ascii|--binary <BASENAME> <INPUT>")]
pub struct Cli {
    #[command(flatten)]
    pub transform: TransformArgs,

    #[command(flatten)]
    pub output_type: OutputTypeArgs,

    /// Output file name without extension (.pgm is appended for --grayscale, .ppm otherwise)
    pub basename: PathBuf,

    /// Input image, P3 (ASCII) or P6 (binary)
    pub input: PathBuf,
}

/// Transform options; at most one may be given
#[derive(Args, Debug, Default, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct TransformArgs {
    /// Flip the image on the X axis
    #[arg(long = "flipX")]
    pub flip_x: bool,

    /// Flip the image on the Y axis
    #[arg(long = "flipY")]
    pub flip_y: bool,

    /// Rotate the image clockwise
    #[arg(long = "rotateCW")]
    pub rotate_cw: bool,

    /// Rotate the image counter clockwise
    #[arg(long = "rotateCCW")]
    pub rotate_ccw: bool,

    /// Convert the image to grayscale (writes a .pgm file)
    #[arg(long)]
    pub grayscale: bool,

    /// Antique a color image
    #[arg(long)]
    pub sepia: bool,
}

impl TransformArgs {
    /// The requested transform, if any.
    pub fn selected(&self) -> Option<Transform> {
        [
            (self.flip_x, Transform::FlipX),
            (self.flip_y, Transform::FlipY),
            (self.rotate_cw, Transform::RotateCw),
            (self.rotate_ccw, Transform::RotateCcw),
            (self.grayscale, Transform::Grayscale),
            (self.sepia, Transform::Sepia),
        ]
        .into_iter()
        .find_map(|(set, transform)| set.then_some(transform))
    }
}

/// Output type; exactly one is required
#[derive(Args, Debug, Default, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct OutputTypeArgs {
    /// Write integer text samples (P3, or P2 with --grayscale)
    #[arg(long)]
    pub ascii: bool,

    /// Write raw byte samples (P6, or P5 with --grayscale)
    #[arg(long)]
    pub binary: bool,
}

impl OutputTypeArgs {
    /// The requested output type.
    pub fn selected(&self) -> OutputType {
        if self.binary {
            OutputType::Binary
        } else {
            OutputType::Ascii
        }
    }
}

/// First line of a clap error without its `error: ` prefix, e.g.
/// "unexpected argument '--mirror' found".
fn parse_error_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Check the positional shape `[TRANSFORM] --ascii|--binary BASENAME INPUT`.
///
/// clap accepts flags anywhere and a `--` separator; this pins the output
/// type to the third word from the end and any transform to the first
/// argument.
fn options_lead(args: &[OsString]) -> bool {
    let is_output_type = |arg: &OsString| arg == "--ascii" || arg == "--binary";
    let is_transform =
        |arg: &OsString| Transform::ALL.iter().any(|t| arg == t.option_name());

    match args {
        [_, output_type, _, _] => is_output_type(output_type),
        [_, transform, output_type, _, _] => {
            is_transform(transform) && is_output_type(output_type)
        }
        _ => false,
    }
}

/// Print the usage text to stdout.
pub fn print_usage() {
    println!("{}", Cli::command().render_help());
}

/// Run the CLI application
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

/// Run the CLI application with explicit arguments (first item is the program name)
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                }
                _ => {
                    eprintln!("Error: {}", parse_error_message(&e));
                    print_usage();
                }
            }
            return ExitCode::from(EXIT_SUCCESS);
        }
    };

    if !options_lead(&args) {
        eprintln!("Error: options must come before <BASENAME> <INPUT>");
        print_usage();
        return ExitCode::from(EXIT_SUCCESS);
    }

    convert::run_convert(
        &cli.input,
        &cli.basename,
        cli.transform.selected(),
        cli.output_type.selected(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pnmtool").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_without_transform() {
        let cli = parse(&["--binary", "out", "in.ppm"]).unwrap();
        assert_eq!(cli.transform.selected(), None);
        assert_eq!(cli.output_type.selected(), OutputType::Binary);
        assert_eq!(cli.basename, PathBuf::from("out"));
        assert_eq!(cli.input, PathBuf::from("in.ppm"));
    }

    #[test]
    fn test_parse_each_transform() {
        let cases = [
            ("--flipX", Transform::FlipX),
            ("--flipY", Transform::FlipY),
            ("--rotateCW", Transform::RotateCw),
            ("--rotateCCW", Transform::RotateCcw),
            ("--grayscale", Transform::Grayscale),
            ("--sepia", Transform::Sepia),
        ];
        for (flag, expected) in cases {
            let cli = parse(&[flag, "--ascii", "out", "in.ppm"]).unwrap();
            assert_eq!(cli.transform.selected(), Some(expected), "{}", flag);
            assert_eq!(cli.output_type.selected(), OutputType::Ascii);
            assert_eq!(expected.option_name(), flag);
        }
    }

    #[test]
    fn test_wrong_argument_counts_rejected() {
        // argc of 3: one word short
        assert!(parse(&["--ascii", "out"]).is_err());
        // argc of 6: one word too many
        assert!(parse(&["--flipX", "--ascii", "out", "in.ppm", "extra"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_unknown_options_rejected() {
        let err = parse(&["--mirror", "--ascii", "out", "in.ppm"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = parse(&["--hex", "out", "in.ppm"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_output_type_required_and_exclusive() {
        assert!(parse(&["--flipX", "out", "in.ppm"]).is_err());
        assert!(parse(&["--ascii", "--binary", "out", "in.ppm"]).is_err());
    }

    #[test]
    fn test_two_transforms_rejected() {
        let err = parse(&["--flipX", "--flipY", "--ascii", "out", "in.ppm"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    fn os_args(args: &[&str]) -> Vec<OsString> {
        std::iter::once("pnmtool").chain(args.iter().copied()).map(OsString::from).collect()
    }

    #[test]
    fn test_options_must_lead() {
        assert!(options_lead(&os_args(&["--ascii", "out", "in.ppm"])));
        assert!(options_lead(&os_args(&["--sepia", "--binary", "out", "in.ppm"])));

        // clap parses all of these, but the operands are out of place
        assert!(!options_lead(&os_args(&["out", "in.ppm", "--ascii"])));
        assert!(!options_lead(&os_args(&["--ascii", "--flipX", "out", "in.ppm"])));
        assert!(!options_lead(&os_args(&["--binary", "--", "out", "in.ppm"])));
        assert!(parse(&["out", "in.ppm", "--ascii"]).is_ok());
    }

    #[test]
    fn test_parse_error_names_the_argument() {
        let err = parse(&["--mirror", "--ascii", "out", "in.ppm"]).unwrap_err();
        let message = parse_error_message(&err);
        assert!(message.contains("--mirror"), "{}", message);
        assert!(!message.starts_with("error:"));
    }

    #[test]
    fn test_options_are_case_sensitive() {
        assert!(parse(&["--rotatecw", "--ascii", "out", "in.ppm"]).is_err());
        assert!(parse(&["--ASCII", "out", "in.ppm"]).is_err());
    }
}
