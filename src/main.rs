//! pnmtool - Command-line tool for flipping, rotating and recoloring PPM images

use std::process::ExitCode;

use pnmtool::cli;

fn main() -> ExitCode {
    cli::run()
}
