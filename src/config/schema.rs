//! Configuration schema types for `pnmtool.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output file handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Create missing parent directories of the output file
    #[serde(default = "default_true")]
    pub create_dirs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { create_dirs: true }
    }
}

/// Local error log settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Append fatal errors to `error_log`
    #[serde(default)]
    pub collect_errors: bool,
    /// JSONL file receiving error entries
    #[serde(default = "default_error_log")]
    pub error_log: PathBuf,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { collect_errors: false, error_log: default_error_log() }
    }
}

fn default_true() -> bool {
    true
}

fn default_error_log() -> PathBuf {
    PathBuf::from(".pnmtool/errors.jsonl")
}

/// Root of `pnmtool.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PnmConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
