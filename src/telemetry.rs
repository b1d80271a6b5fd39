//! Local error log
//!
//! Appends one JSON object per fatal error to a JSONL file when enabled in
//! `pnmtool.toml`. Only the error category, message and file name are
//! recorded.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// An error entry for the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// RFC 3339 timestamp (UTC, whole seconds)
    pub timestamp: String,
    /// Stage that failed: "read", "transform" or "write"
    pub command: String,
    /// The file being processed (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Category such as "format_error" or "io_error"
    pub error_type: String,
    /// Error message
    pub context: String,
}

impl ErrorEntry {
    /// Create a new error entry stamped with the current time
    pub fn new(
        command: impl Into<String>,
        error_type: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            command: command.into(),
            file: None,
            error_type: error_type.into(),
            context: context.into(),
        }
    }

    /// Set the file that was being processed
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Error collector that writes to a JSONL file
#[derive(Debug, Clone)]
pub struct ErrorCollector {
    path: PathBuf,
    enabled: bool,
}

impl ErrorCollector {
    /// Create a new error collector
    pub fn new(path: impl AsRef<Path>, enabled: bool) -> Self {
        Self { path: path.as_ref().to_path_buf(), enabled }
    }

    /// Check if error collection is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append an entry, creating the log and its directory as needed
    pub fn log(&self, entry: &ErrorEntry) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        Ok(())
    }
}
