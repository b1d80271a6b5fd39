//! Configuration module
//!
//! Provides types and loading for the optional `pnmtool.toml` file.

pub mod loader;
pub mod schema;

pub use loader::{find_config, find_config_from, load_config, ConfigError, CONFIG_FILE_NAME};
pub use schema::{OutputConfig, PnmConfig, TelemetryConfig};
