//! Configuration loading and discovery for `pnmtool.toml`

use super::schema::PnmConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "pnmtool.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error
    #[error("Failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Find `pnmtool.toml`.
///
/// Search order:
/// 1. Walk up from current directory looking for pnmtool.toml
/// 2. Check XDG_CONFIG_HOME/pnmtool/pnmtool.toml (or ~/.config/pnmtool/pnmtool.toml)
///
/// # Returns
/// - `Some(path)` if a pnmtool.toml file is found
/// - `None` if no config file is found
///
/// # Example
/// ```ignore
/// if let Some(config_path) = find_config() {
///     println!("Found config at: {}", config_path.display());
/// }
/// ```
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find `pnmtool.toml` in `$XDG_CONFIG_HOME/pnmtool/` or `~/.config/pnmtool/`.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("pnmtool").join(CONFIG_FILE_NAME);
    config_path.exists().then_some(config_path)
}

/// Find `pnmtool.toml` by walking up from `start`.
///
/// # Arguments
/// - `start` - Directory to begin the search in
///
/// # Returns
/// The first `pnmtool.toml` found in `start` or one of its ancestors.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from `path`, or from the discovered file when `None`.
///
/// Returns the defaults when no config file exists.
///
/// # Arguments
/// - `path` - Optional path to a pnmtool.toml file
///
/// # Returns
/// - `Ok(PnmConfig)` on success
/// - `Err(ConfigError)` if the file cannot be read or parsed
///
/// # Example
/// ```ignore
/// // Load from discovered config
/// let config = load_config(None)?;
///
/// // Load from specific path
/// let config = load_config(Some(Path::new("photos/pnmtool.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<PnmConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(PnmConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<PnmConfig, ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    toml::from_str(&contents)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_from_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();

        let found = find_config_from(nested).unwrap();
        assert_eq!(found, temp.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[output]\ncreate_dirs = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.output.create_dirs);
    }

    #[test]
    fn test_load_missing_explicit_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config(Some(&temp.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[output\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    #[serial]
    fn test_discovery_from_current_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[telemetry]\ncollect_errors = true\n",
        )
        .unwrap();

        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(temp.path()).unwrap();

        let result = load_config(None);

        env::set_current_dir(original_dir).unwrap();

        assert!(result.unwrap().telemetry.collect_errors);
    }

    #[test]
    #[serial]
    fn test_xdg_fallback() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join("pnmtool");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE_NAME), "").unwrap();

        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());

        let found = find_xdg_config();

        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(found, Some(config_dir.join(CONFIG_FILE_NAME)));
    }
}
