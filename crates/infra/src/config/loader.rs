//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. If no file is found either, uses built-in defaults
//!
//! ## Environment Variables
//! - `ROSTER_REMOTE_BASE_URL`: Base URL of the remote users collection
//! - `ROSTER_REMOTE_TIMEOUT_SECS`: Optional request timeout in seconds
//! - `ROSTER_USER_AGENT`: Optional User-Agent header value
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./roster.json` or `./roster.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)

use std::path::{Path, PathBuf};

use roster_domain::config::RemoteConfig;
use roster_domain::{Config, Result, RosterError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to a config file; if no file exists
/// either, the built-in defaults apply.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match load_from_file(None) {
                Ok(config) => Ok(config),
                Err(_) => {
                    tracing::info!("No configuration source found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `ROSTER_REMOTE_BASE_URL` must be present; the remaining variables are
/// optional.
///
/// # Errors
/// Returns `RosterError::Config` if the base URL is missing or an optional
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("ROSTER_REMOTE_BASE_URL")?;

    let timeout_seconds = match std::env::var("ROSTER_REMOTE_TIMEOUT_SECS") {
        Ok(raw) => Some(raw.parse::<u64>().map_err(|e| {
            RosterError::Config(format!("Invalid ROSTER_REMOTE_TIMEOUT_SECS: {e}"))
        })?),
        Err(_) => None,
    };

    let user_agent = std::env::var("ROSTER_USER_AGENT").ok();

    Ok(Config { remote: RemoteConfig { base_url, timeout_seconds, user_agent } })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RosterError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RosterError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RosterError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RosterError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RosterError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RosterError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(RosterError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("roster.json"),
            cwd.join("roster.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| RosterError::Config(format!("Missing environment variable: {name}")))
}
