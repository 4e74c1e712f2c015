//! Configuration file loading with precedence handling.

use crate::greeter::GreeterConfig;
use crate::model::{DEFAULT_GREETING, GreetError};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GREETER_CONFIG";

/// Environment variable overriding the default greeting word.
pub const GREETING_ENV_VAR: &str = "GREETER_GREETING";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, path is a directory).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/greeter/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Greeting word used when none is given (e.g., "Hello", "Good morning").
    #[serde(default)]
    pub default_greeting: Option<String>,

    /// Preserve name case (`true`) or title-case names (`false`).
    #[serde(default)]
    pub case_sensitive: Option<bool>,

    /// Skip invalid names instead of aborting the batch.
    #[serde(default)]
    pub tolerant: Option<bool>,

    /// Print statistics after greeting.
    #[serde(default)]
    pub show_stats: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Default greeting word (not yet validated).
    pub default_greeting: String,
    /// Name case handling.
    pub case_sensitive: bool,
    /// Tolerant batch policy.
    pub tolerant: bool,
    /// Show statistics.
    pub show_stats: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_greeting: DEFAULT_GREETING.to_string(),
            case_sensitive: true,
            tolerant: false,
            show_stats: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Build the core greeter configuration.
    ///
    /// Validation is delegated to [`GreeterConfig::new`].
    ///
    /// # Errors
    ///
    /// [`GreetError::EmptyValue`] if the resolved default greeting is blank.
    pub fn greeter_config(&self) -> Result<GreeterConfig, GreetError> {
        GreeterConfig::new(&self.default_greeting, self.case_sensitive)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/greeter/greeter.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("greeter").join("greeter.log")
    } else {
        PathBuf::from("greeter.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/greeter/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("greeter").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `GREETER_CONFIG` environment variable
/// 3. Default path `~/.config/greeter/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        default_greeting: config.default_greeting.unwrap_or(defaults.default_greeting),
        case_sensitive: config.case_sensitive.unwrap_or(defaults.case_sensitive),
        tolerant: config.tolerant.unwrap_or(defaults.tolerant),
        show_stats: config.show_stats.unwrap_or(defaults.show_stats),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `GREETER_GREETING`: Override the default greeting
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(greeting) = std::env::var(GREETING_ENV_VAR) {
        config.default_greeting = greeting;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
/// `--greeting` is not a config override: it is passed per call, so the
/// configured default greeting still has to be valid.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    case_insensitive: bool,
    tolerant: bool,
    show_stats: bool,
) -> ResolvedConfig {
    // Flags can only switch behavior on; absence defers to lower layers.
    if case_insensitive {
        config.case_sensitive = false;
    }
    if tolerant {
        config.tolerant = true;
    }
    if show_stats {
        config.show_stats = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
