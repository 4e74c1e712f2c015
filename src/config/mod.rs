//! Configuration module.
//!
//! Layers, lowest to highest precedence: built-in defaults, TOML config file,
//! environment variables, CLI flags.

pub mod loader;

pub use loader::{
    CONFIG_ENV_VAR, ConfigError, ConfigFile, GREETING_ENV_VAR, ResolvedConfig,
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config,
};
