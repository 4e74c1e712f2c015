//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
fn default_config_path_contains_greeter_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("greeter") && path_str.ends_with("config.toml"),
        "Path should contain 'greeter' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_greeter_log() {
    let path = default_log_path();
    assert!(path.ends_with("greeter.log"), "got: {:?}", path);
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/greeter.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("greeter_test_config.toml");

    let toml_content = r#"
default_greeting = "Good morning"
case_sensitive = false
tolerant = true
show_stats = true
log_file_path = "/tmp/greeter-test.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.default_greeting, Some("Good morning".to_string()));
    assert_eq!(config.case_sensitive, Some(false));
    assert_eq!(config.tolerant, Some(true));
    assert_eq!(config.show_stats, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/greeter-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("greeter_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("greeter_test_unknown.toml");

    fs::write(&config_path, "theme = \"monokai\"\n").expect("Failed to write config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("greeter_test_partial.toml");

    fs::write(&config_path, "default_greeting = \"Hi\"\n# rest omitted\n")
        .expect("Failed to write partial test config");

    let config = load_config_file(&config_path)
        .expect("Should parse partial config")
        .expect("file exists");
    assert_eq!(config.default_greeting, Some("Hi".to_string()));
    assert_eq!(config.case_sensitive, None);
    assert_eq!(config.tolerant, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        default_greeting: Some("Welcome".to_string()),
        case_sensitive: Some(false),
        tolerant: Some(true),
        show_stats: None,
        log_file_path: None,
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.default_greeting, "Welcome");
    assert!(!resolved.case_sensitive);
    assert!(resolved.tolerant);
    assert_eq!(resolved.show_stats, defaults.show_stats);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn empty_config_file_log_path_uses_default() {
    let resolved = merge_config(Some(ConfigFile::default()));
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn resolved_config_builds_greeter_config() {
    let resolved = ResolvedConfig {
        default_greeting: " Hey ".to_string(),
        case_sensitive: false,
        ..ResolvedConfig::default()
    };
    let config = resolved.greeter_config().expect("valid greeting");
    assert_eq!(config.default_greeting(), "Hey");
    assert!(!config.case_sensitive());
}

#[test]
fn resolved_config_with_blank_greeting_is_empty_value() {
    let resolved = ResolvedConfig {
        default_greeting: "   ".to_string(),
        ..ResolvedConfig::default()
    };
    assert_eq!(
        resolved.greeter_config(),
        Err(GreetError::EmptyValue {
            field: "default_greeting"
        })
    );
}

#[test]
#[serial(greeter_greeting)]
fn apply_env_overrides_respects_greeter_greeting() {
    let _guard = EnvGuard::new(GREETING_ENV_VAR);

    env::set_var(GREETING_ENV_VAR, "Howdy");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.default_greeting, "Howdy");
    assert!(result.case_sensitive);
}

#[test]
#[serial(greeter_greeting)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(GREETING_ENV_VAR);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(
        result, base,
        "Config should be unchanged when GREETER_GREETING not set"
    );
}

#[test]
fn apply_cli_overrides_switch_flags_and_keep_greeting() {
    let base = ResolvedConfig {
        default_greeting: "FromFile".to_string(),
        ..ResolvedConfig::default()
    };

    let result = apply_cli_overrides(base, true, true, true);

    assert_eq!(result.default_greeting, "FromFile");
    assert!(!result.case_sensitive);
    assert!(result.tolerant);
    assert!(result.show_stats);
}

#[test]
fn apply_cli_overrides_unset_flags_keep_lower_layers() {
    let base = ResolvedConfig {
        default_greeting: "FromFile".to_string(),
        case_sensitive: false,
        tolerant: true,
        show_stats: true,
        log_file_path: default_log_path(),
    };

    let result = apply_cli_overrides(base.clone(), false, false, false);

    assert_eq!(result, base);
}

#[test]
#[serial(greeter_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("greeter_explicit.toml");
    fs::write(&explicit_path, "default_greeting = \"Explicit\"\n")
        .expect("Failed to write explicit config");

    // Env var points elsewhere and must be ignored.
    let env_path = temp_dir.join("greeter_env.toml");
    fs::write(&env_path, "default_greeting = \"Env\"\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("load")
        .expect("file exists");
    assert_eq!(config.default_greeting, Some("Explicit".to_string()));

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(greeter_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = env::temp_dir().join("greeter_env_only.toml");
    fs::write(&env_path, "case_sensitive = false\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None)
        .expect("load")
        .expect("file exists");
    assert_eq!(config.case_sensitive, Some(false));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(greeter_config)]
fn load_config_with_precedence_missing_env_file_is_none() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    env::set_var(CONFIG_ENV_VAR, "/nonexistent/greeter/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}
