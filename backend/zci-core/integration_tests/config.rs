// Config loading from disk and the environment
// Env vars are process-global, so every test that reads them runs serially

use zci_core::config::paths::ENV_CONFIG_DIR;
use zci_core::config::{
    CONFIG_FILE_NAME, DdaConfig, ENV_BASE_URL, PathSource, detect_config_paths,
};
use zci_core::error::ConfigError;

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    // SAFETY: tests touching the environment are #[serial]
    unsafe {
        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_CONFIG_DIR);
    }
}

fn write_config(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join(CONFIG_FILE_NAME), contents).unwrap();
}

#[test]
#[serial]
fn given_missing_file_when_loaded_then_returns_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let config = DdaConfig::load(dir.path()).unwrap();

    assert_eq!(config, DdaConfig::default());
}

/// **VALUE**: Verifies a config file round-trips into every section.
#[test]
#[serial]
fn given_config_file_when_loaded_then_sections_are_applied() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        r#"
        [api]
        base_url = "http://localhost:8080/"
        timeout_secs = 5

        [query]
        html = true
        params = { t = "dda" }

        [answer]
        priority = ["definition", "related.0"]
        urls = false
        "#,
    );

    let config = DdaConfig::load(dir.path()).unwrap();

    assert_eq!(config.api.base_url, "http://localhost:8080/");
    assert_eq!(config.api.timeout_secs, 5);
    assert!(config.query.html);
    assert_eq!(config.query.params.get("t").map(String::as_str), Some("dda"));
    assert_eq!(config.answer.priority, vec!["definition", "related.0"]);
    assert!(!config.answer.urls);
}

/// **VALUE**: Verifies a broken file is reported, not silently replaced by defaults.
///
/// **BUG THIS CATCHES**: Would catch a typo in config.toml being ignored, which
/// leaves the user wondering why their settings have no effect.
#[test]
#[serial]
fn given_invalid_toml_when_loaded_then_returns_parse_error_with_path() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[api\nbase_url = ");

    let err = DdaConfig::load(dir.path()).unwrap_err();

    match &err {
        ConfigError::ParseError { path, .. } => {
            assert_eq!(path, &dir.path().join(CONFIG_FILE_NAME));
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_out_of_range_timeout_in_file_when_loaded_then_returns_validation_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[api]\ntimeout_secs = 0\n");

    let err = DdaConfig::load(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
#[serial]
fn given_base_url_env_var_when_loaded_then_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[api]\nbase_url = \"http://from-file/\"\n");
    // SAFETY: #[serial]
    unsafe { std::env::set_var(ENV_BASE_URL, "http://from-env:9000/") };

    let config = DdaConfig::load(dir.path());
    clear_env();

    assert_eq!(config.unwrap().api.base_url, "http://from-env:9000/");
}

#[test]
#[serial]
fn given_blank_base_url_env_var_when_loaded_then_file_value_is_kept() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[api]\nbase_url = \"http://from-file/\"\n");
    // SAFETY: #[serial]
    unsafe { std::env::set_var(ENV_BASE_URL, "   ") };

    let config = DdaConfig::load(dir.path());
    clear_env();

    assert_eq!(config.unwrap().api.base_url, "http://from-file/");
}

#[test]
#[serial]
fn given_config_dir_env_var_when_detecting_paths_then_uses_override() {
    clear_env();
    let dir = TempDir::new().unwrap();
    // SAFETY: #[serial]
    unsafe { std::env::set_var(ENV_CONFIG_DIR, dir.path()) };

    let paths = detect_config_paths();
    clear_env();

    let paths = paths.unwrap();
    assert_eq!(paths.source, PathSource::EnvVar);
    assert_eq!(paths.config_dir, dir.path());
    assert_eq!(paths.config_file, dir.path().join(CONFIG_FILE_NAME));
}

#[test]
#[serial]
fn given_no_override_when_detecting_paths_then_falls_back_to_platform_dir() {
    clear_env();

    let paths = detect_config_paths().unwrap();

    assert_ne!(paths.source, PathSource::EnvVar);
    assert!(paths.config_dir.ends_with("dda"));
}

#[test]
#[serial]
fn given_config_file_when_building_options_then_resolver_reflects_answer_section() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "[answer]\npriority = [\"abstract\"]\nweb_fallback = false\nsentinel = \"none\"\n",
    );

    let options = DdaConfig::load(dir.path()).unwrap().zci_options().unwrap();

    assert!(!options.resolver.web_fallback());
    assert_eq!(options.resolver.sentinel(), "none");
}
