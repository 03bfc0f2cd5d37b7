use file_loader::load_config::{load_config, BASE_DIR_ENV};
use file_loader_core::config::{FilterSpec, PostProcessorSpec, PreProcessorSpec};
use serial_test::serial;
use std::env;
use std::fs::write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const CONFIG_YAML: &str = r#"
base_dir: ./fixtures
should_reset: false
files:
  - name: src/app.js
    timestamp: 12
    patches:
      - name: src/app.patch.js
  - name: http://cdn.example.com/lib.js
    is_remote: true
pre_processors:
  - kind: serve_only_last
post_processors:
  - kind: banner
    text: "// test build"
"#;

/// A valid config file maps onto the core LoadConfig.
#[test]
#[serial]
fn test_load_config_success() {
    env::remove_var(BASE_DIR_ENV);
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), CONFIG_YAML).unwrap();

    let config = load_config(config_file.path()).expect("Config should load");

    assert_eq!(config.base_dir, PathBuf::from("./fixtures"));
    assert!(!config.should_reset);
    assert_eq!(config.files.len(), 2);
    assert_eq!(config.files[0].patches[0].name, "src/app.patch.js");
    assert!(config.files[1].is_remote);
    assert_eq!(config.filter, FilterSpec::Passthrough);
    assert_eq!(config.pre_processors, vec![PreProcessorSpec::ServeOnlyLast]);
    assert_eq!(
        config.post_processors,
        vec![PostProcessorSpec::Banner {
            text: "// test build".into()
        }]
    );
}

/// The base directory can be overridden from the environment.
#[test]
#[serial]
fn test_load_config_env_overrides_base_dir() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), CONFIG_YAML).unwrap();

    env::set_var(BASE_DIR_ENV, "/srv/tests");
    let config = load_config(config_file.path());
    env::remove_var(BASE_DIR_ENV);

    assert_eq!(config.unwrap().base_dir, PathBuf::from("/srv/tests"));
}

/// Invalid YAML is reported as a parse error.
#[test]
#[serial]
fn test_load_config_errors_for_invalid_file() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), b"base_dir: [:::").unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("parse") || msg.contains("YAML"),
        "Parse error expected, got: {msg}"
    );
}

/// A missing file is reported with its path.
#[test]
#[serial]
fn test_load_config_errors_for_missing_file() {
    let err = load_config("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
