use assert_cmd::Command;
use file_loader::cli::{run, Cli, Commands};
use predicates::prelude::*;
use std::fs::{create_dir_all, write};
use std::path::Path;
use tempfile::{tempdir, NamedTempFile};

/// Writes a small fixture tree and a config pointing at it.
fn create_fixture(root: &Path, should_reset: bool) -> NamedTempFile {
    create_dir_all(root.join("src")).unwrap();
    write(root.join("src/app.js"), "run();\nconsole.log('x');\n").unwrap();
    write(root.join("src/app.patch.js"), "patched();\n").unwrap();

    let config = NamedTempFile::new().expect("Creating temp config file failed");
    let yaml = format!(
        "base_dir: {}
should_reset: {}
files:
  - name: src/app.js
    timestamp: 7
    patches:
      - name: src/app.patch.js
  - name: http://cdn/lib.js
    is_remote: true
filter:
  kind: line_strip
  pattern: \"^console\"
",
        root.display(),
        should_reset
    );
    write(config.path(), yaml).expect("Writing temp config failed");
    config
}

#[test]
fn load_cli_prints_loaded_files_as_json() {
    let tmp = tempdir().unwrap();
    let config = create_fixture(tmp.path(), true);

    let mut cmd = Command::cargo_bin("file-loader").expect("Binary exists");
    cmd.env_remove("FILE_LOADER_BASE_DIR")
        .arg("load")
        .arg("--config")
        .arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"src/app.js\""))
        .stdout(predicate::str::contains("run();\\npatched();\\n"))
        .stdout(predicate::str::contains("console.log").not());
}

#[test]
fn load_cli_no_reset_skips_full_load_filtering() {
    let tmp = tempdir().unwrap();
    let config = create_fixture(tmp.path(), true);

    let mut cmd = Command::cargo_bin("file-loader").expect("Binary exists");
    cmd.env_remove("FILE_LOADER_BASE_DIR")
        .arg("load")
        .arg("--config")
        .arg(config.path())
        .arg("--no-reset");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("console.log"));
}

#[test]
fn load_cli_fails_for_missing_file() {
    let tmp = tempdir().unwrap();
    let config = NamedTempFile::new().unwrap();
    write(
        config.path(),
        format!("base_dir: {}\nfiles:\n  - name: missing.js\n", tmp.path().display()),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("file-loader").expect("Binary exists");
    cmd.env_remove("FILE_LOADER_BASE_DIR")
        .arg("load")
        .arg("--config")
        .arg(config.path());

    cmd.assert().failure().stdout(predicate::str::is_empty());
}

#[test]
fn run_writes_json_array() {
    let tmp = tempdir().unwrap();
    let config = create_fixture(tmp.path(), true);

    let cli = Cli {
        command: Commands::Load {
            config: config.path().to_path_buf(),
            reset: true,
            no_reset: false,
        },
    };
    let mut out = Vec::new();
    run(cli, &mut out).expect("run should succeed");

    let files: Vec<file_loader_core::FileRecord> = serde_json::from_slice(&out).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].content, "run();\npatched();\n");
    assert_eq!(files[0].timestamp, 7);
    assert_eq!(files[1].content, "");
    assert_eq!(files[1].timestamp, -1);
}

/// Runs the `load` command in-process and returns the loaded files.
fn run_load(config: &Path, reset: bool, no_reset: bool) -> Vec<file_loader_core::FileRecord> {
    let cli = Cli {
        command: Commands::Load {
            config: config.to_path_buf(),
            reset,
            no_reset,
        },
    };
    let mut out = Vec::new();
    run(cli, &mut out).expect("run should succeed");
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn reset_flag_overrides_incremental_config() {
    let tmp = tempdir().unwrap();
    let config = create_fixture(tmp.path(), false);

    let files = run_load(config.path(), true, false);

    assert_eq!(files[0].content, "run();\npatched();\n");
    assert!(!files[0].content.contains("console.log"));
}

#[test]
fn config_should_reset_is_used_without_flags() {
    let tmp = tempdir().unwrap();
    let config = create_fixture(tmp.path(), false);

    let files = run_load(config.path(), false, false);

    assert_eq!(files[0].content, "run();\nconsole.log('x');\npatched();\n");
}

#[test]
fn no_reset_flag_overrides_full_load_config() {
    let tmp = tempdir().unwrap();
    let config = create_fixture(tmp.path(), true);

    let files = run_load(config.path(), false, true);

    assert!(files[0].content.contains("console.log"));
}
