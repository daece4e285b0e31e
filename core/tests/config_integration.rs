//! Integration tests for loading redirect configuration from disk.

use std::fs;

use buildio_core::api::{load_from_path, ConfigError, RedirectSpec};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[test]
fn test_load_full_config_file() {
    let dir = setup_test_dir();
    let path = dir.path().join("buildio.toml");
    fs::write(
        &path,
        r#"
[io]
stdin = "read:/tmp/in.txt"
stdout = "append:build.log"
stderr = "err2out"

[logging]
level = "buildio=trace"
json = true
"#,
    )
    .unwrap();

    let cfg = load_from_path(&path).expect("Failed to load config");

    let expected = RedirectSpec::builder()
        .stdin("read:/tmp/in.txt")
        .stdout("append:build.log")
        .stderr("err2out")
        .build();
    assert_eq!(cfg.io, expected);
    assert_eq!(cfg.logging.level, "buildio=trace");
    assert!(cfg.logging.json);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = setup_test_dir();
    let path = dir.path().join("absent.toml");

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(p) if p == path));
}

#[test]
fn test_directory_is_an_io_error() {
    let dir = setup_test_dir();

    let err = load_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[cfg(unix)]
#[test]
fn test_uninspectable_path_is_an_io_error() {
    // `<file>/buildio.toml` fails with ENOTDIR, which `Path::exists` reports as absent.
    let dir = setup_test_dir();
    let file = dir.path().join("plain");
    fs::write(&file, "").unwrap();
    let path = file.join("buildio.toml");

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "got {err:?}");
}

#[test]
fn test_serialized_spec_loads_back() {
    let spec = RedirectSpec::builder()
        .stdout("write:/var/log/out.txt")
        .build();
    let cfg = buildio_core::api::AppConfig {
        io: spec.clone(),
        ..Default::default()
    };

    let dir = setup_test_dir();
    let path = dir.path().join("buildio.toml");
    fs::write(&path, toml::to_string(&cfg).unwrap()).unwrap();

    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded.io, spec);
    assert_eq!(loaded.io.fingerprint(), spec.fingerprint());
}

#[test]
fn test_spec_json_shape() {
    let json = serde_json::to_value(RedirectSpec::inherit_all()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "stdin": "inherit",
            "stdout": "inherit",
            "stderr": "inherit",
        })
    );
}
