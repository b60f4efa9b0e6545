//! Tests for TOML config loading and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_breach_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, breach_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_from_directory_returns_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, breach_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
spacing = 4

[webview]
autoplay = true
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.spacing, 4);
    assert!(config.webview.autoplay);
    // Defaults preserved
    assert!(config.webview.clipboard);
    assert!(config.webview.user_agent.is_none());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, breach_common::ConfigError::ParseError(_)));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\nspacing = \"wide\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, breach_common::ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_are_returned_unvalidated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\nspacing = 900\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.spacing, 900);
}

#[test]
fn load_does_not_create_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("breach").join("config.toml");

    assert!(load_from_path(&path).is_err());
    assert!(!path.exists());
    assert!(!dir.path().join("breach").exists());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("breach"));
        assert!(path_str.ends_with("config.toml"));
    }
}
