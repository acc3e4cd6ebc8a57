use std::fs;

use javax_config::{Config, ConstructorPolicy, Error, JavaxToml};

#[test]
fn test_open_reads_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("javax.toml");
    fs::write(&path, "[format]\nindent_size = 4\n\n[builder]\nconstructor = \"always\"\n").unwrap();

    let file = JavaxToml::open(&path).unwrap();
    assert_eq!(file.path(), path.as_path());
    assert_eq!(file.config().format.indent_size, Some(4));
    assert_eq!(file.config().builder.constructor, ConstructorPolicy::Always);
    assert!(file.content().contains("indent_size"));
}

#[test]
fn test_open_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = JavaxToml::open(dir.path().join("javax.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_open_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = JavaxToml::open_or_default(dir.path().join("javax.toml")).unwrap();
    assert_eq!(file.config(), &Config::default());
    assert!(file.content().is_empty());
}

#[test]
fn test_open_or_default_still_reports_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("javax.toml");
    fs::write(&path, "[format\n").unwrap();

    let err = JavaxToml::open_or_default(&path).unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_from_file_uses_path_in_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[format]\nindent_size = 0\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    let report = format!("{:?}", miette::Report::new(*err));
    assert!(report.contains("custom.toml"));
}
