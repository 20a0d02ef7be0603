use arcade_interface::utils::validation::Validate;
use arcade_interface::{hello, ArcadeError, ArcadeInterface, TomlConfig, VERSION};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_hello() {
    assert_eq!(hello(), "ArcadeInterface initialized");
}

#[test]
fn test_version() {
    assert_eq!(VERSION, "0.1.0");
}

#[test]
fn test_initialize_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[interface]
name = "Pac-Man"

[logging]
level = "warn"
format = "json"
"#
    )
    .unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let mut interface = ArcadeInterface::from_config(&config);
    let status = interface.initialize().unwrap();
    assert_eq!(status.name, "Pac-Man");
    assert_eq!(status.message, hello());
    assert_eq!(status.version, VERSION);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TomlConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ArcadeError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_config_with_empty_name_fails_validation() {
    let config = TomlConfig::from_toml_str("[interface]\nname = \"\"\n").unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(err.user_friendly_message().contains("interface.name"));
}
