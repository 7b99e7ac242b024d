use dive_action::error::AppError;
use dive_action::settings::{DEFAULT_API_VERSION, DEFAULT_SOCKET, Settings};

#[test]
fn partial_file_keeps_defaults() {
    let settings = Settings::parse("runtime = \"podman\"\n").unwrap();
    assert_eq!(settings.runtime, "podman");
    assert_eq!(settings.socket, DEFAULT_SOCKET);
    assert_eq!(settings.api_version, DEFAULT_API_VERSION);
}

#[test]
fn blank_runtime_is_rejected() {
    let err = Settings::parse("runtime = \"  \"\n").unwrap_err();
    assert!(err.to_string().contains("runtime"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(Settings::parse("runtime = ["), Err(AppError::SettingsParse(_))));
}
