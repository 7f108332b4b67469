use std::fs;

use starter_kit::config::{AppConfig, LogFormat, ServiceKind};
use tempfile::TempDir;

#[test]
fn missing_file_uses_service_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let backend = AppConfig::load_from(ServiceKind::Backend, &path).unwrap();
    assert_eq!(backend.server.host, "0.0.0.0");
    assert_eq!(backend.server.port, 8000);
    assert!(backend.cors.enabled, "basic backend ships with CORS enabled");
    assert_eq!(backend.logging.level, "info");
    assert_eq!(backend.logging.format, LogFormat::Text);

    let inference = AppConfig::load_from(ServiceKind::Inference, &path).unwrap();
    assert_eq!(inference.server.port, 8001);
    assert!(!inference.cors.enabled, "inference backend ships without CORS");
    assert_eq!(inference.model.seed, None);
}

#[test]
fn file_values_override_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inference.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 9100

[logging]
level = "debug"
format = "json"

[cors]
enabled = true

[model]
seed = 1234
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(ServiceKind::Inference, &path).unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:9100");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.cors.enabled);
    assert_eq!(config.model.seed, Some(1234));
}

#[test]
fn invalid_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("backend.toml");
    fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

    assert!(AppConfig::load_from(ServiceKind::Backend, &path).is_err());
}
