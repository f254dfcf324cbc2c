//! Integration tests for ideabox-config schema types.

use ideabox_config::schema::{IdeaboxConfig, LoggingConfig, ServerConfig, StorageConfig};

#[test]
fn ideabox_config_default_values() {
    let config = IdeaboxConfig::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.storage.path, "ideas.db");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn ideabox_config_serde_roundtrip() {
    let config = IdeaboxConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let back: IdeaboxConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.server.port, config.server.port);
    assert_eq!(back.storage.path, config.storage.path);
}

#[test]
fn socket_addr_from_defaults() {
    let addr = ServerConfig::default().socket_addr().expect("addr");
    assert_eq!(addr.to_string(), "127.0.0.1:5000");
}

#[test]
fn socket_addr_rejects_hostname() {
    let server = ServerConfig {
        host: "localhost".into(),
        port: 80,
    };
    assert!(server.socket_addr().is_err());
}

#[test]
fn storage_default_path() {
    assert_eq!(StorageConfig::default().path, "ideas.db");
}

#[test]
fn logging_default_level() {
    assert_eq!(LoggingConfig::default().level, "info");
}

#[test]
fn deny_unknown_fields_rejects_extra_key() {
    let json = r#"{"server":{},"storage":{},"logging":{},"unknown_key":"bad"}"#;
    let result: Result<IdeaboxConfig, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn partial_config_uses_defaults_for_missing() {
    let json = r#"{"server":{"port":8080}}"#;
    let config: IdeaboxConfig = serde_json::from_str(json).expect("parse");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "127.0.0.1"); // default
    assert_eq!(config.storage.path, "ideas.db"); // default
}
