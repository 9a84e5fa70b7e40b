use netid_domain::{CliOverrides, Config, ConfigError};

#[test]
fn test_defaults_are_valid() {
    let config = Config::default();

    assert_eq!(config.cache.ttl_secs, 30);
    assert_eq!(config.upstream.timeout_ms, 10_000);
    assert_eq!(config.credentials.username_key, "ApiUsername");
    assert_eq!(config.credentials.secret_key, "ApiPassword");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [upstream]
        base_url = "https://fl1.example/api/networkid/?msisdn="

        [cache]
        ttl_secs = 45
        "#,
    )
    .unwrap();

    assert_eq!(
        config.upstream.base_url,
        "https://fl1.example/api/networkid/?msisdn="
    );
    assert_eq!(config.upstream.timeout_ms, 10_000);
    assert_eq!(config.cache.ttl_secs, 45);
    assert_eq!(config.cache.maintenance_interval_secs, 60);
    assert_eq!(config.database.path, "./netid.db");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[cache\nttl_secs = ");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validate_rejects_zero_ttl() {
    let mut config = Config::default();
    config.cache.ttl_secs = 0;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ttl_secs"));
}

#[test]
fn test_validate_rejects_bad_base_url() {
    let mut config = Config::default();
    config.upstream.base_url = "localhost:8500".to_string();

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_missing_file_uses_defaults_and_overrides() {
    let config = Config::load(
        Some("/nonexistent/netid.toml"),
        CliOverrides {
            base_url: None,
            database_path: Some("/tmp/directory.db".to_string()),
            log_level: Some("debug".to_string()),
        },
    )
    .unwrap();

    assert_eq!(config.database.path, "/tmp/directory.db");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.cache.ttl_secs, 30);
}
