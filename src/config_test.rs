use super::*;

#[test]
fn from_vars_defaults() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = ServerConfig::from_vars(None, Some("70000")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_vars_rejects_bad_host() {
    let err = ServerConfig::from_vars(Some("not-an-ip"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("not-an-ip".into()));
}

#[test]
fn config_error_converts_into_server_error() {
    let err: crate::error::ServerError = ConfigError::InvalidPort("x".into()).into();
    assert!(err.to_string().contains("invalid PORT 'x'"));
}
