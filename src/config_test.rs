use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_blank_values_use_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("8080"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6_bind() {
    let cfg = ServerConfig::from_vars(None, Some("::1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = ServerConfig::from_vars(Some("70000"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: \"70000\"");
}

#[test]
fn from_vars_rejects_bad_bind_addr() {
    let err = ServerConfig::from_vars(None, Some("localhost")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".to_owned()));
}
