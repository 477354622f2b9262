use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("   ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_trims_value() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT value: \"eighty\"");
    assert!(parse_port(Some("70000")).is_err());
}

// =============================================================================
// parse_bind_addr
// =============================================================================

#[test]
fn parse_bind_addr_defaults_to_unspecified() {
    assert_eq!(parse_bind_addr(None).unwrap(), DEFAULT_BIND_ADDR);
}

#[test]
fn parse_bind_addr_accepts_ipv6() {
    assert_eq!(parse_bind_addr(Some("::1")).unwrap(), "::1".parse::<IpAddr>().unwrap());
}

#[test]
fn parse_bind_addr_rejects_hostname() {
    assert!(matches!(
        parse_bind_addr(Some("localhost")),
        Err(ServerError::InvalidEnv { var: "BIND_ADDR", .. })
    ));
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn socket_addr_combines_fields() {
    let config = ServerConfig { bind_addr: "127.0.0.1".parse().unwrap(), port: 4000 };
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn default_config_listens_on_all_interfaces() {
    assert_eq!(ServerConfig::default().socket_addr().to_string(), "0.0.0.0:3000");
}
