use super::*;

#[test]
fn missing_values_use_defaults() {
    let config = HostConfig::resolve(None, None).expect("defaults");
    assert_eq!(config, HostConfig { host: "0.0.0.0".to_owned(), port: 3000 });
    assert_eq!(config.addr(), "0.0.0.0:3000");
}

#[test]
fn blank_values_use_defaults() {
    let config = HostConfig::resolve(Some("  "), Some("")).expect("defaults");
    assert_eq!(config.addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_win() {
    let config = HostConfig::resolve(Some("127.0.0.1"), Some(" 8080 ")).expect("valid");
    assert_eq!(config.addr(), "127.0.0.1:8080");
}

#[test]
fn unparseable_port_is_rejected() {
    for raw in ["http", "70000", "-1"] {
        let err = HostConfig::resolve(None, Some(raw)).expect_err("invalid port");
        assert!(matches!(err, HostError::InvalidPort { ref value, .. } if value == raw), "{raw}: {err}");
    }
}
