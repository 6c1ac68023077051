use relay_core::errors::*;

#[test]
fn config_error_carries_field_and_message() {
    let err = ConfigError::ValidationFailed {
        field: "commerce.default_currency".into(),
        message: "bad".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("commerce.default_currency"));
    assert!(msg.contains("bad"));
}

#[test]
fn consent_error_carries_reason() {
    let err = ConsentError::MalformedMapping {
        reason: "expected array".into(),
    };
    assert!(err.to_string().contains("expected array"));
    assert_eq!(err.error_code(), "CONSENT_ERROR");
}

#[test]
fn relay_error_converts_from_subsystems() {
    let err: RelayError = ConfigError::FileNotFound {
        path: "/tmp/relay.toml".into(),
    }
    .into();
    assert!(matches!(err, RelayError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err: RelayError = ConsentError::MalformedMapping {
        reason: "expected array".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONSENT_ERROR");
}

#[test]
fn serde_json_error_converts_via_question_mark() {
    fn parse() -> RelayResult<serde_json::Value> {
        Ok(serde_json::from_str("{not json")?)
    }
    let err = parse().unwrap_err();
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
}

#[test]
fn host_string_prefixes_code() {
    let err = ConfigError::ValidationFailed {
        field: "screen.reporting".into(),
        message: "unknown".into(),
    };
    let s = err.host_string();
    assert!(s.starts_with("[CONFIG_ERROR] "));
    assert!(s.contains("screen.reporting"));
}
