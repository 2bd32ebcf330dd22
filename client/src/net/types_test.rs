use super::*;

#[test]
fn parse_trims_username_but_not_password() {
    let creds = Credentials::parse("  alice  ", " s3cret ").unwrap();
    assert_eq!(creds.username(), "alice");
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "username": "alice", "password": " s3cret " })
    );
}

#[test]
fn parse_requires_username() {
    assert_eq!(Credentials::parse("", "pw"), Err(CredentialsError::MissingUsername));
    assert_eq!(Credentials::parse("   ", "pw"), Err(CredentialsError::MissingUsername));
}

#[test]
fn parse_requires_password() {
    assert_eq!(Credentials::parse("alice", ""), Err(CredentialsError::MissingPassword));
}

#[test]
fn parse_reports_username_first_when_both_missing() {
    assert_eq!(Credentials::parse("", ""), Err(CredentialsError::MissingUsername));
}

#[test]
fn debug_redacts_password() {
    let creds = Credentials::parse("alice", "hunter2").unwrap();
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("alice"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn login_response_accepts_message_and_token() {
    let body: LoginResponse = serde_json::from_str(r#"{"message":"ok","token":"abc123"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("ok"));
    assert_eq!(body.token.as_deref(), Some("abc123"));
}

#[test]
fn login_response_tolerates_missing_token() {
    let body: LoginResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    assert_eq!(body.token, None);
}

#[test]
fn message_body_requires_message() {
    assert!(serde_json::from_str::<MessageBody>(r#"{"detail":"x"}"#).is_err());
}
