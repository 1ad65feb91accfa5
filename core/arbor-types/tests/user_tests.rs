use arbor_types::{Error, User};

#[test]
fn new_user() {
    let user = User::new("test").unwrap();
    assert_eq!(user.username(), "test");
    assert!(user.email().is_none());
    assert!(user.display_name().is_none());
    assert_eq!(user.to_string(), "test");
}

#[test]
fn empty_username_rejected() {
    let err = User::new("").unwrap_err();
    assert!(matches!(err, Error::InvalidUser(_)));
    assert!(format!("{err}").contains("username is empty"));
}

#[test]
fn username_must_be_single_segment() {
    for bad in [".", "..", "a/b", "../etc", "a\\b", "nul\0"] {
        let err = User::new(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidUser(_)), "{bad:?} accepted");
    }
    assert!(User::new(".hidden").is_ok());
    assert!(User::new("ä-user").is_ok());
}

#[test]
fn builder_fields() {
    let user = User::new("alice")
        .unwrap()
        .with_email(Some("alice@example.com".into()))
        .with_display_name(Some("Alice".into()));
    assert_eq!(user.email(), Some("alice@example.com"));
    assert_eq!(user.display_name(), Some("Alice"));
}

#[test]
fn from_json_minimal() {
    let user = User::from_json(r#"{"username":"bob"}"#).unwrap();
    assert_eq!(user.username(), "bob");
}

#[test]
fn from_json_full() {
    let user = User::from_json(
        r#"{"username":"bob","email":"bob@example.com","display_name":"Bob"}"#,
    )
    .unwrap();
    assert_eq!(user.email(), Some("bob@example.com"));
    assert_eq!(user.display_name(), Some("Bob"));
}

#[test]
fn from_json_empty_username_fails() {
    assert!(User::from_json(r#"{"username":""}"#).is_err());
}

#[test]
fn from_json_missing_username_fails() {
    let err = User::from_json(r#"{"email":"x@example.com"}"#).unwrap_err();
    assert!(format!("{err}").contains("serialization"));
}

#[test]
fn serialize_skips_missing_optionals() {
    let json = serde_json::to_string(&User::new("carol").unwrap()).unwrap();
    assert_eq!(json, r#"{"username":"carol"}"#);
}
