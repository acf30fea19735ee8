use iap_access_gate::access_gate::domain::model::{
    commands::decide_access_command::DecideAccessCommand,
    enums::access_gate_domain_error::AccessGateDomainError,
    value_objects::{display_name::DisplayName, user_email::UserEmail},
};

fn display_name_for(email: &str) -> String {
    DisplayName::from_email(&UserEmail::new(email.to_string()).expect("valid email"))
        .into_inner()
}

#[test]
fn display_name_splits_dots_and_underscores() {
    assert_eq!(display_name_for("john.doe_smith@example.com"), "John Doe Smith");
}

#[test]
fn display_name_title_cases_each_word() {
    assert_eq!(display_name_for("MARY.ann@example.com"), "Mary Ann");
    assert_eq!(display_name_for("o'neil@example.com"), "O'Neil");
    assert_eq!(display_name_for("agent007x@example.com"), "Agent007X");
}

#[test]
fn display_name_uses_whole_value_without_at_sign() {
    assert_eq!(display_name_for("first_last"), "First Last");
}

#[test]
fn user_email_is_not_normalized() {
    let email = UserEmail::new(" Bob@Example.com".to_string()).expect("valid email");
    assert_eq!(email.value(), " Bob@Example.com");
    assert_eq!(email.local_part(), " Bob");
}

#[test]
fn user_email_rejects_empty_value() {
    assert!(matches!(
        UserEmail::new(String::new()),
        Err(AccessGateDomainError::InvalidEmail)
    ));
}

#[test]
fn user_email_accepts_claims_longer_than_stored_column() {
    let claimed = format!("{}@example.com", "a".repeat(130));
    let email = UserEmail::new(claimed.clone()).expect("long email is still an identity");
    assert_eq!(email.value(), claimed);
}

#[test]
fn decide_command_drops_empty_ip() {
    let command = DecideAccessCommand::new("a@example.com".to_string(), Some(String::new()))
        .expect("valid command");
    assert_eq!(command.ip_address(), None);
}
