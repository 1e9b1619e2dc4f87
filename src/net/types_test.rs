use super::*;

fn user_with_email(email: &str) -> User {
    User { id: "u-1".to_owned(), email: email.to_owned(), name: None }
}

#[test]
fn display_name_is_local_part_of_email() {
    assert_eq!(user_with_email("ada@example.com").display_name(), "ada");
}

#[test]
fn display_name_stops_at_first_at_sign() {
    assert_eq!(user_with_email("odd@name@example.com").display_name(), "odd");
}

#[test]
fn display_name_without_at_sign_is_whole_email() {
    assert_eq!(user_with_email("localonly").display_name(), "localonly");
}

#[test]
fn display_name_with_leading_at_sign_is_empty() {
    assert_eq!(user_with_email("@example.com").display_name(), "");
}

#[test]
fn user_deserializes_without_name() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-9",
        "email": "grace@example.com"
    }))
    .expect("user should parse");
    assert_eq!(user.id, "u-9");
    assert_eq!(user.name, None);
    assert_eq!(user.display_name(), "grace");
}
