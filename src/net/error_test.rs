use super::*;
use serde_json::json;

#[test]
fn detail_message_wins() {
    let body = json!({ "detail": "Given token not valid for any token type", "code": "token_not_valid" });
    assert_eq!(read_backend_error(&body), "Given token not valid for any token type");
}

#[test]
fn field_errors_are_prefixed_and_joined() {
    let body = json!({ "email": ["user with this email already exists."], "password": ["Feil passord"] });
    assert_eq!(
        read_backend_error(&body),
        "email: user with this email already exists. password: Feil passord"
    );
}

#[test]
fn non_field_errors_have_no_prefix() {
    let body = json!({ "non_field_errors": ["Passwords must match."] });
    assert_eq!(read_backend_error(&body), "Passwords must match.");
}

#[test]
fn nested_address_errors_keep_inner_field() {
    let body = json!({ "address": { "postal_code": ["Ensure this field has no more than 4 characters."] } });
    assert_eq!(
        read_backend_error(&body),
        "address: postal_code: Ensure this field has no more than 4 characters."
    );
}

#[test]
fn unreadable_bodies_fall_back_to_generic_message() {
    assert_eq!(read_backend_error(&Value::Null), GENERIC_ERROR_MESSAGE);
    assert_eq!(read_backend_error(&json!({})), GENERIC_ERROR_MESSAGE);
    assert_eq!(read_backend_error(&json!([1, 2])), GENERIC_ERROR_MESSAGE);
}

#[test]
fn from_status_keeps_plain_text_bodies() {
    let err = ApiError::from_status(500, "Server Error");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "Server Error");
}

#[test]
fn from_status_parses_json_bodies() {
    let err = ApiError::from_status(400, r#"{"title":["This field is required."]}"#);
    assert_eq!(err.user_message(), "title: This field is required.");
}

#[test]
fn empty_body_maps_to_generic_message() {
    let err = ApiError::from_status(403, "  ");
    assert_eq!(err, ApiError::Status { status: 403, body: Value::Null });
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn only_401_counts_as_unauthorized() {
    assert!(ApiError::from_status(401, "").is_unauthorized());
    assert!(!ApiError::from_status(403, "").is_unauthorized());
    assert!(!ApiError::Transport("offline".to_owned()).is_unauthorized());
}

#[test]
fn transport_errors_show_generic_message() {
    let err = ApiError::Transport("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "network error: Failed to fetch");
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}
