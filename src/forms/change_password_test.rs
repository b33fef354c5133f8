use super::*;

#[test]
fn confirmation_must_match_new_password() {
    let draft = PasswordDraft {
        old_password: "old-secret".to_owned(),
        new_password: "new-secret".to_owned(),
        confirmation: "new-secrat".to_owned(),
    };
    assert_eq!(draft.validate(), vec![FieldError { field: "confirmation", violation: Violation::Mismatch }]);
}

#[test]
fn empty_confirmation_reports_missing_only() {
    let draft = PasswordDraft {
        old_password: "old-secret".to_owned(),
        new_password: "new-secret".to_owned(),
        confirmation: String::new(),
    };
    assert_eq!(draft.validate(), vec![FieldError { field: "confirmation", violation: Violation::Missing }]);
}

#[test]
fn payload_omits_confirmation() {
    let draft = PasswordDraft {
        old_password: "old-secret".to_owned(),
        new_password: "new-secret".to_owned(),
        confirmation: "new-secret".to_owned(),
    };
    assert!(draft.validate().is_empty());
    assert_eq!(
        draft.payload(),
        PasswordChange { old_password: "old-secret".to_owned(), new_password: "new-secret".to_owned() }
    );
}

#[test]
fn short_new_password_is_rejected() {
    let draft = PasswordDraft {
        old_password: "old-secret".to_owned(),
        new_password: "short".to_owned(),
        confirmation: "short".to_owned(),
    };
    assert_eq!(draft.validate(), vec![FieldError { field: "new_password", violation: Violation::TooShort { min: 8 } }]);
}
