use super::*;

fn valid_draft() -> RegisterDraft {
    RegisterDraft {
        first_name: "Kari".to_owned(),
        last_name: "Nordmann".to_owned(),
        email: "kari@example.no".to_owned(),
        phone: "98765432".to_owned(),
        password: "hunter22!".to_owned(),
        password2: "hunter22!".to_owned(),
        address: Address {
            street_address: "Storgata 1".to_owned(),
            postal_code: "0155".to_owned(),
            city: "Oslo".to_owned(),
        },
    }
}

#[test]
fn complete_draft_is_valid() {
    assert!(valid_draft().validate().is_empty());
}

#[test]
fn payload_prefixes_country_code() {
    let payload = valid_draft().payload();
    assert_eq!(payload.phone_number, "+4798765432");
    assert_eq!(payload.address.city, "Oslo");
}

#[test]
fn mismatched_confirmation_is_reported() {
    let draft = RegisterDraft { password2: "hunter23!".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(), vec![FieldError { field: "password2", violation: Violation::Mismatch }]);
}

#[test]
fn names_must_be_letters() {
    let draft = RegisterDraft { last_name: "N0rdmann".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(), vec![FieldError { field: "last_name", violation: Violation::PatternMismatch }]);
}

#[test]
fn non_ascii_letters_are_accepted_in_names() {
    let draft = RegisterDraft { first_name: "Åse".to_owned(), last_name: "Bjørnstad".to_owned(), ..valid_draft() };
    assert!(draft.validate().is_empty());
}

#[test]
fn phone_length_bounds() {
    let short = RegisterDraft { phone: "1234567".to_owned(), ..valid_draft() };
    assert_eq!(short.validate()[0].violation, Violation::TooShort { min: 8 });

    let long = RegisterDraft { phone: "1".repeat(18), ..valid_draft() };
    assert_eq!(long.validate()[0].violation, Violation::TooLong { max: 17 });
}

#[test]
fn address_postal_code_must_be_four_digits() {
    let mut draft = valid_draft();
    draft.address.postal_code = "01a5".to_owned();
    assert_eq!(draft.validate(), vec![FieldError { field: "postal_code", violation: Violation::PatternMismatch }]);
}

#[test]
fn phone_prefix_round_trips_for_editing() {
    assert_eq!(phone_without_prefix("+4798765432"), "98765432");
    assert_eq!(phone_without_prefix("98765432"), "98765432");
}
