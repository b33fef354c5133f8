use super::*;

fn bike() -> AdDraft {
    AdDraft {
        title: "Bike".to_owned(),
        price: "100".to_owned(),
        description: "Barely used.".to_owned(),
        category: Some(2),
        is_sold: None,
    }
}

#[test]
fn valid_draft_builds_payload() {
    let draft = bike();
    assert!(draft.validate().is_empty());
    assert_eq!(
        draft.payload(),
        AdPayload {
            title: "Bike".to_owned(),
            price: 100,
            description: "Barely used.".to_owned(),
            category: Some(2),
            is_sold: None,
        }
    );
}

#[test]
fn price_must_be_digits() {
    let draft = AdDraft { price: "12.5".to_owned(), ..bike() };
    assert_eq!(draft.validate(), vec![FieldError { field: "price", violation: Violation::PatternMismatch }]);
}

#[test]
fn price_above_limit_is_out_of_range() {
    let draft = AdDraft { price: "32768".to_owned(), ..bike() };
    assert_eq!(draft.validate(), vec![FieldError { field: "price", violation: Violation::OutOfRange }]);

    let edge = AdDraft { price: "32767".to_owned(), ..bike() };
    assert!(edge.validate().is_empty());
}

#[test]
fn huge_digit_strings_do_not_overflow() {
    let draft = AdDraft { price: "9".repeat(30), ..bike() };
    assert_eq!(draft.validate(), vec![FieldError { field: "price", violation: Violation::OutOfRange }]);
}

#[test]
fn long_title_and_description_are_rejected() {
    let draft = AdDraft { title: "x".repeat(101), description: "y".repeat(513), ..bike() };
    let fields: Vec<_> = draft.validate().into_iter().map(|e| (e.field, e.violation)).collect();
    assert_eq!(
        fields,
        vec![("title", Violation::TooLong { max: 100 }), ("description", Violation::TooLong { max: 512 })]
    );
}

#[test]
fn editing_prefills_sold_flag() {
    let ad = Ad {
        id: 1,
        title: "Bike".to_owned(),
        price: 100,
        description: "Barely used.".to_owned(),
        category: None,
        is_sold: true,
        thumbnail: None,
        images: Vec::new(),
        owner: None,
        distance: None,
    };
    let draft = AdDraft::from_ad(&ad);
    assert_eq!(draft.price, "100");
    assert_eq!(draft.payload().is_sold, Some(true));
}
