use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::forms::submit::{SubmitError, submit};
use crate::forms::validation::Violation;
use crate::net::error::ApiError;

fn storgata() -> Address {
    Address { street_address: " Storgata 1 ".to_owned(), postal_code: "0155".to_owned(), city: "Oslo ".to_owned() }
}

#[test]
fn blank_address_reports_every_field() {
    let fields: Vec<_> = Address::default().validate().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["street_address", "postal_code", "city"]);
}

#[test]
fn postal_code_must_be_four_digits() {
    let address = Address { postal_code: "01a5".to_owned(), ..storgata() };
    assert_eq!(
        address.validate(),
        vec![FieldError { field: "postal_code", violation: Violation::PatternMismatch }]
    );
}

#[test]
fn valid_address_is_sent_trimmed_once() {
    let sent = RefCell::new(Vec::new());
    let result: Result<Address, SubmitError> = block_on(submit(&storgata(), |payload| {
        sent.borrow_mut().push(payload.clone());
        std::future::ready(Ok::<_, ApiError>(payload))
    }));

    assert!(result.is_ok());
    assert_eq!(
        sent.into_inner(),
        vec![Address { street_address: "Storgata 1".to_owned(), postal_code: "0155".to_owned(), city: "Oslo".to_owned() }]
    );
}
