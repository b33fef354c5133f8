//! Address inputs shared by registration and profile editing, plus the
//! standalone form that adds an address to an existing account.

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

use leptos::prelude::*;

use super::submit::FormDraft;
use super::validation::{FieldError, FieldRules, FormPhase, Pattern, Validator};
use super::{FormBanner, TextField, field_feedback};
use crate::net::types::Address;
use crate::state::session::use_session;

pub const STREET: FieldRules = FieldRules::required().max(128);
pub const POSTAL_CODE: FieldRules = FieldRules::required().min(4).max(4).pattern(Pattern::Digits);
pub const CITY: FieldRules = FieldRules::required().max(64);

/// Append address violations to `validator`.
pub fn validate_address<'a>(validator: &'a mut Validator, address: &Address) -> &'a mut Validator {
    validator
        .field("street_address", &address.street_address, STREET)
        .field("postal_code", &address.postal_code, POSTAL_CODE)
        .field("city", &address.city, CITY)
}

impl FormDraft for Address {
    type Payload = Address;

    fn validate(&self) -> Vec<FieldError> {
        validate_address(&mut Validator::new(), self).finish()
    }

    fn payload(&self) -> Address {
        Address {
            street_address: self.street_address.trim().to_owned(),
            postal_code: self.postal_code.trim().to_owned(),
            city: self.city.trim().to_owned(),
        }
    }
}

/// Signals backing the three address inputs.
#[derive(Clone, Copy, Debug)]
pub struct AddressSignals {
    pub street_address: RwSignal<String>,
    pub postal_code: RwSignal<String>,
    pub city: RwSignal<String>,
}

impl AddressSignals {
    pub fn new(initial: &Address) -> Self {
        Self {
            street_address: RwSignal::new(initial.street_address.clone()),
            postal_code: RwSignal::new(initial.postal_code.clone()),
            city: RwSignal::new(initial.city.clone()),
        }
    }

    pub fn get(&self) -> Address {
        Address {
            street_address: self.street_address.get().trim().to_owned(),
            postal_code: self.postal_code.get().trim().to_owned(),
            city: self.city.get().trim().to_owned(),
        }
    }
}

#[component]
pub fn AddressFields(address: AddressSignals, phase: RwSignal<FormPhase>, errors: Memo<Vec<FieldError>>) -> impl IntoView {
    view! {
        <fieldset class="form-fieldset">
            <legend>"Address"</legend>
            <TextField
                label="Street address"
                value=address.street_address
                feedback=field_feedback(phase, errors, "street_address")
            />
            <div class="form-row">
                <TextField
                    label="Postal code"
                    value=address.postal_code
                    feedback=field_feedback(phase, errors, "postal_code")
                />
                <TextField label="City" value=address.city feedback=field_feedback(phase, errors, "city")/>
            </div>
        </fieldset>
    }
}

/// Adds an address for a user who registered without one.
#[component]
pub fn AddAddressForm() -> impl IntoView {
    let session = use_session();
    let address = AddressSignals::new(&Address::default());
    let phase = RwSignal::new(FormPhase::Untouched);
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let errors = Memo::new(move |_| address.get().validate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        phase.set(FormPhase::Validated);
        if busy.get_untracked() {
            return;
        }
        let current = address.get();
        busy.set(true);
        banner.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = super::submit::submit(&current, |payload| async move {
                crate::net::user_api::update_address(&payload).await
            })
            .await;
            busy.set(false);
            match result {
                Ok(_) => {
                    let _ = session.update_self_user().await;
                }
                Err(err) => banner.set(err.banner()),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, session);
            busy.set(false);
        }
    };

    view! {
        <form class="profile-form" novalidate=true on:submit=on_submit>
            <h2>"Add address"</h2>
            <FormBanner message=banner/>
            <AddressFields address=address phase=phase errors=errors/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Save address"
            </button>
        </form>
    }
}
