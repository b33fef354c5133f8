//! New-account registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::address::{AddressFields, AddressSignals, validate_address};
use super::submit::FormDraft;
use super::validation::{FieldError, FieldRules, FormPhase, Pattern, Validator, Violation};
use super::{FormBanner, TextField, field_feedback};
use crate::net::types::{Address, Registration};

pub const NAME: FieldRules = FieldRules::required().min(2).pattern(Pattern::Letters);
pub const EMAIL: FieldRules = FieldRules::required().min(7).email();
pub const PHONE: FieldRules = FieldRules::required().min(8).max(17).pattern(Pattern::Digits);
pub const PASSWORD: FieldRules = FieldRules::required().min(8);

/// Country code shown in front of the phone input and sent with the number.
pub const PHONE_PREFIX: &str = "+47";

/// Prefix a local number with the country code.
pub fn phone_with_prefix(local: &str) -> String {
    format!("{PHONE_PREFIX}{}", local.trim())
}

/// Strip the country code from a stored number for editing.
pub fn phone_without_prefix(stored: &str) -> String {
    let stored = stored.trim();
    stored.strip_prefix(PHONE_PREFIX).unwrap_or(stored).to_owned()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password2: String,
    pub address: Address,
}

impl FormDraft for RegisterDraft {
    type Payload = Registration;

    fn validate(&self) -> Vec<FieldError> {
        let mut validator = Validator::new();
        validator
            .field("first_name", self.first_name.trim(), NAME)
            .field("last_name", self.last_name.trim(), NAME)
            .field("email", self.email.trim(), EMAIL)
            .field("phone_number", self.phone.trim(), PHONE)
            .field("password", &self.password, PASSWORD)
            .field("password2", &self.password2, FieldRules::required())
            .ensure("password2", self.password2.is_empty() || self.password == self.password2, Violation::Mismatch);
        validate_address(&mut validator, &self.address).finish()
    }

    fn payload(&self) -> Registration {
        Registration {
            email: self.email.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            phone_number: phone_with_prefix(&self.phone),
            password: self.password.clone(),
            password2: self.password2.clone(),
            address: self.address.clone(),
        }
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let address = AddressSignals::new(&Address::default());
    let phase = RwSignal::new(FormPhase::Untouched);
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let draft = move || RegisterDraft {
        first_name: first_name.get(),
        last_name: last_name.get(),
        email: email.get(),
        phone: phone.get(),
        password: password.get(),
        password2: password2.get(),
        address: address.get(),
    };
    let errors = Memo::new(move |_| draft().validate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        phase.set(FormPhase::Validated);
        if busy.get_untracked() {
            return;
        }
        let current = draft();
        busy.set(true);
        banner.set(None);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = super::submit::submit(&current, |registration| async move {
                    crate::net::user_api::register(&registration).await
                })
                .await;
                busy.set(false);
                match result {
                    Ok(user) => {
                        log::info!("registered {}", user.email);
                        navigate(crate::config::LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => banner.set(err.banner()),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, &navigate);
            busy.set(false);
        }
    };

    view! {
        <form class="auth-form" novalidate=true on:submit=on_submit>
            <h1>"Create account"</h1>
            <FormBanner message=banner/>
            <div class="form-row">
                <TextField
                    label="First name"
                    value=first_name
                    autofocus=true
                    feedback=field_feedback(phase, errors, "first_name")
                />
                <TextField label="Last name" value=last_name feedback=field_feedback(phase, errors, "last_name")/>
            </div>
            <TextField label="Email" input_type="email" value=email feedback=field_feedback(phase, errors, "email")/>
            <TextField
                label="Phone"
                input_type="tel"
                prefix=PHONE_PREFIX
                value=phone
                feedback=field_feedback(phase, errors, "phone_number")
            />
            <TextField
                label="Password"
                input_type="password"
                value=password
                feedback=field_feedback(phase, errors, "password")
            />
            <TextField
                label="Confirm password"
                input_type="password"
                value=password2
                feedback=field_feedback(phase, errors, "password2")
            />
            <AddressFields address=address phase=phase errors=errors/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Register"
            </button>
            <p class="auth-form__alt">
                "Already registered? "
                <a href=crate::config::LOGIN_PATH>"Log in"</a>
            </p>
        </form>
    }
}
