//! Profile editing for the logged-in user.
//!
//! The backend requires the current password to confirm the edit. Address
//! inputs are shown, and validated, only when the user already has an
//! address on file.

#[cfg(test)]
#[path = "edit_profile_test.rs"]
mod edit_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::address::{AddressFields, AddressSignals, validate_address};
use super::register::{EMAIL, NAME, PASSWORD, PHONE, PHONE_PREFIX, phone_with_prefix, phone_without_prefix};
use super::submit::FormDraft;
use super::validation::{FieldError, FormPhase, Validator};
use super::{FormBanner, TextField, field_feedback};
use crate::net::types::{Address, ProfileUpdate, User};
use crate::state::session::use_session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Local number without the country code.
    pub phone: String,
    /// Current password, confirming the edit.
    pub password: String,
    pub address: Option<Address>,
}

impl ProfileDraft {
    /// Pre-fill from the cached user. The password is never pre-filled.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone_number.as_deref().map(phone_without_prefix).unwrap_or_default(),
            password: String::new(),
            address: user.address.clone(),
        }
    }
}

impl FormDraft for ProfileDraft {
    type Payload = ProfileUpdate;

    fn validate(&self) -> Vec<FieldError> {
        let mut validator = Validator::new();
        validator
            .field("first_name", self.first_name.trim(), NAME)
            .field("last_name", self.last_name.trim(), NAME)
            .field("email", self.email.trim(), EMAIL)
            .field("phone_number", self.phone.trim(), PHONE)
            .field("password", &self.password, PASSWORD);
        if let Some(address) = &self.address {
            validate_address(&mut validator, address);
        }
        validator.finish()
    }

    fn payload(&self) -> ProfileUpdate {
        ProfileUpdate {
            email: self.email.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            phone_number: phone_with_prefix(&self.phone),
            password: self.password.clone(),
            address: self.address.clone(),
        }
    }
}

#[component]
pub fn EditProfileForm(user: User) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let initial = ProfileDraft::from_user(&user);
    let has_address = initial.address.is_some();

    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let password = RwSignal::new(String::new());
    let address = AddressSignals::new(&initial.address.unwrap_or_default());
    let phase = RwSignal::new(FormPhase::Untouched);
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let draft = move || ProfileDraft {
        first_name: first_name.get(),
        last_name: last_name.get(),
        email: email.get(),
        phone: phone.get(),
        password: password.get(),
        address: has_address.then(|| address.get()),
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
                let result = super::submit::submit(&current, |update| async move {
                    crate::net::user_api::edit_self_user(&update).await
                })
                .await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        let _ = session.update_self_user().await;
                        navigate("/profile", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => banner.set(err.banner()),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, &navigate, session);
            busy.set(false);
        }
    };

    view! {
        <form class="profile-form" novalidate=true on:submit=on_submit>
            <h2>"Edit profile"</h2>
            <FormBanner message=banner/>
            <div class="form-row">
                <TextField label="First name" value=first_name feedback=field_feedback(phase, errors, "first_name")/>
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
            {has_address.then(|| view! { <AddressFields address=address phase=phase errors=errors/> })}
            <TextField
                label="Current password"
                input_type="password"
                value=password
                feedback=field_feedback(phase, errors, "password")
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Save changes"
            </button>
        </form>
    }
}
