//! Password change for the logged-in user.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;

use super::register::PASSWORD;
use super::submit::FormDraft;
use super::validation::{FieldError, FieldRules, FormPhase, Validator, Violation};
use super::{FormBanner, TextField, field_feedback};
use crate::net::types::PasswordChange;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    pub old_password: String,
    pub new_password: String,
    pub confirmation: String,
}

impl FormDraft for PasswordDraft {
    type Payload = PasswordChange;

    fn validate(&self) -> Vec<FieldError> {
        Validator::new()
            .field("old_password", &self.old_password, FieldRules::required())
            .field("new_password", &self.new_password, PASSWORD)
            .field("confirmation", &self.confirmation, FieldRules::required())
            .ensure(
                "confirmation",
                self.confirmation.is_empty() || self.confirmation == self.new_password,
                Violation::Mismatch,
            )
            .finish()
    }

    fn payload(&self) -> PasswordChange {
        PasswordChange { old_password: self.old_password.clone(), new_password: self.new_password.clone() }
    }
}

#[component]
pub fn ChangePasswordForm() -> impl IntoView {
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let phase = RwSignal::new(FormPhase::Untouched);
    let banner = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let draft = move || PasswordDraft {
        old_password: old_password.get(),
        new_password: new_password.get(),
        confirmation: confirmation.get(),
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
        notice.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = super::submit::submit(&current, |change| async move {
                crate::net::user_api::change_password(&change).await
            })
            .await;
            busy.set(false);
            match result {
                Ok(()) => {
                    for field in [old_password, new_password, confirmation] {
                        field.set(String::new());
                    }
                    phase.set(FormPhase::Untouched);
                    notice.set(Some("Password changed."));
                }
                Err(err) => banner.set(err.banner()),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = current;
            busy.set(false);
        }
    };

    view! {
        <form class="profile-form" novalidate=true on:submit=on_submit>
            <h2>"Change password"</h2>
            <FormBanner message=banner/>
            {move || notice.get().map(|msg| view! { <p class="form-banner form-banner--ok">{msg}</p> })}
            <TextField
                label="Current password"
                input_type="password"
                value=old_password
                feedback=field_feedback(phase, errors, "old_password")
            />
            <TextField
                label="New password"
                input_type="password"
                value=new_password
                feedback=field_feedback(phase, errors, "new_password")
            />
            <TextField
                label="Confirm new password"
                input_type="password"
                value=confirmation
                feedback=field_feedback(phase, errors, "confirmation")
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Change password"
            </button>
        </form>
    }
}
