//! Email + password login form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::submit::FormDraft;
use super::validation::{FieldError, FieldRules, FormPhase, Validator};
use super::{FormBanner, TextField, field_feedback};
use crate::net::types::Credentials;
use crate::state::session::use_session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl FormDraft for LoginDraft {
    type Payload = Credentials;

    fn validate(&self) -> Vec<FieldError> {
        Validator::new()
            .field("email", self.email.trim(), FieldRules::required().email())
            .field("password", &self.password, FieldRules::required())
            .finish()
    }

    fn payload(&self) -> Credentials {
        Credentials { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phase = RwSignal::new(FormPhase::Untouched);
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let draft = move || LoginDraft { email: email.get(), password: password.get() };
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
                let result = super::submit::submit(&current, |credentials| async move {
                    let tokens = crate::net::user_api::obtain_token(&credentials).await?;
                    session.sign_in(&tokens).await
                })
                .await;
                busy.set(false);
                match result {
                    Ok(()) => navigate(&session.take_redirect_path(), leptos_router::NavigateOptions::default()),
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
        <form class="auth-form" novalidate=true on:submit=on_submit>
            <h1>"Log in"</h1>
            <FormBanner message=banner/>
            <TextField
                label="Email"
                input_type="email"
                value=email
                autofocus=true
                feedback=field_feedback(phase, errors, "email")
            />
            <TextField
                label="Password"
                input_type="password"
                value=password
                feedback=field_feedback(phase, errors, "password")
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Log in"
            </button>
            <p class="auth-form__alt">
                "No account yet? "
                <a href=crate::config::REGISTER_PATH>"Register"</a>
            </p>
        </form>
    }
}
