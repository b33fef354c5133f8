//! Controlled-input forms with client-side validation.
//!
//! ARCHITECTURE
//! ============
//! Each form module pairs a plain draft struct (rules + payload, unit-tested)
//! with the component that mirrors keystrokes into signals. Submission goes
//! through [`submit::submit`], which refuses to call the API for an invalid
//! draft.

pub mod ad_form;
pub mod address;
pub mod change_password;
pub mod edit_profile;
pub mod login;
pub mod register;
pub mod submit;
pub mod validation;

use leptos::prelude::*;

use validation::{FieldError, FormPhase};

/// Live feedback for one field: the first violation, shown only once the
/// form has been submitted at least once.
pub fn field_feedback(phase: RwSignal<FormPhase>, errors: Memo<Vec<FieldError>>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || {
        if phase.get() != FormPhase::Validated {
            return None;
        }
        errors.with(|errs| {
            errs.iter()
                .find(|e| e.field == field)
                .map(|e| e.violation.to_string())
        })
    })
}

/// Labelled text input bound to a signal.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] feedback: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] prefix: Option<&'static str>,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <span class="form-field__control">
                {prefix.map(|p| view! { <span class="form-field__prefix">{p}</span> })}
                <input
                    class="form-field__input"
                    class:form-field__input--invalid=move || feedback.with(Option::is_some)
                    type=input_type
                    autofocus=autofocus
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </span>
            {move || feedback.get().map(|msg| view! { <span class="form-field__feedback">{msg}</span> })}
        </label>
    }
}

/// Multi-line variant of [`TextField`].
#[component]
pub fn TextAreaField(label: &'static str, value: RwSignal<String>, #[prop(into)] feedback: Signal<Option<String>>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input form-field__input--multiline"
                class:form-field__input--invalid=move || feedback.with(Option::is_some)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            {move || feedback.get().map(|msg| view! { <span class="form-field__feedback">{msg}</span> })}
        </label>
    }
}

/// Inline error banner shared by all forms.
#[component]
pub fn FormBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|msg| view! { <p class="form-banner form-banner--error">{msg}</p> })
    }
}
