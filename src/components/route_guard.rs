//! Authentication gate for private routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps every page that needs a logged-in user in [`ProtectedRoute`].
//! Anonymous visitors are sent to the login page, and the path they tried to
//! open is handed to the session so login can return them there.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

/// What the guard renders for one check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect { to: String, attempted: String },
}

/// Decide between the guarded page and a redirect. On redirect the attempted
/// path is passed to `record_attempt` before returning.
pub fn resolve_guard<F>(is_authenticated: bool, authentication_path: &str, attempted: &str, record_attempt: F) -> GuardOutcome
where
    F: FnOnce(String),
{
    if is_authenticated {
        return GuardOutcome::Render;
    }
    record_attempt(attempted.to_owned());
    GuardOutcome::Redirect { to: authentication_path.to_owned(), attempted: attempted.to_owned() }
}

#[component]
pub fn ProtectedRoute(
    #[prop(into)] is_authenticated: Signal<bool>,
    #[prop(into)] authentication_path: String,
    set_redirect_path: Callback<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let location = use_location();

    move || {
        let attempted = location.pathname.get();
        match resolve_guard(is_authenticated.get(), &authentication_path, &attempted, |path| {
            set_redirect_path.run(path);
        }) {
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::Redirect { to, .. } => view! { <Redirect path=to/> }.into_any(),
        }
    }
}
